//! Diagnostic report panel.
//!
//! A pure mapping from a `DiagnosticResult` (plus display-only model
//! metadata) to styled lines: severity banner, category badge, confidence,
//! description, symptom and recommendation lists.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use leafscan_core::{DiagnosticResult, ModelMetadata};

use crate::theme::{styles, IconSet};

pub struct ResultPanel<'a> {
    result: &'a DiagnosticResult,
    model_info: Option<&'a ModelMetadata>,
    icons: IconSet,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: &'a DiagnosticResult, icons: IconSet) -> Self {
        Self {
            result,
            model_info: None,
            icons,
        }
    }

    pub fn model_info(mut self, info: Option<&'a ModelMetadata>) -> Self {
        self.model_info = info;
        self
    }

    /// Build the report lines. Split out so tests can assert on content
    /// without a terminal buffer.
    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let result = self.result;
        let mut lines = Vec::new();

        // Severity banner with detection verdict.
        let verdict_icon = if result.disease_present {
            self.icons.alert()
        } else {
            self.icons.check()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {} ", verdict_icon, result.disease_label),
                styles::severity_style(result.severity),
            ),
            Span::styled(
                format!("[{}]", result.severity.label()),
                styles::severity_style(result.severity),
            ),
        ]));

        // Category badge plus pathogen.
        let mut badge = vec![Span::styled(
            format!("{} {}", self.icons.category(result.category), result.category.label()),
            styles::text_secondary(),
        )];
        if let Some(pathogen) = &result.pathogen {
            badge.push(Span::styled(
                format!("  ({pathogen})"),
                styles::text_muted(),
            ));
        }
        lines.push(Line::from(badge));

        if let Some(confidence) = result.confidence {
            lines.push(Line::from(Span::styled(
                format!(
                    "Confidence: {} ({}%)",
                    confidence.level.label(),
                    confidence.percent
                ),
                styles::confidence_style(confidence.level),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            result.description.clone(),
            styles::text_primary(),
        )));

        if !result.symptoms.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Symptoms".to_string(),
                styles::accent_bold(),
            )));
            for symptom in &result.symptoms {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {} ", self.icons.chevron_right()),
                        styles::text_muted(),
                    ),
                    Span::styled(symptom.clone(), styles::text_primary()),
                ]));
            }
        }

        if !result.recommendations.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Recommendations".to_string(),
                styles::accent_bold(),
            )));
            for rec in &result.recommendations {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", self.icons.check()), styles::accent()),
                    Span::styled(rec.clone(), styles::text_primary()),
                ]));
            }
        }

        if let Some(info) = self.model_info {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(
                    "{} {} · {} · {:.1}% reported accuracy",
                    self.icons.info(),
                    info.model_name,
                    info.architecture,
                    info.accuracy_percent
                ),
                styles::text_muted(),
            )));
        }

        lines
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(true).title(" Diagnosis ");
        Paragraph::new(self.build_lines())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafscan_core::{Confidence, ConfidenceLevel, DiseaseCategory, Severity};

    fn demo_result() -> DiagnosticResult {
        DiagnosticResult {
            disease_present: true,
            disease_id: "Tomato_Early_Blight".to_string(),
            disease_label: "Tomato Early Blight".to_string(),
            confidence: Some(Confidence::new(ConfidenceLevel::High, 92)),
            symptoms: vec!["Dark lesions".to_string()],
            description: "Early blight signs.".to_string(),
            recommendations: vec!["Apply fungicide".to_string()],
            severity: Severity::Moderate,
            pathogen: Some("Alternaria solani".to_string()),
            category: DiseaseCategory::Fungal,
            thermal: None,
        }
    }

    fn flatten(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_report_contains_all_sections() {
        let result = demo_result();
        let meta = ModelMetadata {
            model_name: "Demo".to_string(),
            architecture: "ResNet-152".to_string(),
            accuracy_percent: 98.7,
        };
        let panel = ResultPanel::new(&result, IconSet::new(false)).model_info(Some(&meta));
        let text = flatten(&panel.build_lines());

        assert!(text.contains("Tomato Early Blight"));
        assert!(text.contains("[Moderate]"));
        assert!(text.contains("Fungal"));
        assert!(text.contains("Alternaria solani"));
        assert!(text.contains("Confidence: High (92%)"));
        assert!(text.contains("Symptoms"));
        assert!(text.contains("Dark lesions"));
        assert!(text.contains("Recommendations"));
        assert!(text.contains("Apply fungicide"));
        assert!(text.contains("ResNet-152"));
    }

    #[test]
    fn test_severity_banner_uses_mapped_color() {
        let result = demo_result();
        let panel = ResultPanel::new(&result, IconSet::new(false));
        let lines = panel.build_lines();
        let banner_style = lines[0].spans[0].style;
        assert_eq!(
            banner_style.fg,
            Some(styles::severity_color(Severity::Moderate))
        );
    }

    #[test]
    fn test_sections_omitted_when_absent() {
        let mut result = demo_result();
        result.confidence = None;
        result.recommendations.clear();
        result.pathogen = None;

        let panel = ResultPanel::new(&result, IconSet::new(false));
        let text = flatten(&panel.build_lines());
        assert!(!text.contains("Confidence:"));
        assert!(!text.contains("Recommendations"));
    }
}
