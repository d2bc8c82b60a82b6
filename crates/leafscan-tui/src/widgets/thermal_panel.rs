//! Thermal findings panel, shown for infrared results only.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use leafscan_core::{ThermalAnalysis, WaterContent};

use crate::theme::{palette, styles, IconSet};

pub struct ThermalPanel<'a> {
    thermal: &'a ThermalAnalysis,
    icons: IconSet,
}

impl<'a> ThermalPanel<'a> {
    pub fn new(thermal: &'a ThermalAnalysis, icons: IconSet) -> Self {
        Self { thermal, icons }
    }

    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let thermal = self.thermal;
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{} Temperature  ", self.icons.thermometer()),
                Style::default().fg(palette::THERMAL_ACCENT),
            ),
            Span::styled(
                thermal.temperature_distribution.clone(),
                styles::text_primary(),
            ),
        ])];

        if !thermal.stress_regions.is_empty() {
            lines.push(Line::from(Span::styled(
                "Stress regions".to_string(),
                Style::default().fg(palette::THERMAL_ACCENT),
            )));
            for region in &thermal.stress_regions {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {} ", self.icons.chevron_right()),
                        styles::text_muted(),
                    ),
                    Span::styled(region.clone(), styles::text_primary()),
                ]));
            }
        }

        let water_style = match thermal.water_content {
            WaterContent::Normal => styles::text_primary(),
            WaterContent::Low => styles::status_red(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} Water content  ", self.icons.droplet()),
                Style::default().fg(palette::THERMAL_ACCENT),
            ),
            Span::styled(thermal.water_content.label().to_string(), water_style),
        ]));

        if thermal.early_detection {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} Caught before visible symptoms appeared",
                    self.icons.info()
                ),
                styles::accent(),
            )));
        }

        lines
    }
}

impl Widget for ThermalPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Thermal analysis ");
        Paragraph::new(self.build_lines())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
