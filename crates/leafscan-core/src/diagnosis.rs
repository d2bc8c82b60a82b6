//! Diagnostic result domain types.
//!
//! A [`DiagnosticResult`] is produced whole by an analyzer and held as the
//! current UI state. It is never mutated in place; a new analysis yields a
//! wholly new value that replaces the previous one.

use serde::{Deserialize, Serialize};

/// Which imaging mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Standard visible-light photograph.
    #[default]
    Visible,
    /// Simulated infrared / thermal capture.
    Infrared,
}

impl Modality {
    /// Short human-readable label used in the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Modality::Visible => "Visible",
            Modality::Infrared => "Infrared",
        }
    }

    /// The other modality (tab cycling).
    pub fn toggled(&self) -> Self {
        match self {
            Modality::Visible => Modality::Infrared,
            Modality::Infrared => Modality::Visible,
        }
    }
}

/// Coarse confidence bucket reported alongside the exact percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
        }
    }
}

/// Confidence bucket and exact percentage, always reported together.
///
/// Modeled as one struct so a result cannot carry a percentage without a
/// level or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    pub level: ConfidenceLevel,
    /// 0-100.
    pub percent: u8,
}

impl Confidence {
    pub fn new(level: ConfidenceLevel, percent: u8) -> Self {
        Self {
            level,
            percent: percent.min(100),
        }
    }
}

/// How far the detected condition has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

/// Broad class of the detected condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseCategory {
    Fungal,
    Bacterial,
    Viral,
    Pest,
    Stress,
    Other,
}

impl DiseaseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DiseaseCategory::Fungal => "Fungal",
            DiseaseCategory::Bacterial => "Bacterial",
            DiseaseCategory::Viral => "Viral",
            DiseaseCategory::Pest => "Pest",
            DiseaseCategory::Stress => "Stress",
            DiseaseCategory::Other => "Other",
        }
    }
}

/// Leaf water content status derived from thermal imaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterContent {
    Normal,
    Low,
}

impl WaterContent {
    pub fn label(&self) -> &'static str {
        match self {
            WaterContent::Normal => "Normal",
            WaterContent::Low => "Low",
        }
    }
}

/// Thermal findings, present only on infrared analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThermalAnalysis {
    /// Narrative describing the surface temperature distribution.
    pub temperature_distribution: String,
    /// Narratives for regions showing thermal stress, in display order.
    pub stress_regions: Vec<String>,
    pub water_content: WaterContent,
    /// Whether the condition was caught before visible symptoms appeared.
    pub early_detection: bool,
}

/// Descriptive model information attached to a result for display.
///
/// Never consulted for any decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_name: String,
    pub architecture: String,
    pub accuracy_percent: f32,
}

/// Structured output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub disease_present: bool,
    /// Stable identifier, e.g. `"Tomato_Early_Blight"`.
    pub disease_id: String,
    /// Human-readable name.
    pub disease_label: String,
    pub confidence: Option<Confidence>,
    /// Observed symptoms, in display order.
    pub symptoms: Vec<String>,
    pub description: String,
    /// Treatment / care guidance, in display order.
    pub recommendations: Vec<String>,
    pub severity: Severity,
    /// Causal organism, when one is identified.
    pub pathogen: Option<String>,
    pub category: DiseaseCategory,
    /// Present iff the analysis ran on the infrared modality.
    pub thermal: Option<ThermalAnalysis>,
}

impl DiagnosticResult {
    /// A positive result must carry at least one symptom or recommendation,
    /// and thermal data implies an infrared capture.
    pub fn is_well_formed(&self, modality: Modality) -> bool {
        let guidance_ok =
            !self.disease_present || !self.symptoms.is_empty() || !self.recommendations.is_empty();
        let thermal_ok = match modality {
            Modality::Infrared => true,
            Modality::Visible => self.thermal.is_none(),
        };
        guidance_ok && thermal_ok
    }
}
