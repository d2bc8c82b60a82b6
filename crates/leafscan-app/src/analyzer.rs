//! Analysis dispatcher: the seam between the UI and a classification backend.
//!
//! [`Analyzer`] is the stable contract. The bundled [`StubAnalyzer`] waits a
//! fixed latency and returns one of two constant payloads keyed solely by
//! modality, ignoring image content. A real model-serving client implements
//! the same trait and slots in without caller changes, which is also why the
//! error branch exists even though the stub never takes it.

use std::time::Duration;

use leafscan_core::prelude::*;
use leafscan_core::{
    catalog, Confidence, ConfidenceLevel, DiagnosticResult, DiseaseCategory, Modality,
    ModelMetadata, Severity, ThermalAnalysis, WaterContent,
};

use crate::image::LoadedImage;

/// Monotonically increasing id issued per dispatched analysis.
///
/// Completions carrying anything other than the latest issued id are stale
/// and get discarded by the update loop, so a slow response can never
/// overwrite the result of a newer request.
pub type RequestId = u64;

/// Default simulated inference latency.
pub const DEFAULT_LATENCY_MS: u64 = 2000;

/// An analysis backend.
#[trait_variant::make(Analyzer: Send)]
pub trait LocalAnalyzer {
    /// Run one analysis over an encoded image for the given modality.
    async fn analyze(
        &self,
        image: &LoadedImage,
        modality: Modality,
    ) -> Result<(DiagnosticResult, ModelMetadata)>;
}

/// Placeholder backend used in absence of a real classifier.
#[derive(Debug, Clone)]
pub struct StubAnalyzer {
    latency: Duration,
}

impl StubAnalyzer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StubAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LATENCY_MS))
    }
}

impl Analyzer for StubAnalyzer {
    async fn analyze(
        &self,
        image: &LoadedImage,
        modality: Modality,
    ) -> Result<(DiagnosticResult, ModelMetadata)> {
        debug!(
            mime = image.mime,
            byte_len = image.byte_len,
            ?modality,
            "stub analysis dispatched"
        );
        tokio::time::sleep(self.latency).await;

        let payload = match modality {
            Modality::Visible => (visible_demo_result(), visible_model_metadata()),
            Modality::Infrared => (infrared_demo_result(), infrared_model_metadata()),
        };
        Ok(payload)
    }
}

/// Canned visible-light diagnosis: early blight on tomato.
pub fn visible_demo_result() -> DiagnosticResult {
    let info = catalog::lookup("Tomato_Early_Blight");
    DiagnosticResult {
        disease_present: true,
        disease_id: "Tomato_Early_Blight".to_string(),
        disease_label: info
            .map(|i| i.label.to_string())
            .unwrap_or_else(|| "Tomato Early Blight".to_string()),
        confidence: Some(Confidence::new(ConfidenceLevel::High, 92)),
        symptoms: vec![
            "Dark brown lesions with concentric ring patterns on the leaves".to_string(),
            "Yellow halo forming around the lesions".to_string(),
            "Symptoms concentrated on the lower leaves".to_string(),
        ],
        description: "The image shows the typical signs of early blight caused by the fungus \
                      Alternaria solani."
            .to_string(),
        recommendations: vec![
            "Remove affected leaves immediately".to_string(),
            "Apply a copper-based fungicide".to_string(),
            "Prefer drip irrigation over overhead watering".to_string(),
        ],
        severity: Severity::Moderate,
        pathogen: info.map(|i| i.pathogen.to_string()),
        category: DiseaseCategory::Fungal,
        thermal: None,
    }
}

/// Canned infrared diagnosis: water stress with pre-symptomatic infection.
pub fn infrared_demo_result() -> DiagnosticResult {
    DiagnosticResult {
        disease_present: true,
        disease_id: "Thermal_Stress_Detection".to_string(),
        disease_label: "Water Stress and Early Infection".to_string(),
        confidence: Some(Confidence::new(ConfidenceLevel::High, 88)),
        symptoms: vec![
            "Early infection markers in the thermal signature".to_string(),
            "Drop in leaf water content".to_string(),
        ],
        description: "Infrared thermal imaging identified the condition before visible symptoms \
                      emerged."
            .to_string(),
        recommendations: vec![
            "Adjust the irrigation schedule".to_string(),
            "Apply a protective fungicide".to_string(),
            "Review the plant nutrition program".to_string(),
        ],
        severity: Severity::Mild,
        pathogen: None,
        category: DiseaseCategory::Stress,
        thermal: Some(ThermalAnalysis {
            temperature_distribution:
                "Heterogeneous temperature distribution detected across the leaf surface"
                    .to_string(),
            stress_regions: vec![
                "High-temperature region at the leaf center".to_string(),
                "Abnormal thermal signature along the veins".to_string(),
            ],
            water_content: WaterContent::Low,
            early_detection: true,
        }),
    }
}

fn visible_model_metadata() -> ModelMetadata {
    ModelMetadata {
        model_name: "Leafscan Demo".to_string(),
        architecture: "ResNet-152".to_string(),
        accuracy_percent: 98.7,
    }
}

fn infrared_model_metadata() -> ModelMetadata {
    ModelMetadata {
        model_name: "Leafscan Demo".to_string(),
        architecture: "Thermal IR-Net".to_string(),
        accuracy_percent: 95.3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_image() -> LoadedImage {
        LoadedImage {
            path: PathBuf::from("leaf.png"),
            mime: "image/png",
            byte_len: 8,
            data: "iVBORw0KGgo=".to_string(),
        }
    }

    #[tokio::test]
    async fn test_stub_visible_payload() {
        let analyzer = StubAnalyzer::new(Duration::from_millis(0));
        let (result, meta) = Analyzer::analyze(&analyzer, &test_image(), Modality::Visible)
            .await
            .unwrap();

        assert_eq!(result.disease_id, "Tomato_Early_Blight");
        assert_eq!(result.confidence.unwrap().percent, 92);
        assert_eq!(result.category, DiseaseCategory::Fungal);
        assert!(result.thermal.is_none());
        assert!(result.is_well_formed(Modality::Visible));
        assert_eq!(meta.architecture, "ResNet-152");
    }

    #[tokio::test]
    async fn test_stub_infrared_payload() {
        let analyzer = StubAnalyzer::new(Duration::from_millis(0));
        let (result, meta) = Analyzer::analyze(&analyzer, &test_image(), Modality::Infrared)
            .await
            .unwrap();

        let thermal = result.thermal.as_ref().expect("thermal panel data");
        assert!(thermal.early_detection);
        assert_eq!(thermal.water_content, WaterContent::Low);
        assert_eq!(result.category, DiseaseCategory::Stress);
        assert!(result.is_well_formed(Modality::Infrared));
        assert_eq!(meta.architecture, "Thermal IR-Net");
    }

    #[tokio::test]
    async fn test_stub_ignores_image_content() {
        let analyzer = StubAnalyzer::new(Duration::from_millis(0));
        let mut other = test_image();
        other.data = "AAAA".to_string();

        let (a, _) = Analyzer::analyze(&analyzer, &test_image(), Modality::Visible)
            .await
            .unwrap();
        let (b, _) = Analyzer::analyze(&analyzer, &other, Modality::Visible)
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stub_waits_configured_latency() {
        let analyzer = StubAnalyzer::default();
        let started = tokio::time::Instant::now();
        let _ = Analyzer::analyze(&analyzer, &test_image(), Modality::Visible).await;
        assert_eq!(
            started.elapsed(),
            Duration::from_millis(DEFAULT_LATENCY_MS)
        );
    }
}
