//! Static disease catalog.
//!
//! Reference data for the conditions the demo analyzer can report. Lookup is
//! by stable id; display code falls back to the raw id when a condition is
//! not catalogued.

use crate::diagnosis::{DiseaseCategory, Severity};

/// Catalog entry for a known plant disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiseaseInfo {
    /// Stable identifier, matches `DiagnosticResult::disease_id`.
    pub id: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// Causal organism.
    pub pathogen: &'static str,
    pub category: DiseaseCategory,
    /// Typical severity when detected at the usual stage.
    pub typical_severity: Severity,
}

/// Known diseases, keyed by stable id.
pub const DISEASE_CATALOG: &[DiseaseInfo] = &[
    DiseaseInfo {
        id: "Tomato_Early_Blight",
        label: "Tomato Early Blight",
        pathogen: "Alternaria solani",
        category: DiseaseCategory::Fungal,
        typical_severity: Severity::Moderate,
    },
    DiseaseInfo {
        id: "Tomato_Late_Blight",
        label: "Tomato Late Blight",
        pathogen: "Phytophthora infestans",
        category: DiseaseCategory::Fungal,
        typical_severity: Severity::Severe,
    },
    DiseaseInfo {
        id: "Tomato_Leaf_Mold",
        label: "Tomato Leaf Mold",
        pathogen: "Passalora fulva",
        category: DiseaseCategory::Fungal,
        typical_severity: Severity::Moderate,
    },
];

/// Look up a catalogued disease by stable id.
pub fn lookup(id: &str) -> Option<&'static DiseaseInfo> {
    DISEASE_CATALOG.iter().find(|info| info.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_id() {
        let info = lookup("Tomato_Early_Blight").unwrap();
        assert_eq!(info.label, "Tomato Early Blight");
        assert_eq!(info.pathogen, "Alternaria solani");
        assert_eq!(info.category, DiseaseCategory::Fungal);
    }

    #[test]
    fn test_lookup_unknown_id() {
        assert!(lookup("Cucumber_Mystery_Spot").is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in DISEASE_CATALOG.iter().enumerate() {
            for b in &DISEASE_CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
