//! Icon set for the TUI.
//!
//! Resolves icons at runtime: unicode glyphs when enabled in settings,
//! plain ASCII otherwise (for terminals with limited fonts).

use leafscan_core::DiseaseCategory;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    unicode: bool,
}

impl IconSet {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn leaf(&self) -> &'static str {
        if self.unicode {
            "\u{1f33f}" // 🌿
        } else {
            "[L]"
        }
    }

    pub fn camera(&self) -> &'static str {
        if self.unicode {
            "\u{25a3}" // ▣
        } else {
            "[P]"
        }
    }

    pub fn thermometer(&self) -> &'static str {
        if self.unicode {
            "\u{1f321}" // 🌡
        } else {
            "[T]"
        }
    }

    pub fn alert(&self) -> &'static str {
        if self.unicode {
            "\u{26a0}" // ⚠
        } else {
            "!"
        }
    }

    pub fn check(&self) -> &'static str {
        if self.unicode {
            "\u{2713}" // ✓
        } else {
            "+"
        }
    }

    pub fn info(&self) -> &'static str {
        if self.unicode {
            "\u{2139}" // ℹ
        } else {
            "i"
        }
    }

    pub fn droplet(&self) -> &'static str {
        if self.unicode {
            "\u{1f4a7}" // 💧
        } else {
            "[W]"
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        if self.unicode {
            "\u{203a}" // ›
        } else {
            ">"
        }
    }

    /// Badge icon per disease category.
    pub fn category(&self, category: DiseaseCategory) -> &'static str {
        if !self.unicode {
            return match category {
                DiseaseCategory::Fungal => "[F]",
                DiseaseCategory::Bacterial => "[B]",
                DiseaseCategory::Viral => "[V]",
                DiseaseCategory::Pest => "[P]",
                DiseaseCategory::Stress => "[S]",
                DiseaseCategory::Other => "[?]",
            };
        }
        match category {
            DiseaseCategory::Fungal => "\u{1f344}",    // 🍄
            DiseaseCategory::Bacterial => "\u{1f9a0}", // 🦠
            DiseaseCategory::Viral => "\u{2747}",      // ❇
            DiseaseCategory::Pest => "\u{1f41b}",      // 🐛
            DiseaseCategory::Stress => "\u{26a1}",     // ⚡
            DiseaseCategory::Other => "\u{25cf}",      // ●
        }
    }
}
