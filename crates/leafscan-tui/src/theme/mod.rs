//! Theme: palette, semantic styles, and icon resolution.

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
