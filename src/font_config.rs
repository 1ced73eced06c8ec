// src/font_config.rs

// Font styles for plot rendering, kept in one place so the title, axes and
// annotation stay consistent.

use crate::constants::{
    FONT_SIZE_ANNOTATION, FONT_SIZE_AXIS_LABEL, FONT_SIZE_MAIN_TITLE, FONT_SIZE_TICK_LABEL,
};

/// Font family name for default system fonts.
/// When plotters renders with "sans-serif", it uses system fonts.
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

/// A font style (family + size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStyle {
    pub family: &'static str,
    pub size: i32,
}

impl FontStyle {
    /// Tuple form accepted by plotters' `IntoFont`.
    pub const fn as_tuple(self) -> (&'static str, i32) {
        (self.family, self.size)
    }

    /// Vertical advance for one line of text in pixels.
    pub const fn line_height(self) -> i32 {
        self.size + self.size / 4
    }
}

pub const FONT_MAIN_TITLE: FontStyle = FontStyle {
    family: FONT_FAMILY_SYSTEM,
    size: FONT_SIZE_MAIN_TITLE,
};

pub const FONT_AXIS_LABEL: FontStyle = FontStyle {
    family: FONT_FAMILY_SYSTEM,
    size: FONT_SIZE_AXIS_LABEL,
};

pub const FONT_TICK_LABEL: FontStyle = FontStyle {
    family: FONT_FAMILY_SYSTEM,
    size: FONT_SIZE_TICK_LABEL,
};

pub const FONT_ANNOTATION: FontStyle = FontStyle {
    family: FONT_FAMILY_SYSTEM,
    size: FONT_SIZE_ANNOTATION,
};


// src/font_config.rs
