use serde::{Deserialize, Serialize};

/// The standard PDF Type 1 families used on a boleto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f64,
}

impl TextStyle {
    pub const fn helvetica(size: f64) -> Self {
        Self {
            family: FontFamily::Helvetica,
            weight: FontWeight::Regular,
            size,
        }
    }

    pub const fn helvetica_bold(size: f64) -> Self {
        Self {
            family: FontFamily::Helvetica,
            weight: FontWeight::Bold,
            size,
        }
    }

    pub const fn courier(size: f64) -> Self {
        Self {
            family: FontFamily::Courier,
            weight: FontWeight::Regular,
            size,
        }
    }

    /// PostScript name of the base-14 face that renders this style.
    pub fn postscript_name(&self) -> &'static str {
        match (self.family, self.weight) {
            (FontFamily::Helvetica, FontWeight::Regular) => "Helvetica",
            (FontFamily::Helvetica, FontWeight::Bold) => "Helvetica-Bold",
            (FontFamily::Courier, FontWeight::Regular) => "Courier",
            (FontFamily::Courier, FontWeight::Bold) => "Courier-Bold",
        }
    }
}
