use crate::geometry::Size;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Physical page size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// ISO A4, portrait.
    pub const A4: PageSize = PageSize {
        width: 595.275_590_551_181_1,
        height: 841.889_763_779_527_6,
    };

    pub fn oriented(self, orientation: Orientation) -> Self {
        let (short, long) = if self.width <= self.height {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        };
        match orientation {
            Orientation::Portrait => PageSize {
                width: short,
                height: long,
            },
            Orientation::Landscape => PageSize {
                width: long,
                height: short,
            },
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn as_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}
