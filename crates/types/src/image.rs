use std::fmt;
use std::sync::Arc;

/// A raster image decoded to 8-bit RGB, with an optional 8-bit alpha plane.
#[derive(Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Arc<Vec<u8>>,
    pub alpha: Option<Arc<Vec<u8>>>,
}

impl DecodedImage {
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgb_len", &self.rgb.len())
            .field("has_alpha", &self.alpha.is_some())
            .finish()
    }
}
