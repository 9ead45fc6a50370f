use crate::resource::ResourceError;
use boleto_types::DecodedImage;

/// Turns asset references into decoded raster images.
pub trait ImageSource {
    /// Loads an image registered under `name` (a bank logo, for instance).
    fn load_named_asset(&self, name: &str) -> Result<DecodedImage, ResourceError>;

    /// Decodes an image from bytes compiled into the binary.
    fn load_from_embedded_bytes(&self, bytes: &[u8]) -> Result<DecodedImage, ResourceError>;
}
