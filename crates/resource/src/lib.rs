//! Asset loading for the boleto renderer.
//!
//! [`AssetDirectory`] reads bank logos from a directory on disk and
//! [`DecodingImageSource`] turns their bytes, or bytes compiled into the
//! binary, into [`DecodedImage`](boleto_types::DecodedImage)s.

mod filesystem;
mod images;

pub use filesystem::AssetDirectory;
pub use images::DecodingImageSource;

pub use boleto_traits::AssetStore;
