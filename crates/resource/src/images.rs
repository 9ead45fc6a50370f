use boleto_traits::{ImageSource, ResourceError, ResourceProvider};
use boleto_types::DecodedImage;
use image::DynamicImage;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Named(String),
    Embedded { digest: u64, len: usize },
}

impl CacheKey {
    /// Content-keyed; buffer addresses are reused once freed.
    fn embedded(bytes: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        CacheKey::Embedded {
            digest: hasher.finish(),
            len: bytes.len(),
        }
    }
}

/// Decodes PNG, JPEG and GIF assets into RGB planes.
///
/// Every decoded image is cached, so a logo that appears on each slip of a
/// batch is read and decoded once.
#[derive(Debug)]
pub struct DecodingImageSource {
    provider: Arc<dyn ResourceProvider>,
    cache: RwLock<HashMap<CacheKey, DecodedImage>>,
}

impl DecodingImageSource {
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self {
            provider,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &dyn ResourceProvider {
        self.provider.as_ref()
    }

    fn cached_or_decode(
        &self,
        key: CacheKey,
        name: &str,
        bytes: impl FnOnce() -> Result<Arc<Vec<u8>>, ResourceError>,
    ) -> Result<DecodedImage, ResourceError> {
        if let Ok(cache) = self.cache.read()
            && let Some(image) = cache.get(&key)
        {
            log::trace!("Using cached image '{}'", name);
            return Ok(image.clone());
        }

        let image = decode(name, &bytes()?)?;
        log::debug!("Decoded image '{}' ({}x{})", name, image.width, image.height);
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, image.clone());
        }
        Ok(image)
    }
}

impl ImageSource for DecodingImageSource {
    fn load_named_asset(&self, name: &str) -> Result<DecodedImage, ResourceError> {
        self.cached_or_decode(CacheKey::Named(name.to_string()), name, || {
            self.provider.load(name)
        })
    }

    fn load_from_embedded_bytes(&self, bytes: &[u8]) -> Result<DecodedImage, ResourceError> {
        self.cached_or_decode(CacheKey::embedded(bytes), "<embedded>", || Ok(Arc::new(bytes.to_vec())))
    }
}

fn decode(name: &str, bytes: &[u8]) -> Result<DecodedImage, ResourceError> {
    let image = image::load_from_memory(bytes).map_err(|e| ResourceError::Decode {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    Ok(split_planes(image))
}

fn split_planes(image: DynamicImage) -> DecodedImage {
    let (width, height) = (image.width(), image.height());
    if !image.color().has_alpha() {
        return DecodedImage {
            width,
            height,
            rgb: Arc::new(image.to_rgb8().into_raw()),
            alpha: None,
        };
    }

    let rgba = image.to_rgba8();
    let pixels = rgba.pixels().len();
    let mut rgb = Vec::with_capacity(pixels * 3);
    let mut alpha = Vec::with_capacity(pixels);
    for pixel in rgba.pixels() {
        rgb.extend_from_slice(&pixel.0[..3]);
        alpha.push(pixel.0[3]);
    }
    DecodedImage {
        width,
        height,
        rgb: Arc::new(rgb),
        alpha: Some(Arc::new(alpha)),
    }
}
