use crate::document::BoletoDocument;
use crate::error::BoletoError;
use boleto_barcode::Interleaved2of5;
use boleto_layout::{NumberFormat, PageGeometry};
use boleto_render_core::DrawingSurface;
use boleto_render_lopdf::LopdfSurface;
use boleto_resource::{AssetDirectory, AssetStore, DecodingImageSource};
use boleto_traits::{ImageSource, ResourceProvider};
use boleto_types::Orientation;
use serde::Deserialize;
use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How slips are arranged on a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Teller receipt and payer receipt, one slip per portrait page.
    #[default]
    FullSlip,
    /// Stub and teller receipt, two slips per landscape page.
    Carne,
}

impl LayoutMode {
    pub fn orientation(self) -> Orientation {
        match self {
            LayoutMode::FullSlip => Orientation::Portrait,
            LayoutMode::Carne => Orientation::Landscape,
        }
    }

    pub fn slips_per_page(self) -> usize {
        match self {
            LayoutMode::FullSlip => 1,
            LayoutMode::Carne => 2,
        }
    }
}

/// Document settings, usually read from a JSON file.
///
/// ```json
/// { "mode": "carne", "asset_dir": "logos", "title": "Carnê 2024" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub mode: LayoutMode,
    pub number_format: NumberFormat,
    /// Directory bank logos are read from.
    pub asset_dir: Option<PathBuf>,
    pub title: Option<String>,
}

impl DocumentConfig {
    pub fn from_json(source: &str) -> Result<Self, BoletoError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BoletoError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json(&source)
    }
}

/// Assembles a [`BoletoDocument`].
#[derive(Default)]
pub struct DocumentBuilder {
    config: DocumentConfig,
    geometry: PageGeometry,
    encoder: Interleaved2of5,
    images: Option<Box<dyn ImageSource>>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: DocumentConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.config.number_format = format;
        self
    }

    /// Reads logos from `dir`. Ignored when an image source is set explicitly.
    pub fn with_asset_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config.asset_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Replaces the barcode encoder, e.g. to enable start/stop guards.
    pub fn with_encoder(mut self, encoder: Interleaved2of5) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn with_image_source(mut self, images: impl ImageSource + 'static) -> Self {
        self.images = Some(Box::new(images));
        self
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Validates the configuration and binds it to `surface`.
    pub fn build<S: DrawingSurface>(self, surface: S) -> Result<BoletoDocument<S>, BoletoError> {
        self.config.number_format.validate()?;

        let images = match self.images {
            Some(images) => images,
            None => {
                let provider: Arc<dyn ResourceProvider> = match &self.config.asset_dir {
                    Some(dir) => Arc::new(AssetDirectory::new(dir)),
                    None => Arc::new(AssetStore::new()),
                };
                log::debug!("Loading logos through {}", provider.name());
                Box::new(DecodingImageSource::new(provider))
            }
        };

        Ok(BoletoDocument::new(
            surface,
            images,
            self.geometry,
            self.config.number_format,
            self.encoder,
            self.config.mode,
        ))
    }

    /// Builds a document that streams PDF output into `writer`.
    pub fn build_pdf<W: Write + Seek>(self, writer: W) -> Result<BoletoDocument<LopdfSurface<W>>, BoletoError> {
        let mut surface = LopdfSurface::new(writer)?;
        if let Some(title) = &self.config.title {
            surface = surface.with_title(title.clone());
        }
        self.build(surface)
    }
}
