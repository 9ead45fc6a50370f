use crate::error::RenderError;
use crate::traits::DrawingSurface;
use boleto_layout::{ImagePlacement, ImageRef, PageLayout, Region};
use boleto_traits::{ImageSource, ResourceError};
use boleto_types::DecodedImage;

/// Replays a composed [`PageLayout`] onto a drawing surface.
///
/// Images are resolved before the first draw call, so a failing image leaves
/// the surface untouched. Named assets that do not exist are skipped.
pub struct PagePainter<'a> {
    images: &'a dyn ImageSource,
}

impl<'a> PagePainter<'a> {
    pub fn new(images: &'a dyn ImageSource) -> Self {
        Self { images }
    }

    pub fn paint<S: DrawingSurface + ?Sized>(&self, surface: &mut S, layout: &PageLayout) -> Result<(), RenderError> {
        let resolved = layout
            .regions
            .iter()
            .map(|region| self.resolve_images(region))
            .collect::<Result<Vec<_>, _>>()?;

        for line in &layout.cut_lines {
            surface.draw_line(line)?;
        }
        for (region, images) in layout.regions.iter().zip(resolved) {
            self.paint_region(surface, region, images)?;
        }
        Ok(())
    }

    fn resolve_images<'r>(
        &self,
        region: &'r Region,
    ) -> Result<Vec<(&'r ImagePlacement, DecodedImage)>, RenderError> {
        let mut out = Vec::with_capacity(region.images.len());
        for placement in &region.images {
            let loaded = match &placement.source {
                ImageRef::Named(name) => match self.images.load_named_asset(name) {
                    Ok(image) => Some(image),
                    Err(ResourceError::NotFound(_)) => {
                        log::warn!("Logo '{}' not found, drawing {:?} without it", name, region.kind);
                        None
                    }
                    Err(e) => return Err(e.into()),
                },
                ImageRef::Embedded(bytes) => Some(self.images.load_from_embedded_bytes(bytes)?),
            };
            if let Some(image) = loaded {
                out.push((placement, image));
            }
        }
        Ok(out)
    }

    fn paint_region<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        region: &Region,
        images: Vec<(&ImagePlacement, DecodedImage)>,
    ) -> Result<(), RenderError> {
        for line in &region.lines {
            surface.draw_line(line)?;
        }
        for run in &region.texts {
            surface.draw_text(run)?;
        }
        if let Some(barcode) = &region.barcode {
            for bar in barcode.bar_lines() {
                surface.draw_line(&bar)?;
            }
        }
        for (placement, image) in images {
            surface.draw_image(&image, placement.frame, placement.preserve_aspect)?;
        }
        log::trace!(
            "Painted {:?} at ({:.2}, {:.2})",
            region.kind,
            region.origin.x,
            region.origin.y
        );
        Ok(())
    }
}
