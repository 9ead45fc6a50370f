use crate::helpers::{self, name, real};
use crate::writer::StreamingPdfWriter;
use boleto_layout::{Line, StandardFontMetrics, TextMeasure, TextRun};
use boleto_render_core::utils::{aligned_origin, image_frame};
use boleto_render_core::{DrawingSurface, RenderError};
use boleto_types::{DecodedImage, FontFamily, FontWeight, PageSize, Rect, TextStyle};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, Stream, dictionary};
use std::collections::HashMap;
use std::io::{Seek, Write};
use std::sync::Arc;

const PDF_VERSION: &str = "1.7";

/// Resource names of the base-14 faces every document declares.
const FONTS: [(&str, FontFamily, FontWeight); 4] = [
    ("F1", FontFamily::Helvetica, FontWeight::Regular),
    ("F2", FontFamily::Helvetica, FontWeight::Bold),
    ("F3", FontFamily::Courier, FontWeight::Regular),
    ("F4", FontFamily::Courier, FontWeight::Bold),
];

fn font_resource(style: &TextStyle) -> &'static str {
    FONTS
        .iter()
        .find(|(_, family, weight)| *family == style.family && *weight == style.weight)
        .map_or("F1", |(resource, ..)| resource)
}

struct OpenPage {
    size: PageSize,
    operations: Vec<Operation>,
}

struct ImageXObject {
    name: String,
    id: lopdf::ObjectId,
    // Keeps the pixel buffer alive so its address stays a valid cache key.
    _pixels: Arc<Vec<u8>>,
}

/// A [`DrawingSurface`] that streams a PDF into `W`.
///
/// Text uses the standard Type 1 fonts with WinAnsiEncoding, so no font
/// program is embedded. Images are written once per distinct pixel buffer and
/// shared between pages.
pub struct LopdfSurface<W: Write + Seek> {
    writer: Option<StreamingPdfWriter<W>>,
    output: Option<W>,
    metrics: StandardFontMetrics,
    page: Option<OpenPage>,
    images: HashMap<usize, ImageXObject>,
    title: Option<String>,
}

impl<W: Write + Seek> LopdfSurface<W> {
    pub fn new(writer: W) -> Result<Self, RenderError> {
        Ok(Self {
            writer: Some(StreamingPdfWriter::new(writer, PDF_VERSION)?),
            output: None,
            metrics: StandardFontMetrics::new(),
            page: None,
            images: HashMap::new(),
            title: None,
        })
    }

    /// Sets the document title written to the info dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the finished output. Only valid after [`flush`](DrawingSurface::flush).
    pub fn into_inner(self) -> Result<W, RenderError> {
        self.output
            .ok_or(RenderError::InvalidState("surface has not been flushed"))
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or(RenderError::InvalidState("surface already flushed"))
    }

    fn page_mut(&mut self) -> Result<&mut OpenPage, RenderError> {
        self.page
            .as_mut()
            .ok_or(RenderError::InvalidState("no page is open"))
    }

    /// Writes the image (and its soft mask) on first use; returns its resource name.
    fn image_xobject(&mut self, image: &DecodedImage) -> Result<String, RenderError> {
        let key = Arc::as_ptr(&image.rgb) as usize;
        if let Some(existing) = self.images.get(&key) {
            return Ok(existing.name.clone());
        }

        let writer = self.writer_mut()?;
        let smask = match &image.alpha {
            Some(alpha) => {
                let mut stream = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => image.width as i64,
                        "Height" => image.height as i64,
                        "ColorSpace" => "DeviceGray",
                        "BitsPerComponent" => 8_i64,
                    },
                    alpha.to_vec(),
                );
                stream.compress()?;
                Some(writer.write_object(Object::Stream(stream))?)
            }
            None => None,
        };

        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
        };
        if let Some(smask_id) = smask {
            dict.set("SMask", smask_id);
        }
        let mut stream = Stream::new(dict, image.rgb.to_vec());
        stream.compress()?;
        let id = writer.write_object(Object::Stream(stream))?;

        let name = format!("Im{}", self.images.len() + 1);
        log::debug!("Wrote image {} ({}x{}) as {:?}", name, image.width, image.height, id);
        self.images.insert(
            key,
            ImageXObject {
                name: name.clone(),
                id,
                _pixels: Arc::clone(&image.rgb),
            },
        );
        Ok(name)
    }

    fn resources(&self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for (resource, family, weight) in FONTS {
            let base_font = TextStyle { family, weight, size: 0.0 }.postscript_name();
            fonts.set(
                resource,
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => base_font,
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }
        let mut xobjects = Dictionary::new();
        for image in self.images.values() {
            xobjects.set(image.name.as_bytes(), image.id);
        }
        dictionary! { "Font" => fonts, "XObject" => xobjects }
    }
}

impl<W: Write + Seek> DrawingSurface for LopdfSurface<W> {
    fn begin_page(&mut self, size: PageSize) -> Result<(), RenderError> {
        self.writer_mut()?;
        if self.page.is_some() {
            return Err(RenderError::InvalidState("a page is already open"));
        }
        self.page = Some(OpenPage {
            size,
            operations: Vec::new(),
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self
            .page
            .take()
            .ok_or(RenderError::InvalidState("no page is open"))?;
        let operation_count = page.operations.len();
        let content = Content {
            operations: page.operations,
        }
        .encode()?;

        let writer = self.writer_mut()?;
        let content_id = writer.write_content_stream(content)?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), real(page.size.width), real(page.size.height)],
            "Contents" => content_id,
            "Resources" => writer.resources_id,
        };
        let page_id = writer.write_object(page_dict.into())?;
        writer.add_page(page_id);
        log::debug!(
            "Finished page {} with {} operations",
            writer.page_count(),
            operation_count
        );
        Ok(())
    }

    fn draw_line(&mut self, line: &Line) -> Result<(), RenderError> {
        let page = self.page_mut()?;
        let path = [
            helpers::line_width(line.width),
            Operation::new("m", vec![real(line.from.x), real(line.from.y)]),
            Operation::new("l", vec![real(line.to.x), real(line.to.y)]),
            Operation::new("S", vec![]),
        ];
        match line.dash {
            Some(_) => {
                page.operations.push(Operation::new("q", vec![]));
                page.operations.push(helpers::dash(line.dash));
                page.operations.extend(path);
                page.operations.push(Operation::new("Q", vec![]));
            }
            None => page.operations.extend(path),
        }
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<(), RenderError> {
        let width = self.metrics.text_width(&run.style, &run.content);
        let at = aligned_origin(run, width);
        let page = self.page_mut()?;
        page.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![name(font_resource(&run.style)), real(run.style.size)]),
            Operation::new("Td", vec![real(at.x), real(at.y)]),
            helpers::show_text(&run.content),
            Operation::new("ET", vec![]),
        ]);
        Ok(())
    }

    fn measure_text_width(&self, style: &TextStyle, text: &str) -> f64 {
        self.metrics.text_width(style, text)
    }

    fn draw_image(&mut self, image: &DecodedImage, frame: Rect, preserve_aspect: bool) -> Result<(), RenderError> {
        self.page_mut()?;
        let resource = self.image_xobject(image)?;
        let placed = image_frame(image, frame, preserve_aspect);
        let page = self.page_mut()?;
        page.operations.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    real(placed.width),
                    real(0.0),
                    real(0.0),
                    real(placed.height),
                    real(placed.x),
                    real(placed.y),
                ],
            ),
            Operation::new("Do", vec![name(&resource)]),
            Operation::new("Q", vec![]),
        ]);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        if self.page.is_some() {
            self.end_page()?;
        }
        let resources = self.resources();
        let mut writer = self
            .writer
            .take()
            .ok_or(RenderError::InvalidState("surface already flushed"))?;
        if let Some(title) = &self.title {
            writer.set_info(dictionary! {
                "Title" => Object::String(helpers::to_win_ansi(title), StringFormat::Literal),
                "Producer" => Object::string_literal("boleto"),
            });
        }
        let pages = writer.page_count();
        self.output = Some(writer.finish(resources)?);
        log::debug!("PDF finished with {} pages and {} images", pages, self.images.len());
        Ok(())
    }
}
