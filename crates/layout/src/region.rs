//! Positioned drawing data produced by the compositor.
//!
//! Everything here is plain data in PDF user space (origin bottom-left, y up).
//! A region is built around its own origin and placed on the page with
//! [`Region::translated`].

use boleto_barcode::BarcodeSymbol;
use boleto_types::{Point, Rect, Size, TextAlign, TextStyle};

/// On/off stroke lengths of a dashed line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub on: f64,
    pub off: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub dash: Option<DashPattern>,
}

impl Line {
    pub fn horizontal(x: f64, y: f64, length: f64, width: f64) -> Self {
        Self {
            from: Point::new(x, y),
            to: Point::new(x + length, y),
            width,
            dash: None,
        }
    }

    pub fn vertical(x: f64, y: f64, length: f64, width: f64) -> Self {
        Self {
            from: Point::new(x, y),
            to: Point::new(x, y + length),
            width,
            dash: None,
        }
    }

    pub fn dashed(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn translate(self, by: Point) -> Self {
        Self {
            from: self.from.translate(by),
            to: self.to.translate(by),
            ..self
        }
    }
}

/// What a text run is, for consumers that care (tests, debugging dumps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Small caption naming a cell.
    Label,
    /// Data taken from the record.
    Value,
    /// Region heading such as the bank code or linha digitável.
    Heading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Baseline anchor; its meaning depends on `align`.
    pub origin: Point,
    pub style: TextStyle,
    pub align: TextAlign,
    pub content: String,
    pub role: TextRole,
}

impl TextRun {
    pub fn translate(mut self, by: Point) -> Self {
        self.origin = self.origin.translate(by);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    /// An asset looked up by name through the image source.
    Named(String),
    /// Image bytes compiled into the binary.
    Embedded(&'static [u8]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlacement {
    pub source: ImageRef,
    pub frame: Rect,
    /// Fit inside `frame` keeping proportions, anchored bottom-left.
    pub preserve_aspect: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBarcode {
    /// Lower-left corner of the first module.
    pub origin: Point,
    pub symbol: BarcodeSymbol,
}

impl PlacedBarcode {
    /// One stroked line per bar, centred on the bar so the stroke covers it exactly.
    pub fn bar_lines(&self) -> impl Iterator<Item = Line> + '_ {
        let origin = self.origin;
        let height = self.symbol.height();
        self.symbol.bars().map(move |(offset, width)| {
            Line::vertical(origin.x + offset + width / 2.0, origin.y, height, width)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    TellerReceipt,
    PayerReceipt,
    PayerReceiptStub,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub kind: RegionKind,
    pub origin: Point,
    /// The fixed grid; content independent.
    pub size: Size,
    /// Height of blocks appended below the grid (the payer receipt's logo appendix).
    pub appendix: f64,
    pub texts: Vec<TextRun>,
    pub lines: Vec<Line>,
    pub images: Vec<ImagePlacement>,
    pub barcode: Option<PlacedBarcode>,
}

impl Region {
    pub(crate) fn new(kind: RegionKind, size: Size) -> Self {
        Self {
            kind,
            origin: Point::ORIGIN,
            size,
            appendix: 0.0,
            texts: Vec::new(),
            lines: Vec::new(),
            images: Vec::new(),
            barcode: None,
        }
    }

    pub fn consumed_height(&self) -> f64 {
        self.size.height + self.appendix
    }

    pub fn consumed(&self) -> Size {
        Size::new(self.size.width, self.consumed_height())
    }

    /// Moves every placement by `by`.
    pub fn translated(self, by: Point) -> Self {
        Self {
            origin: self.origin.translate(by),
            texts: self.texts.into_iter().map(|t| t.translate(by)).collect(),
            lines: self.lines.into_iter().map(|l| l.translate(by)).collect(),
            images: self
                .images
                .into_iter()
                .map(|i| ImagePlacement {
                    frame: i.frame.translate(by),
                    ..i
                })
                .collect(),
            barcode: self.barcode.map(|b| PlacedBarcode {
                origin: b.origin.translate(by),
                symbol: b.symbol,
            }),
            ..self
        }
    }

    /// Finds the first text run with exactly this content.
    pub fn text(&self, content: &str) -> Option<&TextRun> {
        self.texts.iter().find(|t| t.content == content)
    }

    pub(crate) fn push_text(
        &mut self,
        role: TextRole,
        style: TextStyle,
        align: TextAlign,
        x: f64,
        y: f64,
        content: impl Into<String>,
    ) {
        self.texts.push(TextRun {
            origin: Point::new(x, y),
            style,
            align,
            content: content.into(),
            role,
        });
    }
}
