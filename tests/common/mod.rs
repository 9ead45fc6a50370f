pub mod fixtures;

use boleto::{BoletoError, BoletoRecord, DocumentBuilder};
use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
#[derive(Debug)]
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// MediaBox width and height of a 1-based page.
    pub fn page_size(&self, page: u32) -> Result<(f32, f32), Box<dyn std::error::Error>> {
        let id = *self.doc.get_pages().get(&page).ok_or("no such page")?;
        let media_box = self.doc.get_object(id)?.as_dict()?.get(b"MediaBox")?.as_array()?;
        Ok((media_box[2].as_float()?, media_box[3].as_float()?))
    }

    /// Raw (WinAnsi) operands of every `Tj` on a 1-based page, in drawing order.
    pub fn page_strings(&self, page: u32) -> Result<Vec<Vec<u8>>, Box<dyn std::error::Error>> {
        let id = *self.doc.get_pages().get(&page).ok_or("no such page")?;
        let content = Content::decode(&self.doc.get_page_content(id)?)?;
        Ok(content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first()?.as_str().ok().map(<[u8]>::to_vec))
            .collect())
    }

    pub fn page_contains(&self, page: u32, text: &str) -> Result<bool, Box<dyn std::error::Error>> {
        let needle = boleto_render_lopdf::to_win_ansi(text);
        Ok(self.page_strings(page)?.iter().any(|s| *s == needle))
    }

    /// Number of `Do` operators on a 1-based page.
    pub fn image_draws(&self, page: u32) -> Result<usize, Box<dyn std::error::Error>> {
        let id = *self.doc.get_pages().get(&page).ok_or("no such page")?;
        let content = Content::decode(&self.doc.get_page_content(id)?)?;
        Ok(content.operations.iter().filter(|op| op.operator == "Do").count())
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Renders `records` with the builder's settings and reloads the PDF.
pub fn render(builder: DocumentBuilder, records: &[BoletoRecord]) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logger();
    let mut doc = builder.build_pdf(Cursor::new(Vec::new()))?;
    doc.draw_records(records)?;
    doc.save()?;
    let bytes = doc
        .into_surface()
        .into_inner()
        .map_err(BoletoError::from)?
        .into_inner();
    GeneratedPdf::from_bytes(bytes)
}
