use boleto_types::mm;

/// Fixed measurements shared by every region of a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Width of the teller and payer receipts (190 mm).
    pub slip_width: f64,
    /// Width of the carnê stub (70 mm).
    pub stub_width: f64,
    /// Base row height (6.5 mm).
    pub row_height: f64,
    /// Inset of text from cell borders.
    pub padding: f64,
    pub title_size: f64,
    pub value_size: f64,
    /// Baseline pitch of multi-line value blocks (payer, instructions).
    pub value_pitch: f64,
    /// Baseline pitch of memo lines.
    pub memo_pitch: f64,
}

impl PageGeometry {
    pub const FEBRABAN: PageGeometry = PageGeometry {
        slip_width: mm(190.0),
        stub_width: mm(70.0),
        row_height: mm(6.5),
        padding: 2.0,
        title_size: 6.0,
        value_size: 8.0,
        value_pitch: 9.0,
        memo_pitch: 10.0,
    };

    /// Baseline of a cell title above the cell's bottom border.
    pub fn title_offset(&self) -> f64 {
        self.row_height - (self.title_size + 1.0)
    }

    /// `n` base rows.
    pub fn rows(&self, n: f64) -> f64 {
        n * self.row_height
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::FEBRABAN
    }
}
