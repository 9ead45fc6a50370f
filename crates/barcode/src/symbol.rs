#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    Bar,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleWidth {
    Narrow,
    Wide,
}

/// A single bar or space of the symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Module {
    pub kind: ModuleKind,
    pub class: ModuleWidth,
    /// Physical width in the caller's length unit.
    pub width: f64,
}

/// A calibrated barcode: modules laid left to right starting at offset zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeSymbol {
    modules: Vec<Module>,
    narrow_width: f64,
    height: f64,
}

impl BarcodeSymbol {
    pub(crate) fn new(modules: Vec<Module>, narrow_width: f64, height: f64) -> Self {
        Self {
            modules,
            narrow_width,
            height,
        }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn narrow_width(&self) -> f64 {
        self.narrow_width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sum of every module width.
    pub fn total_width(&self) -> f64 {
        self.modules.iter().map(|m| m.width).sum()
    }

    /// Yields `(x_offset, width)` for every bar, in order.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.modules
            .iter()
            .scan(0.0_f64, |cursor, module| {
                let start = *cursor;
                *cursor += module.width;
                Some((start, module))
            })
            .filter(|(_, module)| module.kind == ModuleKind::Bar)
            .map(|(start, module)| (start, module.width))
    }
}
