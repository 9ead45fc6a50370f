//! Lengths are PDF points (1/72 inch) held as `f64`.

/// One millimetre in points.
pub const MM: f64 = 72.0 / 25.4;

/// One centimetre in points.
pub const CM: f64 = 10.0 * MM;

/// Converts millimetres to points.
pub const fn mm(value: f64) -> f64 {
    value * MM
}

/// Converts centimetres to points.
pub const fn cm(value: f64) -> f64 {
    value * CM
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn translate(self, by: Point) -> Self {
        self.offset(by.x, by.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// An axis-aligned rectangle whose origin is its lower-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn translate(self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
            ..self
        }
    }

    /// Fits a box of `content` proportions inside this rectangle, keeping the
    /// lower-left corner fixed.
    pub fn fit_bottom_left(&self, content: Size) -> Rect {
        if content.width <= 0.0 || content.height <= 0.0 {
            return *self;
        }
        let scale = (self.width / content.width).min(self.height / content.height);
        Rect::new(self.x, self.y, content.width * scale, content.height * scale)
    }
}
