use boleto_layout::TextRun;
use boleto_types::{DecodedImage, Point, Rect, Size, TextAlign};

/// Left end of the baseline of `run`, given its rendered width.
pub fn aligned_origin(run: &TextRun, width: f64) -> Point {
    let x = match run.align {
        TextAlign::Left => run.origin.x,
        TextAlign::Center => run.origin.x - width / 2.0,
        TextAlign::Right => run.origin.x - width,
    };
    Point::new(x, run.origin.y)
}

/// Where an image lands inside `frame`.
pub fn image_frame(image: &DecodedImage, frame: Rect, preserve_aspect: bool) -> Rect {
    if preserve_aspect {
        frame.fit_bottom_left(Size::new(f64::from(image.width), f64::from(image.height)))
    } else {
        frame
    }
}
