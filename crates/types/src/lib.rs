pub mod geometry;
pub mod image;
pub mod page;
pub mod record;
pub mod text;

pub use geometry::{CM, MM, Point, Rect, Size, cm, mm};
pub use image::DecodedImage;
pub use page::{Orientation, PageSize};
pub use record::BoletoRecord;
pub use text::{FontFamily, FontWeight, TextAlign, TextStyle};
