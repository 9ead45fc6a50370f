pub mod truncate;

pub use truncate::{ELLIPSIS, truncate_chars, truncate_to_width};
