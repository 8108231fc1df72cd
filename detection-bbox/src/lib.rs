//! Validated bounding box value type for detection outputs.

mod common;

pub mod bounding_box;
pub use bounding_box::*;

pub mod coerce;
pub use coerce::*;

pub mod error;
pub use error::*;

pub mod point;
pub use point::*;

pub use rect::*;
pub mod rect;

pub mod prelude {
    pub use crate::rect::{Rect, RectExt};
}
