//! Declarations and typed structs in the shape the schema compiler emits.
//!
//! The integration tests in `tests/` drive validation and the wire codec
//! through these types, the same way a downstream generated crate would.

mod chain;
mod geometry;
mod location;
mod token;

pub use chain::{A, A_MODEL, B, B_MODEL, C, C_MODEL};
pub use geometry::{
    CIRCLE, Circle, OFFSET, Offset, POINT, Point, RECTANGLE, Rectangle, SHAPE, Shape,
};
pub use location::{LOCATION, Location};
pub use palette::{COLOR, Color};
pub use sketch::{SKETCH, Sketch};
pub use token::{TOKEN, Token};

use wiretype::{
    codec::WireConfig,
    core::model::{ModelError, TypeModel, check::check_type},
};

/// Every top-level declaration in this crate.
#[must_use]
pub fn declarations() -> [TypeModel; 9] {
    [
        TypeModel::Unboxed(&OFFSET),
        TypeModel::Unboxed(&TOKEN),
        TypeModel::Unboxed(&C_MODEL),
        TypeModel::Record(&POINT),
        TypeModel::Record(&LOCATION),
        TypeModel::Record(&SKETCH),
        TypeModel::Union(&SHAPE),
        TypeModel::Enum(&COLOR),
        TypeModel::Unboxed(&A_MODEL),
    ]
}

/// Check every declaration against `config`.
pub fn check_declarations(config: &WireConfig) -> Result<(), ModelError> {
    declarations()
        .iter()
        .try_for_each(|ty| check_type(ty, config))
}
