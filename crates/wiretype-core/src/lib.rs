//! Core runtime for Wiretype: static type declarations, the value tree,
//! validation, and the wire codec used by schema-generated types.
//!
//! Generated code supplies `static` declarations (see [`model`]) and
//! implements the traits in [`traits`]; everything else in this crate is
//! generic over those declarations.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod config;
pub mod deserialize;
pub mod error;
pub mod model;
pub mod path;
pub mod serialize;
pub mod traits;
pub mod types;
pub mod validate;
pub mod value;


pub use error::Error;

///
/// Wire
/// The wire-neutral keyed mapping representation (JSON compatible).
///

pub type Wire = serde_json::Value;

///
/// CONSTANTS
///

/// Default wire key carrying the union tag discriminator.
pub const DEFAULT_TAG_KEY: &str = "_tag";

/// Default wire key carrying the declared type name.
pub const DEFAULT_TYPE_KEY: &str = "_type";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, codecs, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{
            EnumModel, FieldModel, NameMap, Primitive, RecordModel, TagModel, TypeModel,
            UnboxedModel, UnionModel,
        },
        traits::{Entity, EnumKind, FieldValue, Record, Unboxed, Union, Variant},
        types::Float64,
        value::Value,
    };
}
