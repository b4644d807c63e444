//! ## Crate layout
//! - `core`: declarations, value tree, validation, and the wire codec.
//!
//! Schema-generated crates depend on `wiretype` only. The `prelude` module
//! carries the names generated code refers to; `codec` groups the entry
//! points for moving values on and off the wire.

pub use wiretype_core as core;

/// re-exports
///
/// generated code uses these, so downstream crates need not list them in
/// their own Cargo.toml
pub mod __reexports {
    pub use chrono;
    pub use rust_decimal;
    pub use serde_json;
    pub use uuid;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use crate::core::{Error, Wire, impl_entity};

///
/// Codec
/// Typed and dynamic entry points for the wire.
///

pub mod codec {
    pub use crate::core::{
        config::{ConfigError, WireConfig},
        deserialize::{
            Deserializer, deserialize_enum, deserialize_record, deserialize_union,
            deserialize_unboxed, deserialize_value,
        },
        serialize::{
            Serializer, serialize_enum, serialize_record, serialize_union, serialize_unboxed,
            serialize_value,
        },
        traits::{from_wire, from_wire_with, to_wire, to_wire_with},
        validate::{
            validate_fields, validate_record, validate_unboxed, validate_union, validate_value,
        },
    };
}

///
/// Prelude
/// Names generated code refers to.
///

pub mod prelude {
    pub use crate::core::{
        error::{Error, ValidateError},
        model::{
            EnumModel, FieldModel, NameMap, Primitive, RecordModel, TagModel, TypeModel,
            UnboxedModel, UnionModel,
        },
        traits::{Entity, EnumKind, FieldValue, Record, Unboxed, Union, Variant},
        types::{DateTime, Decimal, Float64, NaiveDate, Utc, Uuid},
        value::Value,
    };
}
