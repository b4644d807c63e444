//! Runtime type declarations.
//!
//! The schema compiler emits one `static` item per declared type. Types in
//! `model` are never built at runtime; validation, serialization, and
//! deserialization are generic routines parameterized over them.
//!
//! In general:
//! - the schema compiler defines *what exists*
//! - `model` describes it
//! - `validate`, `serialize`, `deserialize` act on it
//!
//! Declarations reference each other through `&'static` pointers. Identity
//! is the declaration's `path`, never its address.
//!
//! Field lists, tag lists, and nested `TypeModel`s that point at another
//! declaration are emitted as their own statics, so every `&` in an
//! initializer names a static:
//!
//! ```ignore
//! static POINT_FIELDS: [FieldModel; 2] = [
//!     FieldModel::new("left", TypeModel::Unboxed(&OFFSET)),
//!     FieldModel::new("top", TypeModel::Unboxed(&OFFSET)),
//! ];
//! static POINT: RecordModel =
//!     RecordModel::new("app::Point", "point", &POINT_FIELDS, NameMap::new(&[("left", "x")]));
//! ```

pub mod check;
mod enumeration;
mod names;
mod record;
mod tagged;
mod unboxed;


pub use check::ModelError;
pub use enumeration::EnumModel;
pub use names::NameMap;
pub use record::{FieldModel, RecordModel};
pub use tagged::{TagModel, UnionModel};
pub use unboxed::UnboxedModel;

use std::fmt::{self, Display};

///
/// Primitive
///
/// Leaf types with a fixed wire encoding.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Primitive {
    Bool,
    Int,
    Float,
    Text,
    Decimal,
    Uuid,
    Date,
    Timestamp,
}

impl Primitive {
    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Text => "Text",
            Self::Decimal => "Decimal",
            Self::Uuid => "Uuid",
            Self::Date => "Date",
            Self::Timestamp => "Timestamp",
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// TypeModel
///
/// The declared type of a field or of an unboxed type's inner value.
///

#[derive(Clone, Copy)]
pub enum TypeModel {
    Primitive(Primitive),

    /// `Null` or a value of the inner type.
    Optional(&'static Self),

    /// Ordered sequence.
    List(&'static Self),

    /// Insertion-ordered, duplicate-free sequence.
    Set(&'static Self),

    /// Unique keys, insertion-ordered entries.
    Map(&'static Self, &'static Self),

    Unboxed(&'static UnboxedModel),
    Record(&'static RecordModel),
    Union(&'static UnionModel),
    Enum(&'static EnumModel),
}

impl TypeModel {
    pub const BOOL: Self = Self::Primitive(Primitive::Bool);
    pub const INT: Self = Self::Primitive(Primitive::Int);
    pub const FLOAT: Self = Self::Primitive(Primitive::Float);
    pub const TEXT: Self = Self::Primitive(Primitive::Text);
    pub const DECIMAL: Self = Self::Primitive(Primitive::Decimal);
    pub const UUID: Self = Self::Primitive(Primitive::Uuid);
    pub const DATE: Self = Self::Primitive(Primitive::Date);
    pub const TIMESTAMP: Self = Self::Primitive(Primitive::Timestamp);

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Path of the named declaration behind this type, if it is one.
    #[must_use]
    pub const fn declaration_path(&self) -> Option<&'static str> {
        match self {
            Self::Unboxed(m) => Some(m.path),
            Self::Record(m) => Some(m.path),
            Self::Union(m) => Some(m.path),
            Self::Enum(m) => Some(m.path),
            Self::Primitive(_)
            | Self::Optional(_)
            | Self::List(_)
            | Self::Set(_)
            | Self::Map(_, _) => None,
        }
    }

    /// Whether values of this type can key a map.
    #[must_use]
    pub const fn is_keyable(&self) -> bool {
        match self {
            Self::Primitive(_) | Self::Enum(_) => true,
            Self::Unboxed(m) => m.inner.is_keyable(),
            Self::Optional(_)
            | Self::List(_)
            | Self::Set(_)
            | Self::Map(_, _)
            | Self::Record(_)
            | Self::Union(_) => false,
        }
    }
}

impl Display for TypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Optional(inner) => write!(f, "Optional<{inner}>"),
            Self::List(inner) => write!(f, "List<{inner}>"),
            Self::Set(inner) => write!(f, "Set<{inner}>"),
            Self::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            Self::Unboxed(m) => f.write_str(m.path),
            Self::Record(m) => f.write_str(m.path),
            Self::Union(m) => f.write_str(m.path),
            Self::Enum(m) => f.write_str(m.path),
        }
    }
}

// Declarations are printed by path only; the type graph may be deep.
impl fmt::Debug for TypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeModel({self})")
    }
}
