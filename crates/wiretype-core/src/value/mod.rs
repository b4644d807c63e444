mod entity;


pub use entity::{EnumValue, RecordValue, UnboxedValue, UnionValue};

use crate::types::{DateTime, Decimal, Float64, NaiveDate, Utc, Uuid};
use chrono::SecondsFormat;
use std::fmt::{self, Display};

///
/// Value
///
/// Runtime value tree. Everything a declared type can hold, with entity
/// values carrying their declaration.
///
/// Null        → absence marker for optional fields.
/// Set         → insertion-ordered, duplicate-free (enforced by validation).
/// Map         → insertion-ordered entries with unique keys.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(Float64),
    Text(String),
    Decimal(Decimal),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    List(Vec<Self>),
    Set(Vec<Self>),
    Map(Vec<(Self, Self)>),
    Unboxed(Box<UnboxedValue>),
    Record(RecordValue),
    Union(UnionValue),
    Enum(EnumValue),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Text(_) => "Text",
            Self::Decimal(_) => "Decimal",
            Self::Uuid(_) => "Uuid",
            Self::Date(_) => "Date",
            Self::Timestamp(_) => "Timestamp",
            Self::List(_) => "List",
            Self::Set(_) => "Set",
            Self::Map(_) => "Map",
            Self::Unboxed(_) => "Unboxed",
            Self::Record(_) => "Record",
            Self::Union(_) => "Union",
            Self::Enum(_) => "Enum",
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_unboxed(&self) -> Option<&UnboxedValue> {
        match self {
            Self::Unboxed(u) => Some(u),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_union(&self) -> Option<&UnionValue> {
        match self {
            Self::Union(u) => Some(u),
            _ => None,
        }
    }
}

// impl_value_from
macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    Float64 => Float,
    &str => Text,
    String => Text,
    Decimal => Decimal,
    Uuid => Uuid,
    NaiveDate => Date,
    DateTime<Utc> => Timestamp,
    Vec<Value> => List,
    UnboxedValue => Unboxed,
    RecordValue => Record,
    UnionValue => Union,
    EnumValue => Enum,
);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// Display
/// Compact, single-line rendering used in diagnostics.
///

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Uuid(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::Timestamp(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::List(items) => write_seq(f, "[", items, "]"),
            Self::Set(items) => write_seq(f, "{", items, "}"),
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Unboxed(u) => write!(f, "{u}"),
            Self::Record(r) => write!(f, "{r}"),
            Self::Union(u) => write!(f, "{u}"),
            Self::Enum(e) => write!(f, "{e}"),
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}
