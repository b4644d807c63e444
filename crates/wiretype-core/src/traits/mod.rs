//! Traits implemented by schema-generated types.
//!
//! Generated code holds plain Rust structs and enums. These traits connect
//! them to their static declarations and to the dynamic [`Value`] tree, so
//! the generic validator and codec can act on them.

use crate::{
    Error, Wire,
    config::WireConfig,
    deserialize::Deserializer,
    error::ValidateError,
    model::{EnumModel, RecordModel, TagModel, TypeModel, UnboxedModel, UnionModel},
    path::FieldPath,
    serialize::Serializer,
    types::{DateTime, Decimal, Float64, NaiveDate, Utc, Uuid},
    value::{EnumValue, RecordValue, UnboxedValue, UnionValue, Value},
};
use std::collections::{BTreeMap, BTreeSet};

/// ============================================================================
/// VALUE CONVERSION
/// ============================================================================

///
/// FieldValue
///
/// Conversion boundary between a Rust field type and the value tree.
/// `from_value` returns `None` when the value is not of this type.
///

pub trait FieldValue: Sized {
    fn to_value(&self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().map(ToString::to_string)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Self::new)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        items.iter().map(T::from_value).collect()
    }
}

impl<T: FieldValue + Ord> FieldValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::Set(items) = value else {
            return None;
        };

        items.iter().map(T::from_value).collect()
    }
}

impl<K: FieldValue + Ord, V: FieldValue> FieldValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::Map(entries) = value else {
            return None;
        };

        entries
            .iter()
            .map(|(k, v)| Some((K::from_value(k)?, V::from_value(v)?)))
            .collect()
    }
}

// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    Float64 => Float,
    Decimal => Decimal,
    Uuid => Uuid,
    NaiveDate => Date,
    DateTime<Utc> => Timestamp,
);

/// ============================================================================
/// DECLARED TYPES
/// ============================================================================

///
/// Entity
///
/// Any generated type with a declaration of its own.
///

pub trait Entity: FieldValue {
    fn type_model() -> TypeModel;
}

///
/// Unboxed
///
/// A single-value wrapper. `from_inner` is the validating constructor.
///

pub trait Unboxed: Sized {
    type Inner: FieldValue;

    fn model() -> &'static UnboxedModel;

    fn inner(&self) -> &Self::Inner;

    fn from_inner(inner: Self::Inner) -> Result<Self, ValidateError>;
}

///
/// Record
///
/// A fixed-field product type. Field values are listed in declared order.
///

pub trait Record: Sized {
    fn model() -> &'static RecordModel;

    fn field_values(&self) -> Vec<Value>;

    /// Rebuild from already-validated values in declared order.
    fn from_field_values(values: &[Value]) -> Option<Self>;
}

///
/// Variant
///
/// One concrete tag of a union, generated as its own struct.
///

pub trait Variant: Sized {
    fn union() -> &'static UnionModel;

    fn tag() -> &'static TagModel;

    fn field_values(&self) -> Vec<Value>;

    fn from_field_values(values: &[Value]) -> Option<Self>;
}

///
/// Union
///
/// The closed sum over a union's variants, generated as a Rust enum with
/// one arm per tag. There is no arm for the union itself.
///

pub trait Union: Sized {
    fn model() -> &'static UnionModel;
}

///
/// EnumKind
///

pub trait EnumKind: Sized {
    fn model() -> &'static EnumModel;

    fn member(&self) -> &'static str;

    fn from_member(member: &str) -> Option<Self>;
}

/// ============================================================================
/// GLUE
/// ============================================================================

// Typed instances are valid by construction, so their dynamic form is
// built without a second validation pass.

#[must_use]
pub fn unboxed_to_value<U: Unboxed>(unboxed: &U) -> Value {
    let inner = unboxed.inner().to_value();

    Value::Unboxed(Box::new(UnboxedValue::from_validated(U::model(), inner)))
}

#[must_use]
pub fn unboxed_from_value<U: Unboxed>(value: &Value) -> Option<U> {
    match value {
        Value::Unboxed(v) if v.model().is(U::model()) => {
            U::from_inner(U::Inner::from_value(v.inner())?).ok()
        }
        _ => None,
    }
}

#[must_use]
pub fn record_to_value<R: Record>(record: &R) -> Value {
    Value::Record(RecordValue::from_validated(R::model(), record.field_values()))
}

#[must_use]
pub fn record_from_value<R: Record>(value: &Value) -> Option<R> {
    match value {
        Value::Record(v) if v.model().is(R::model()) => R::from_field_values(v.fields()),
        _ => None,
    }
}

#[must_use]
pub fn variant_to_value<V: Variant>(variant: &V) -> Value {
    Value::Union(UnionValue::from_validated(
        V::union(),
        V::tag(),
        variant.field_values(),
    ))
}

#[must_use]
pub fn variant_from_value<V: Variant>(value: &Value) -> Option<V> {
    match value {
        Value::Union(v) if v.union().is(V::union()) && v.tag().is(V::tag()) => {
            V::from_field_values(v.fields())
        }
        _ => None,
    }
}

#[must_use]
pub fn enum_to_value<E: EnumKind>(member: &E) -> Value {
    Value::Enum(EnumValue::from_validated(E::model(), member.member()))
}

#[must_use]
pub fn enum_from_value<E: EnumKind>(value: &Value) -> Option<E> {
    match value {
        Value::Enum(v) if v.model().is(E::model()) => E::from_member(v.member()),
        _ => None,
    }
}

/// Read field `i` of a validated field list as `T`.
#[must_use]
pub fn field<T: FieldValue>(values: &[Value], i: usize) -> Option<T> {
    values.get(i).and_then(T::from_value)
}

/// ============================================================================
/// WIRE
/// ============================================================================

/// Serialize a typed entity with the default wire config.
#[must_use]
pub fn to_wire<T: Entity>(entity: &T) -> Wire {
    to_wire_with(entity, &WireConfig::DEFAULT)
}

#[must_use]
pub fn to_wire_with<T: Entity>(entity: &T, config: &WireConfig) -> Wire {
    Serializer::new(config).value(&entity.to_value())
}

/// Deserialize a typed entity with the default wire config.
pub fn from_wire<T: Entity>(wire: &Wire) -> Result<T, Error> {
    from_wire_with(wire, &WireConfig::DEFAULT)
}

pub fn from_wire_with<T: Entity>(wire: &Wire, config: &WireConfig) -> Result<T, Error> {
    let ty = T::type_model();
    let value = Deserializer::new(config)
        .value(&ty, wire)
        .inspect_err(|err| tracing::debug!(ty = %ty, error = %err, "deserialization failed"))?;

    T::from_value(&value)
        .ok_or_else(|| ValidateError::mismatch(&FieldPath::root(), &value, ty).into())
}
