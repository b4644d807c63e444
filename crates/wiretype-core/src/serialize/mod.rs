//! Value → wire encoding.
//!
//! Serialization never fails: every value was validated when it was built,
//! so the encoder only has to walk it. Records and unions become objects
//! keyed by wire names, with discriminator entries first and fields in
//! declaration order. An unboxed value is encoded as its inner value.


use crate::{
    Wire,
    config::WireConfig,
    model::{FieldModel, NameMap},
    value::{EnumValue, RecordValue, UnboxedValue, UnionValue, Value},
};
use chrono::SecondsFormat;
use serde_json::{Map, Number};

/// Key of a map entry's key in the entry-list encoding.
pub const MAP_ENTRY_KEY: &str = "key";

/// Key of a map entry's value in the entry-list encoding.
pub const MAP_ENTRY_VALUE: &str = "value";

///
/// Serializer
///

#[derive(Clone, Copy, Debug)]
pub struct Serializer<'a> {
    config: &'a WireConfig,
}

impl<'a> Serializer<'a> {
    #[must_use]
    pub const fn new(config: &'a WireConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn value(&self, value: &Value) -> Wire {
        match value {
            Value::Null => Wire::Null,
            Value::Bool(v) => Wire::Bool(*v),
            Value::Int(v) => Wire::from(*v),
            // Float64 is always finite
            Value::Float(v) => Number::from_f64(v.get()).map_or(Wire::Null, Wire::Number),
            Value::Text(v) => Wire::String(v.clone()),
            Value::Decimal(v) => Wire::String(v.to_string()),
            Value::Uuid(v) => Wire::String(v.hyphenated().to_string()),
            Value::Date(v) => Wire::String(v.format("%Y-%m-%d").to_string()),
            Value::Timestamp(v) => Wire::String(v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::List(items) | Value::Set(items) => {
                Wire::Array(items.iter().map(|item| self.value(item)).collect())
            }
            Value::Map(entries) => Wire::Array(
                entries
                    .iter()
                    .map(|(k, v)| {
                        let mut entry = Map::with_capacity(2);
                        entry.insert(MAP_ENTRY_KEY.to_string(), self.value(k));
                        entry.insert(MAP_ENTRY_VALUE.to_string(), self.value(v));

                        Wire::Object(entry)
                    })
                    .collect(),
            ),
            Value::Unboxed(v) => self.unboxed(v),
            Value::Record(v) => self.record(v),
            Value::Union(v) => self.union(v),
            Value::Enum(v) => self.enumeration(v),
        }
    }

    /// The wire form of the inner value; the wrapper adds no structure.
    #[must_use]
    pub fn unboxed(&self, value: &UnboxedValue) -> Wire {
        self.value(value.inner())
    }

    #[must_use]
    pub fn record(&self, value: &RecordValue) -> Wire {
        let model = value.model();
        let mut object = Map::with_capacity(model.fields.len() + 1);

        if self.config.emit_type_names {
            object.insert(self.config.type_key.to_string(), Wire::from(model.name));
        }
        self.fields(&mut object, model.fields, &model.names, value.fields());

        Wire::Object(object)
    }

    #[must_use]
    pub fn union(&self, value: &UnionValue) -> Wire {
        let union = value.union();
        let tag = value.tag();
        let mut object = Map::with_capacity(tag.fields.len() + 2);

        if self.config.emit_type_names {
            object.insert(self.config.type_key.to_string(), Wire::from(union.name));
        }
        object.insert(
            self.config.tag_key.to_string(),
            Wire::from(union.tag_behind_name(tag)),
        );
        self.fields(&mut object, tag.fields, &tag.names, value.fields());

        Wire::Object(object)
    }

    #[must_use]
    pub fn enumeration(&self, value: &EnumValue) -> Wire {
        Wire::from(value.model().member_behind_name(value.member()))
    }

    fn fields(
        &self,
        object: &mut Map<String, Wire>,
        fields: &[FieldModel],
        names: &NameMap,
        values: &[Value],
    ) {
        for (field, value) in fields.iter().zip(values) {
            object.insert(names.behind_name(field.name).to_string(), self.value(value));
        }
    }
}

///
/// Default-config entry points
///

#[must_use]
pub fn serialize_value(value: &Value) -> Wire {
    Serializer::new(&WireConfig::DEFAULT).value(value)
}

#[must_use]
pub fn serialize_unboxed(value: &UnboxedValue) -> Wire {
    Serializer::new(&WireConfig::DEFAULT).unboxed(value)
}

#[must_use]
pub fn serialize_record(value: &RecordValue) -> Wire {
    Serializer::new(&WireConfig::DEFAULT).record(value)
}

#[must_use]
pub fn serialize_union(value: &UnionValue) -> Wire {
    Serializer::new(&WireConfig::DEFAULT).union(value)
}

#[must_use]
pub fn serialize_enum(value: &EnumValue) -> Wire {
    Serializer::new(&WireConfig::DEFAULT).enumeration(value)
}
