//! Wire → value decoding.
//!
//! The deserializer is driven by the expected declaration: the declared
//! type decides how a wire node is read, and the union tag decides which
//! variant is built. Every entity value is produced through its validating
//! constructor, so anything this module returns is valid by construction.
//!
//! Error paths use wire names, since they point into the document.


use crate::{
    Wire,
    config::WireConfig,
    error::{DeserializeError, Error},
    model::{
        EnumModel, FieldModel, NameMap, Primitive, RecordModel, TypeModel, UnboxedModel,
        UnionModel,
    },
    path::FieldPath,
    serialize::{MAP_ENTRY_KEY, MAP_ENTRY_VALUE},
    types::{DateTime, Decimal, Float64, NaiveDate, Utc, Uuid},
    validate::first_duplicate,
    value::{EnumValue, RecordValue, UnboxedValue, UnionValue, Value},
};
use chrono::FixedOffset;
use serde_json::Map;

///
/// Deserializer
///
/// Carries the wire config and the current document path.
///

#[derive(Debug)]
pub struct Deserializer<'a> {
    config: &'a WireConfig,
    path: FieldPath,
}

impl<'a> Deserializer<'a> {
    #[must_use]
    pub const fn new(config: &'a WireConfig) -> Self {
        Self {
            config,
            path: FieldPath::root(),
        }
    }

    /// Read a wire node as a value of any declared type.
    pub fn value(&mut self, ty: &TypeModel, wire: &Wire) -> Result<Value, Error> {
        match ty {
            TypeModel::Primitive(p) => self.primitive(*p, wire),
            TypeModel::Optional(inner) => {
                if wire.is_null() {
                    Ok(Value::Null)
                } else {
                    self.value(inner, wire)
                }
            }
            TypeModel::List(inner) => Ok(Value::List(self.elements(ty, inner, wire)?)),
            TypeModel::Set(inner) => {
                let items = self.elements(ty, inner, wire)?;
                if let Some(i) = first_duplicate(&items) {
                    return Err(self.invalid_at(i, "Set", "duplicate element"));
                }

                Ok(Value::Set(items))
            }
            TypeModel::Map(key, value) => self.map(ty, key, value, wire),
            TypeModel::Unboxed(m) => Ok(Value::Unboxed(Box::new(self.unboxed(m, wire)?))),
            TypeModel::Record(m) => Ok(Value::Record(self.record(m, wire)?)),
            TypeModel::Union(m) => Ok(Value::Union(self.union(m, wire)?)),
            TypeModel::Enum(m) => Ok(Value::Enum(self.enumeration(m, wire)?)),
        }
    }

    /// Read the inner value, then construct the unboxed instance.
    pub fn unboxed(
        &mut self,
        model: &'static UnboxedModel,
        wire: &Wire,
    ) -> Result<UnboxedValue, Error> {
        let inner = self.value(&model.inner, wire)?;

        Ok(UnboxedValue::new(model, inner)?)
    }

    pub fn record(
        &mut self,
        model: &'static RecordModel,
        wire: &Wire,
    ) -> Result<RecordValue, Error> {
        let object = self.object(wire, model.path)?;
        self.type_name(object, model.name)?;

        let fields = self.fields(object, model.fields, &model.names)?;

        Ok(RecordValue::new(model, fields)?)
    }

    /// Resolve the tag discriminator to a variant, then read that variant's
    /// fields. A document naming no declared tag is rejected: the union
    /// itself is never instantiated.
    pub fn union(&mut self, model: &'static UnionModel, wire: &Wire) -> Result<UnionValue, Error> {
        let object = self.object(wire, model.path)?;
        self.type_name(object, model.name)?;

        let behind = match object.get(self.config.tag_key.as_ref()) {
            Some(Wire::String(s)) => s.as_str(),
            Some(other) => {
                return Err(DeserializeError::Shape {
                    path: self.path.clone(),
                    expected: format!("{} tag string", model.path),
                    found: wire_label(other),
                }
                .into());
            }
            None => {
                return Err(DeserializeError::MissingTag {
                    path: self.path.clone(),
                    union: model.path,
                }
                .into());
            }
        };

        let tag = model
            .tag_by_behind_name(behind)
            .ok_or_else(|| DeserializeError::UnknownTag {
                path: self.path.clone(),
                union: model.path,
                tag: behind.to_string(),
            })?;
        tracing::trace!(union = model.path, tag = tag.name, "resolved union tag");

        let fields = self.fields(object, tag.fields, &tag.names)?;

        Ok(UnionValue::from_tag(model, tag, fields)?)
    }

    pub fn enumeration(
        &mut self,
        model: &'static EnumModel,
        wire: &Wire,
    ) -> Result<EnumValue, Error> {
        let Wire::String(behind) = wire else {
            return Err(self.shape(model.path, wire));
        };

        let member = model
            .member_by_behind_name(behind)
            .ok_or_else(|| DeserializeError::UnknownMember {
                path: self.path.clone(),
                model: model.path,
                member: behind.clone(),
            })?;

        Ok(EnumValue::new(model, member)?)
    }

    fn fields(
        &mut self,
        object: &Map<String, Wire>,
        fields: &'static [FieldModel],
        names: &NameMap,
    ) -> Result<Vec<Value>, Error> {
        if self.config.deny_unknown_fields {
            self.deny_unknown(object, fields, names)?;
        }

        let mut values = Vec::with_capacity(fields.len());
        for field in fields {
            let behind = names.behind_name(field.name);

            let Some(wire) = object.get(behind) else {
                if field.ty.is_optional() {
                    values.push(Value::Null);
                    continue;
                }

                return Err(DeserializeError::MissingField {
                    path: self.path.clone(),
                    field: behind,
                }
                .into());
            };

            self.path.push(behind);
            let value = self.value(&field.ty, wire);
            self.path.pop();

            values.push(value?);
        }

        Ok(values)
    }

    fn deny_unknown(
        &self,
        object: &Map<String, Wire>,
        fields: &[FieldModel],
        names: &NameMap,
    ) -> Result<(), Error> {
        for key in object.keys() {
            if self.config.is_reserved(key) {
                continue;
            }

            let known = names
                .attribute_name(key)
                .is_some_and(|attr| fields.iter().any(|f| f.name == attr));
            if !known {
                return Err(DeserializeError::UnknownField {
                    path: self.path.clone(),
                    field: key.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    // A present type-name entry must name the expected declaration.
    fn type_name(&self, object: &Map<String, Wire>, expected: &'static str) -> Result<(), Error> {
        if !self.config.check_type_names {
            return Ok(());
        }

        match object.get(self.config.type_key.as_ref()) {
            None => Ok(()),
            Some(Wire::String(found)) if found == expected => Ok(()),
            Some(Wire::String(found)) => Err(DeserializeError::TypeNameMismatch {
                path: self.path.clone(),
                expected,
                found: found.clone(),
            }
            .into()),
            Some(other) => Err(DeserializeError::Shape {
                path: self.path.clone(),
                expected: "type name string".to_string(),
                found: wire_label(other),
            }
            .into()),
        }
    }

    fn elements(
        &mut self,
        ty: &TypeModel,
        inner: &TypeModel,
        wire: &Wire,
    ) -> Result<Vec<Value>, Error> {
        let Wire::Array(items) = wire else {
            return Err(self.shape(ty, wire));
        };

        let mut values = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            self.path.push(i);
            let value = self.value(inner, item);
            self.path.pop();

            values.push(value?);
        }

        Ok(values)
    }

    fn map(
        &mut self,
        ty: &TypeModel,
        key: &TypeModel,
        value: &TypeModel,
        wire: &Wire,
    ) -> Result<Value, Error> {
        let Wire::Array(items) = wire else {
            return Err(self.shape(ty, wire));
        };

        let mut entries = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            self.path.push(i);
            let entry = self.entry(key, value, item);
            self.path.pop();

            entries.push(entry?);
        }

        if let Some(i) = first_duplicate(entries.iter().map(|(k, _)| k)) {
            return Err(self.invalid_at(i, "Map", "duplicate key"));
        }

        Ok(Value::Map(entries))
    }

    fn entry(
        &mut self,
        key: &TypeModel,
        value: &TypeModel,
        wire: &Wire,
    ) -> Result<(Value, Value), Error> {
        let object = self.object(wire, "Map entry")?;

        let mut read = |name: &'static str, ty: &TypeModel| -> Result<Value, Error> {
            let wire = object.get(name).ok_or_else(|| DeserializeError::MissingField {
                path: self.path.clone(),
                field: name,
            })?;

            self.path.push(name);
            let value = self.value(ty, wire);
            self.path.pop();

            value
        };

        let k = read(MAP_ENTRY_KEY, key)?;
        let v = read(MAP_ENTRY_VALUE, value)?;

        Ok((k, v))
    }

    fn primitive(&self, p: Primitive, wire: &Wire) -> Result<Value, Error> {
        let value = match (p, wire) {
            (Primitive::Bool, Wire::Bool(v)) => Value::Bool(*v),
            (Primitive::Int, Wire::Number(n)) => {
                let v = n
                    .as_i64()
                    .ok_or_else(|| self.invalid(p, format!("{n} is not a 64-bit integer")))?;

                Value::Int(v)
            }
            (Primitive::Float, Wire::Number(n)) => {
                let v = n
                    .as_f64()
                    .and_then(Float64::try_new)
                    .ok_or_else(|| self.invalid(p, format!("{n} is not a finite float")))?;

                Value::Float(v)
            }
            (Primitive::Text, Wire::String(s)) => Value::Text(s.clone()),
            (Primitive::Decimal, Wire::String(s)) => Value::Decimal(self.decimal(s)?),
            (Primitive::Decimal, Wire::Number(n)) => Value::Decimal(self.decimal(&n.to_string())?),
            (Primitive::Uuid, Wire::String(s)) => {
                Value::Uuid(Uuid::parse_str(s).map_err(|e| self.invalid(p, e.to_string()))?)
            }
            (Primitive::Date, Wire::String(s)) => Value::Date(
                s.parse::<NaiveDate>()
                    .map_err(|e| self.invalid(p, e.to_string()))?,
            ),
            // chrono's FromStr takes the signed years that RFC 3339 rejects
            (Primitive::Timestamp, Wire::String(s)) => Value::Timestamp(
                s.parse::<DateTime<FixedOffset>>()
                    .map_err(|e| self.invalid(p, e.to_string()))?
                    .with_timezone(&Utc),
            ),
            _ => return Err(self.shape(p, wire)),
        };

        Ok(value)
    }

    fn decimal(&self, s: &str) -> Result<Decimal, DeserializeError> {
        s.parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|e| self.invalid(Primitive::Decimal, e.to_string()))
    }

    fn object<'w>(
        &self,
        wire: &'w Wire,
        expected: &'static str,
    ) -> Result<&'w Map<String, Wire>, Error> {
        match wire {
            Wire::Object(object) => Ok(object),
            other => Err(self.shape(expected, other)),
        }
    }

    fn shape(&self, expected: impl ToString, wire: &Wire) -> Error {
        DeserializeError::Shape {
            path: self.path.clone(),
            expected: expected.to_string(),
            found: wire_label(wire),
        }
        .into()
    }

    fn invalid(&self, p: Primitive, message: String) -> DeserializeError {
        DeserializeError::Invalid {
            path: self.path.clone(),
            expected: p.label(),
            message,
        }
    }

    fn invalid_at(&self, i: usize, expected: &'static str, message: &str) -> Error {
        DeserializeError::Invalid {
            path: self.path.child(i),
            expected,
            message: message.to_string(),
        }
        .into()
    }
}

/// Stable label of a wire node's shape.
#[must_use]
pub const fn wire_label(wire: &Wire) -> &'static str {
    match wire {
        Wire::Null => "null",
        Wire::Bool(_) => "bool",
        Wire::Number(_) => "number",
        Wire::String(_) => "string",
        Wire::Array(_) => "array",
        Wire::Object(_) => "object",
    }
}

///
/// Default-config entry points
///

pub fn deserialize_value(ty: &TypeModel, wire: &Wire) -> Result<Value, Error> {
    Deserializer::new(&WireConfig::DEFAULT)
        .value(ty, wire)
        .inspect_err(|err| tracing::debug!(ty = %ty, error = %err, "deserialization failed"))
}

pub fn deserialize_unboxed(
    model: &'static UnboxedModel,
    wire: &Wire,
) -> Result<UnboxedValue, Error> {
    Deserializer::new(&WireConfig::DEFAULT)
        .unboxed(model, wire)
        .inspect_err(|err| tracing::debug!(ty = model.path, error = %err, "deserialization failed"))
}

pub fn deserialize_record(model: &'static RecordModel, wire: &Wire) -> Result<RecordValue, Error> {
    Deserializer::new(&WireConfig::DEFAULT)
        .record(model, wire)
        .inspect_err(|err| tracing::debug!(ty = model.path, error = %err, "deserialization failed"))
}

pub fn deserialize_union(model: &'static UnionModel, wire: &Wire) -> Result<UnionValue, Error> {
    Deserializer::new(&WireConfig::DEFAULT)
        .union(model, wire)
        .inspect_err(|err| tracing::debug!(ty = model.path, error = %err, "deserialization failed"))
}

pub fn deserialize_enum(model: &'static EnumModel, wire: &Wire) -> Result<EnumValue, Error> {
    Deserializer::new(&WireConfig::DEFAULT)
        .enumeration(model, wire)
        .inspect_err(|err| tracing::debug!(ty = model.path, error = %err, "deserialization failed"))
}
