use crate::{
    error::ValidateError,
    model::{EnumModel, FieldModel, RecordModel, TagModel, UnboxedModel, UnionModel},
    validate::{validate_fields, validate_unboxed},
    value::Value,
};
use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

///
/// UnboxedValue
///
/// An instance of an unboxed type. The inner value has been validated
/// against the declared inner type; there is no way to build one that
/// has not.
///

#[derive(Clone, Debug)]
pub struct UnboxedValue {
    model: &'static UnboxedModel,
    inner: Value,
}

impl UnboxedValue {
    pub fn new(model: &'static UnboxedModel, inner: Value) -> Result<Self, ValidateError> {
        validate_unboxed(&inner, model)?;

        Ok(Self { model, inner })
    }

    // caller has already proven `inner` against `model.inner`
    pub(crate) const fn from_validated(model: &'static UnboxedModel, inner: Value) -> Self {
        Self { model, inner }
    }

    #[must_use]
    pub const fn model(&self) -> &'static UnboxedModel {
        self.model
    }

    #[must_use]
    pub const fn inner(&self) -> &Value {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> Value {
        self.inner
    }
}

impl PartialEq for UnboxedValue {
    fn eq(&self, other: &Self) -> bool {
        self.model.is(other.model) && self.inner == other.inner
    }
}

impl Eq for UnboxedValue {}

impl Hash for UnboxedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.model.path.hash(state);
        self.inner.hash(state);
    }
}

impl Display for UnboxedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.model.path, self.inner)
    }
}

///
/// RecordValue
///
/// An instance of a record type: one value per declared field, in
/// declaration order.
///

#[derive(Clone, Debug)]
pub struct RecordValue {
    model: &'static RecordModel,
    fields: Vec<Value>,
}

impl RecordValue {
    /// Build a record from values in declared field order.
    pub fn new(model: &'static RecordModel, fields: Vec<Value>) -> Result<Self, ValidateError> {
        validate_fields(model.path, model.fields, &fields)?;

        Ok(Self { model, fields })
    }

    /// Build a record from `(attribute, value)` pairs in any order.
    /// Omitted optional fields are `Null`.
    pub fn from_named<I, S>(model: &'static RecordModel, named: I) -> Result<Self, ValidateError>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let fields = collect_named(model.path, model.fields, named)?;

        Self::new(model, fields)
    }

    pub(crate) const fn from_validated(model: &'static RecordModel, fields: Vec<Value>) -> Self {
        Self { model, fields }
    }

    #[must_use]
    pub const fn model(&self) -> &'static RecordModel {
        self.model
    }

    #[must_use]
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Field value by attribute name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.model.field(name).map(|(i, _)| &self.fields[i])
    }

    /// Declared fields paired with their values.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldModel, &Value)> {
        self.model.fields.iter().zip(&self.fields)
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<Value> {
        self.fields
    }
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        self.model.is(other.model) && self.fields == other.fields
    }
}

impl Eq for RecordValue {}

impl Hash for RecordValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.model.path.hash(state);
        self.fields.hash(state);
    }
}

impl Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model.path)?;
        write_fields(f, self.iter())
    }
}

///
/// UnionValue
///
/// An instance of one concrete tag of a union. The union itself is never
/// instantiated: construction always names a declared tag.
///

#[derive(Clone, Debug)]
pub struct UnionValue {
    union: &'static UnionModel,
    tag: &'static TagModel,
    fields: Vec<Value>,
}

impl UnionValue {
    /// Build an instance of the tag called `tag`, with values in declared
    /// field order.
    pub fn new(
        union: &'static UnionModel,
        tag: &str,
        fields: Vec<Value>,
    ) -> Result<Self, ValidateError> {
        let tag = union.tag(tag).ok_or_else(|| ValidateError::UnknownTag {
            union: union.path,
            tag: tag.to_string(),
        })?;

        Self::from_tag(union, tag, fields)
    }

    pub fn from_tag(
        union: &'static UnionModel,
        tag: &'static TagModel,
        fields: Vec<Value>,
    ) -> Result<Self, ValidateError> {
        if !union.contains(tag) {
            return Err(ValidateError::UnknownTag {
                union: union.path,
                tag: tag.name.to_string(),
            });
        }
        validate_fields(tag.path, tag.fields, &fields)?;

        Ok(Self { union, tag, fields })
    }

    /// Build an instance from `(attribute, value)` pairs in any order.
    pub fn from_named<I, S>(
        union: &'static UnionModel,
        tag: &str,
        named: I,
    ) -> Result<Self, ValidateError>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let tag = union.tag(tag).ok_or_else(|| ValidateError::UnknownTag {
            union: union.path,
            tag: tag.to_string(),
        })?;
        let fields = collect_named(tag.path, tag.fields, named)?;

        Self::from_tag(union, tag, fields)
    }

    pub(crate) const fn from_validated(
        union: &'static UnionModel,
        tag: &'static TagModel,
        fields: Vec<Value>,
    ) -> Self {
        Self { union, tag, fields }
    }

    #[must_use]
    pub const fn union(&self) -> &'static UnionModel {
        self.union
    }

    #[must_use]
    pub const fn tag(&self) -> &'static TagModel {
        self.tag
    }

    #[must_use]
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.tag
            .fields
            .iter()
            .position(|f| f.name == name)
            .map(|i| &self.fields[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldModel, &Value)> {
        self.tag.fields.iter().zip(&self.fields)
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<Value> {
        self.fields
    }
}

impl PartialEq for UnionValue {
    fn eq(&self, other: &Self) -> bool {
        self.union.is(other.union) && self.tag.is(other.tag) && self.fields == other.fields
    }
}

impl Eq for UnionValue {}

impl Hash for UnionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.union.path.hash(state);
        self.tag.path.hash(state);
        self.fields.hash(state);
    }
}

impl Display for UnionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.union.path, self.tag.name)?;
        write_fields(f, self.iter())
    }
}

///
/// EnumValue
///

#[derive(Clone, Debug)]
pub struct EnumValue {
    model: &'static EnumModel,
    member: &'static str,
}

impl EnumValue {
    pub fn new(model: &'static EnumModel, member: &str) -> Result<Self, ValidateError> {
        let member = model
            .member(member)
            .ok_or_else(|| ValidateError::UnknownMember {
                model: model.path,
                member: member.to_string(),
            })?;

        Ok(Self { model, member })
    }

    pub(crate) const fn from_validated(model: &'static EnumModel, member: &'static str) -> Self {
        Self { model, member }
    }

    #[must_use]
    pub const fn model(&self) -> &'static EnumModel {
        self.model
    }

    #[must_use]
    pub const fn member(&self) -> &'static str {
        self.member
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.model.is(other.model) && self.member == other.member
    }
}

impl Eq for EnumValue {}

impl Hash for EnumValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.model.path.hash(state);
        self.member.hash(state);
    }
}

impl Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.model.path, self.member)
    }
}

// Order named values by declaration; an unnamed optional becomes Null and
// an unnamed required field is an arity failure.
fn collect_named<I, S>(
    owner: &'static str,
    fields: &'static [FieldModel],
    named: I,
) -> Result<Vec<Value>, ValidateError>
where
    I: IntoIterator<Item = (S, Value)>,
    S: AsRef<str>,
{
    let mut slots: Vec<Option<Value>> = vec![None; fields.len()];
    let mut found = 0;

    for (name, value) in named {
        let i = fields
            .iter()
            .position(|f| f.name == name.as_ref())
            .ok_or_else(|| ValidateError::UnknownField {
                model: owner,
                field: name.as_ref().to_string(),
            })?;
        if slots[i].replace(value).is_none() {
            found += 1;
        }
    }

    fields
        .iter()
        .zip(slots)
        .map(|(field, slot)| match slot {
            Some(value) => Ok(value),
            None if field.ty.is_optional() => Ok(Value::Null),
            None => Err(ValidateError::Arity {
                model: owner,
                expected: fields.len(),
                found,
            }),
        })
        .collect()
}

fn write_fields<'a>(
    f: &mut fmt::Formatter<'_>,
    fields: impl Iterator<Item = (&'static FieldModel, &'a Value)>,
) -> fmt::Result {
    f.write_str(" { ")?;
    for (i, (field, value)) in fields.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {value}", field.name)?;
    }
    f.write_str(" }")
}
