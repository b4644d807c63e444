//! Structural type checking of values against declarations.
//!
//! Checks are exact and nominal: a value matches a named declaration only
//! if it is an instance of that same declaration. Nothing is coerced: an
//! `Int` does not satisfy `Float`, and a `Text` does not satisfy an unboxed
//! type wrapping `Text`.
//!
//! Entity instances are only ever built through a validating constructor,
//! so the checker trusts their contents and does not descend into them.


use crate::{
    error::ValidateError,
    model::{FieldModel, Primitive, TypeModel, UnboxedModel},
    path::FieldPath,
    traits::{Record, Variant},
    value::Value,
};
use std::collections::HashSet;

///
/// validate_value
/// Check a value against any declared type.
///

pub fn validate_value(value: &Value, ty: &TypeModel) -> Result<(), ValidateError> {
    check(value, ty, &mut FieldPath::root())
}

/// Check the would-be inner value of an unboxed type.
pub fn validate_unboxed(value: &Value, model: &UnboxedModel) -> Result<(), ValidateError> {
    validate_value(value, &model.inner)
}

/// Check every field of a typed record against its declaration.
pub fn validate_record<R: Record>(record: &R) -> Result<(), ValidateError> {
    let model = R::model();

    validate_fields(model.path, model.fields, &record.field_values())
}

/// Check every field of a typed union variant against its tag's declaration.
pub fn validate_union<V: Variant>(variant: &V) -> Result<(), ValidateError> {
    let tag = V::tag();

    validate_fields(tag.path, tag.fields, &variant.field_values())
}

/// Check values, in declared order, against a field list.
/// Fails on the first field (in declaration order) that does not match.
pub fn validate_fields(
    owner: &'static str,
    fields: &[FieldModel],
    values: &[Value],
) -> Result<(), ValidateError> {
    if fields.len() != values.len() {
        return Err(ValidateError::Arity {
            model: owner,
            expected: fields.len(),
            found: values.len(),
        });
    }

    for (field, value) in fields.iter().zip(values) {
        check(value, &field.ty, &mut FieldPath::field(field.name))?;
    }

    Ok(())
}

fn check(value: &Value, ty: &TypeModel, path: &mut FieldPath) -> Result<(), ValidateError> {
    match (ty, value) {
        (TypeModel::Optional(_), Value::Null) => Ok(()),
        (TypeModel::Optional(inner), _) => check(value, inner, path),
        (TypeModel::Primitive(p), _) if primitive_matches(*p, value) => Ok(()),

        (TypeModel::List(inner), Value::List(items)) => elements(items, inner, path),
        (TypeModel::Set(inner), Value::Set(items)) => {
            elements(items, inner, path)?;

            match first_duplicate(items) {
                Some(i) => Err(ValidateError::DuplicateElement {
                    path: path.child(i),
                }),
                None => Ok(()),
            }
        }
        (TypeModel::Map(key, val), Value::Map(entries)) => {
            for (i, (k, v)) in entries.iter().enumerate() {
                path.push(i);
                check(k, key, path)?;
                check(v, val, path)?;
                path.pop();
            }

            match first_duplicate(entries.iter().map(|(k, _)| k)) {
                Some(i) => Err(ValidateError::DuplicateKey {
                    path: path.child(i),
                }),
                None => Ok(()),
            }
        }

        (TypeModel::Unboxed(m), Value::Unboxed(v)) if v.model().is(m) => Ok(()),
        (TypeModel::Record(m), Value::Record(v)) if v.model().is(m) => Ok(()),
        (TypeModel::Union(m), Value::Union(v)) if v.union().is(m) => Ok(()),
        (TypeModel::Enum(m), Value::Enum(v)) if v.model().is(m) => Ok(()),

        _ => Err(ValidateError::mismatch(path, value, ty)),
    }
}

fn elements(items: &[Value], inner: &TypeModel, path: &mut FieldPath) -> Result<(), ValidateError> {
    for (i, item) in items.iter().enumerate() {
        path.push(i);
        check(item, inner, path)?;
        path.pop();
    }

    Ok(())
}

const fn primitive_matches(p: Primitive, value: &Value) -> bool {
    matches!(
        (p, value),
        (Primitive::Bool, Value::Bool(_))
            | (Primitive::Int, Value::Int(_))
            | (Primitive::Float, Value::Float(_))
            | (Primitive::Text, Value::Text(_))
            | (Primitive::Decimal, Value::Decimal(_))
            | (Primitive::Uuid, Value::Uuid(_))
            | (Primitive::Date, Value::Date(_))
            | (Primitive::Timestamp, Value::Timestamp(_))
    )
}

/// Position of the first value equal to an earlier one.
pub(crate) fn first_duplicate<'a>(items: impl IntoIterator<Item = &'a Value>) -> Option<usize> {
    let mut seen = HashSet::new();

    items.into_iter().position(|item| !seen.insert(item))
}
