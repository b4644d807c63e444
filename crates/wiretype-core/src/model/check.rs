//! Declaration checks.
//!
//! The schema compiler is expected to emit well-formed declarations; these
//! checks let generated crates (and their tests) prove it. They walk the
//! whole type graph reachable from the starting declaration, visiting each
//! named declaration once.

use crate::{
    config::WireConfig,
    model::{EnumModel, FieldModel, NameMap, RecordModel, TypeModel, UnboxedModel, UnionModel},
};
use std::collections::{HashMap, HashSet};
use thiserror::Error as ThisError;

///
/// ModelError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ModelError {
    #[error("{model}: duplicate name '{name}'")]
    DuplicateName {
        model: &'static str,
        name: &'static str,
    },

    #[error("{model}: wire name '{wire}' is shared by '{first}' and '{second}'")]
    DuplicateWireName {
        model: &'static str,
        wire: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("{model}: alias declared for unknown name '{name}'")]
    UnknownAlias {
        model: &'static str,
        name: &'static str,
    },

    #[error("{model}: wire name '{wire}' of '{name}' is a reserved key")]
    ReservedKey {
        model: &'static str,
        name: &'static str,
        wire: &'static str,
    },

    #[error("{model}: declares no variants")]
    Empty { model: &'static str },

    #[error("{model}: '{name}' is an optional of an optional")]
    NestedOptional {
        model: &'static str,
        name: &'static str,
    },

    #[error("{model}: '{name}' uses {key} as a map key")]
    UnkeyableMapKey {
        model: &'static str,
        name: &'static str,
        key: String,
    },
}

/// Check any declared type and everything it references.
pub fn check_type(ty: &TypeModel, config: &WireConfig) -> Result<(), ModelError> {
    Checker::new(config)
        .ty("$", "$", ty)
        .inspect_err(|err| tracing::warn!(error = %err, "rejected declaration"))
}

pub fn check_unboxed(model: &'static UnboxedModel, config: &WireConfig) -> Result<(), ModelError> {
    check_type(&TypeModel::Unboxed(model), config)
}

pub fn check_record(model: &'static RecordModel, config: &WireConfig) -> Result<(), ModelError> {
    check_type(&TypeModel::Record(model), config)
}

pub fn check_union(model: &'static UnionModel, config: &WireConfig) -> Result<(), ModelError> {
    check_type(&TypeModel::Union(model), config)
}

pub fn check_enum(model: &'static EnumModel, config: &WireConfig) -> Result<(), ModelError> {
    check_type(&TypeModel::Enum(model), config)
}

///
/// Checker
///

struct Checker<'a> {
    config: &'a WireConfig,
    visited: HashSet<&'static str>,
}

impl<'a> Checker<'a> {
    fn new(config: &'a WireConfig) -> Self {
        Self {
            config,
            visited: HashSet::new(),
        }
    }

    // owner/name locate the type for error reporting
    fn ty(
        &mut self,
        owner: &'static str,
        name: &'static str,
        ty: &TypeModel,
    ) -> Result<(), ModelError> {
        match ty {
            TypeModel::Primitive(_) => Ok(()),
            TypeModel::Optional(inner) => {
                if inner.is_optional() {
                    return Err(ModelError::NestedOptional { model: owner, name });
                }

                self.ty(owner, name, inner)
            }
            TypeModel::List(inner) | TypeModel::Set(inner) => self.ty(owner, name, inner),
            TypeModel::Map(key, value) => {
                if !key.is_keyable() {
                    return Err(ModelError::UnkeyableMapKey {
                        model: owner,
                        name,
                        key: key.to_string(),
                    });
                }

                self.ty(owner, name, key)?;
                self.ty(owner, name, value)
            }
            TypeModel::Unboxed(m) => self.unboxed(m),
            TypeModel::Record(m) => self.record(m),
            TypeModel::Union(m) => self.union(m),
            TypeModel::Enum(m) => self.enumeration(m),
        }
    }

    fn unboxed(&mut self, model: &'static UnboxedModel) -> Result<(), ModelError> {
        if !self.visited.insert(model.path) {
            return Ok(());
        }

        self.ty(model.path, "inner", &model.inner)
    }

    fn record(&mut self, model: &'static RecordModel) -> Result<(), ModelError> {
        if !self.visited.insert(model.path) {
            return Ok(());
        }

        self.fields(model.path, model.fields, &model.names)
    }

    fn union(&mut self, model: &'static UnionModel) -> Result<(), ModelError> {
        if !self.visited.insert(model.path) {
            return Ok(());
        }
        if model.tags.is_empty() {
            return Err(ModelError::Empty { model: model.path });
        }

        self.names(
            model.path,
            model.tags.iter().map(|t| t.name),
            &model.tag_names,
            false,
        )?;

        for tag in model.tags {
            self.fields(tag.path, tag.fields, &tag.names)?;
        }

        Ok(())
    }

    fn enumeration(&mut self, model: &'static EnumModel) -> Result<(), ModelError> {
        if !self.visited.insert(model.path) {
            return Ok(());
        }
        if model.members.is_empty() {
            return Err(ModelError::Empty { model: model.path });
        }

        self.names(model.path, model.members.iter().copied(), &model.names, false)
    }

    fn fields(
        &mut self,
        owner: &'static str,
        fields: &'static [FieldModel],
        names: &NameMap,
    ) -> Result<(), ModelError> {
        self.names(owner, fields.iter().map(|f| f.name), names, true)?;

        for field in fields {
            self.ty(owner, field.name, &field.ty)?;
        }

        Ok(())
    }

    // Every declared name resolves to a distinct wire name, and every alias
    // names a declared attribute.
    fn names(
        &self,
        owner: &'static str,
        attrs: impl Iterator<Item = &'static str>,
        names: &NameMap,
        keys: bool,
    ) -> Result<(), ModelError> {
        let mut declared = HashSet::new();
        let mut wires: HashMap<&'static str, &'static str> = HashMap::new();

        for attr in attrs {
            if !declared.insert(attr) {
                return Err(ModelError::DuplicateName { model: owner, name: attr });
            }

            let wire = names.behind_name(attr);
            if keys && self.config.is_reserved(wire) {
                return Err(ModelError::ReservedKey {
                    model: owner,
                    name: attr,
                    wire,
                });
            }
            if let Some(first) = wires.insert(wire, attr) {
                return Err(ModelError::DuplicateWireName {
                    model: owner,
                    wire,
                    first,
                    second: attr,
                });
            }
        }

        let mut aliased = HashSet::new();
        for &(attr, _) in names.aliases() {
            if !declared.contains(attr) {
                return Err(ModelError::UnknownAlias { model: owner, name: attr });
            }
            if !aliased.insert(attr) {
                return Err(ModelError::DuplicateName { model: owner, name: attr });
            }
        }

        Ok(())
    }
}
