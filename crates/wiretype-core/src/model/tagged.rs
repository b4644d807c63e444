use crate::model::{FieldModel, NameMap};

///
/// TagModel
///
/// One concrete variant of a union: its own field list and name map,
/// scoped to the variant.
///

#[derive(Debug)]
pub struct TagModel {
    /// Fully-qualified path of the concrete variant type.
    pub path: &'static str,
    /// Tag name as used in generated code.
    pub name: &'static str,
    pub fields: &'static [FieldModel],
    pub names: NameMap,
}

impl TagModel {
    #[must_use]
    pub const fn new(
        path: &'static str,
        name: &'static str,
        fields: &'static [FieldModel],
        names: NameMap,
    ) -> Self {
        Self {
            path,
            name,
            fields,
            names,
        }
    }

    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.path == other.path
    }

    #[must_use]
    pub fn behind_name(&self, field: &FieldModel) -> &'static str {
        self.names.behind_name(field.name)
    }
}

///
/// UnionModel
///
/// Declaration of a tagged sum. The union itself has no fields and is never
/// instantiated; every instance is exactly one of `tags`.
///

#[derive(Debug)]
pub struct UnionModel {
    /// Fully-qualified type path (nominal identity and diagnostics).
    pub path: &'static str,
    /// Wire name of the type.
    pub name: &'static str,
    /// Closed tag set, in declaration order.
    pub tags: &'static [&'static TagModel],
    /// Tag name ↔ wire tag name.
    pub tag_names: NameMap,
}

impl UnionModel {
    #[must_use]
    pub const fn new(
        path: &'static str,
        name: &'static str,
        tags: &'static [&'static TagModel],
        tag_names: NameMap,
    ) -> Self {
        Self {
            path,
            name,
            tags,
            tag_names,
        }
    }

    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.path == other.path
    }

    /// Tag by in-memory name.
    #[must_use]
    pub fn tag(&self, name: &str) -> Option<&'static TagModel> {
        self.tags.iter().copied().find(|t| t.name == name)
    }

    /// Tag by wire name.
    #[must_use]
    pub fn tag_by_behind_name(&self, wire: &str) -> Option<&'static TagModel> {
        self.tag_names
            .attribute_name(wire)
            .and_then(|name| self.tag(name))
    }

    /// Wire name of one of this union's tags.
    #[must_use]
    pub fn tag_behind_name(&self, tag: &TagModel) -> &'static str {
        self.tag_names.behind_name(tag.name)
    }

    /// Whether `tag` is one of this union's declared variants.
    #[must_use]
    pub fn contains(&self, tag: &TagModel) -> bool {
        self.tags.iter().any(|t| t.is(tag))
    }
}
