use crate::model::{NameMap, TypeModel};

///
/// FieldModel
/// One declared field: attribute name and declared type.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Attribute name as used in generated code.
    pub name: &'static str,
    pub ty: TypeModel,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, ty: TypeModel) -> Self {
        Self { name, ty }
    }
}

///
/// RecordModel
/// Declaration of a fixed-field product type.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified type path (nominal identity and diagnostics).
    pub path: &'static str,
    /// Wire name of the type.
    pub name: &'static str,
    /// Ordered field list (authoritative for validation and wire order).
    pub fields: &'static [FieldModel],
    /// Attribute ↔ wire names for `fields`.
    pub names: NameMap,
}

impl RecordModel {
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

    /// Field declaration and its position.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldModel)> {
        self.fields.iter().enumerate().find(|(_, f)| f.name == name)
    }

    /// Wire name of a declared field.
    #[must_use]
    pub fn behind_name(&self, field: &FieldModel) -> &'static str {
        self.names.behind_name(field.name)
    }
}
