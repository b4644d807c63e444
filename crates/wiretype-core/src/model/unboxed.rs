use crate::model::TypeModel;

///
/// UnboxedModel
/// Declaration of a single-value wrapper type.
///

#[derive(Debug)]
pub struct UnboxedModel {
    /// Fully-qualified type path (nominal identity and diagnostics).
    pub path: &'static str,
    /// Wire name of the type.
    pub name: &'static str,
    /// Declared type of the wrapped value.
    pub inner: TypeModel,
}

impl UnboxedModel {
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str, inner: TypeModel) -> Self {
        Self { path, name, inner }
    }

    /// Nominal identity: same declaration path.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.path == other.path
    }
}
