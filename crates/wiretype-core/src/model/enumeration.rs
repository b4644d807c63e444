use crate::model::NameMap;

///
/// EnumModel
/// Declaration of a closed set of unit members, carried on the wire by name.
///

#[derive(Debug)]
pub struct EnumModel {
    /// Fully-qualified type path (nominal identity and diagnostics).
    pub path: &'static str,
    /// Wire name of the type.
    pub name: &'static str,
    pub members: &'static [&'static str],
    /// Member name ↔ wire member name.
    pub names: NameMap,
}

impl EnumModel {
    #[must_use]
    pub const fn new(
        path: &'static str,
        name: &'static str,
        members: &'static [&'static str],
        names: NameMap,
    ) -> Self {
        Self {
            path,
            name,
            members,
            names,
        }
    }

    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.path == other.path
    }

    /// Declared member by in-memory name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&'static str> {
        self.members.iter().copied().find(|m| *m == name)
    }

    /// Declared member by wire name.
    #[must_use]
    pub fn member_by_behind_name(&self, wire: &str) -> Option<&'static str> {
        self.names
            .attribute_name(wire)
            .and_then(|name| self.member(name))
    }

    #[must_use]
    pub fn member_behind_name(&self, member: &'static str) -> &'static str {
        self.names.behind_name(member)
    }
}
