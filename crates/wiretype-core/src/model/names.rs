use std::{collections::HashMap, fmt, sync::OnceLock};

///
/// NameMap
///
/// Bijective table between in-memory attribute names and wire ("behind")
/// names for one declaration. Only aliased names are listed; every other
/// attribute is its own wire name.
///
/// The alias table is static data emitted with the declaration. Both lookup
/// directions are hashed once, on first use, and never change afterwards.
///

pub struct NameMap {
    aliases: &'static [(&'static str, &'static str)],
    index: OnceLock<NameIndex>,
}

impl NameMap {
    #[must_use]
    pub const fn new(aliases: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            aliases,
            index: OnceLock::new(),
        }
    }

    /// A map where every attribute is its own wire name.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(&[])
    }

    /// Declared `(attribute, wire)` alias pairs, in declaration order.
    #[must_use]
    pub const fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        self.aliases
    }

    /// Wire name for an attribute.
    #[must_use]
    pub fn behind_name<'a>(&self, attr: &'a str) -> &'a str {
        self.index().behind.get(attr).copied().unwrap_or(attr)
    }

    /// Attribute name for a wire name.
    ///
    /// Returns `None` when `wire` is the in-memory name of an aliased
    /// attribute: that attribute is only reachable through its alias.
    #[must_use]
    pub fn attribute_name<'a>(&self, wire: &'a str) -> Option<&'a str> {
        let index = self.index();

        if let Some(&attr) = index.attr.get(wire) {
            return Some(attr);
        }
        if index.behind.contains_key(wire) {
            return None;
        }

        Some(wire)
    }

    /// Whether `attr` has an explicit alias.
    #[must_use]
    pub fn is_aliased(&self, attr: &str) -> bool {
        self.index().behind.contains_key(attr)
    }

    fn index(&self) -> &NameIndex {
        self.index.get_or_init(|| NameIndex::build(self.aliases))
    }
}

impl fmt::Debug for NameMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.aliases.iter().map(|(attr, wire)| (attr, wire)))
            .finish()
    }
}

///
/// NameIndex
///

struct NameIndex {
    behind: HashMap<&'static str, &'static str>,
    attr: HashMap<&'static str, &'static str>,
}

impl NameIndex {
    fn build(aliases: &'static [(&'static str, &'static str)]) -> Self {
        let mut behind = HashMap::with_capacity(aliases.len());
        let mut attr = HashMap::with_capacity(aliases.len());

        for &(a, w) in aliases {
            behind.insert(a, w);
            attr.insert(w, a);
        }

        Self { behind, attr }
    }
}

///
/// TESTS
///
