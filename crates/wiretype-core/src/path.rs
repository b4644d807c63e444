use derive_more::Display;
use std::fmt::{self, Write};

///
/// PathSegment
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum PathSegment {
    #[display(".{_0}")]
    Field(&'static str),

    #[display("[{_0}]")]
    Index(usize),
}

impl From<&'static str> for PathSegment {
    fn from(s: &'static str) -> Self {
        Self::Field(s)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

///
/// FieldPath
///
/// Location of a value inside an instance or a wire document.
/// Validation paths use attribute names, deserialization paths use wire names.
/// Renders as `$`, `$.upper_left`, `$.points[2].x`.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(name: &'static str) -> Self {
        Self {
            segments: vec![PathSegment::Field(name)],
        }
    }

    #[must_use]
    pub fn child(&self, seg: impl Into<PathSegment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(seg.into());

        Self { segments }
    }

    pub fn push(&mut self, seg: impl Into<PathSegment>) {
        self.segments.push(seg.into());
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The innermost named segment, if any.
    #[must_use]
    pub fn last_field(&self) -> Option<&'static str> {
        self.segments.iter().rev().find_map(|seg| match seg {
            PathSegment::Field(name) => Some(*name),
            PathSegment::Index(_) => None,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('$')?;

        self.segments.iter().try_for_each(|seg| write!(f, "{seg}"))
    }
}

///
/// TESTS
///
