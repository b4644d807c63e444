use crate::path::FieldPath;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level runtime error. Every failure is one of two kinds: a value did
/// not satisfy its declared type, or a wire document could not be read back
/// into the declared shape.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
}

impl Error {
    /// Return a stable error kind independent of message text.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validate(_) => ErrorKind::TypeMismatch,
            Self::Deserialize(_) => ErrorKind::Deserialize,
        }
    }

    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), ErrorKind::TypeMismatch)
    }

    #[must_use]
    pub const fn is_deserialize(&self) -> bool {
        matches!(self.kind(), ErrorKind::Deserialize)
    }

    #[must_use]
    pub const fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::Validate(err) => err.path(),
            Self::Deserialize(err) => Some(err.path()),
        }
    }
}

///
/// ErrorKind
///
/// Stable error-kind taxonomy.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    TypeMismatch,
    Deserialize,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::Deserialize => "deserialize",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ValidateError
///
/// Raised when a value does not satisfy its declared type.
/// Paths use attribute names.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("type mismatch at {path}: expected {expected}, found {value}")]
    TypeMismatch {
        path: FieldPath,
        value: String,
        expected: String,
    },

    #[error("{model} declares {expected} field(s), found {found}")]
    Arity {
        model: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{union} has no tag '{tag}'; only its declared variants can be instantiated")]
    UnknownTag { union: &'static str, tag: String },

    #[error("{model} has no member '{member}'")]
    UnknownMember { model: &'static str, member: String },

    #[error("{model} has no field '{field}'")]
    UnknownField { model: &'static str, field: String },

    #[error("duplicate set element at {path}")]
    DuplicateElement { path: FieldPath },

    #[error("duplicate map key at {path}")]
    DuplicateKey { path: FieldPath },
}

impl ValidateError {
    pub(crate) fn mismatch(
        path: &FieldPath,
        value: impl fmt::Display,
        expected: impl fmt::Display,
    ) -> Self {
        Self::TypeMismatch {
            path: path.clone(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    #[must_use]
    pub const fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::DuplicateElement { path }
            | Self::DuplicateKey { path } => Some(path),
            Self::Arity { .. }
            | Self::UnknownTag { .. }
            | Self::UnknownMember { .. }
            | Self::UnknownField { .. } => None,
        }
    }

    /// The attribute name the failure is pinned to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        self.path().and_then(FieldPath::last_field)
    }
}

///
/// DeserializeError
///
/// Raised when a wire document cannot produce a value of the declared type.
/// Paths use wire names.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DeserializeError {
    #[error("wrong shape at {path}: expected {expected}, found {found}")]
    Shape {
        path: FieldPath,
        expected: String,
        found: &'static str,
    },

    #[error("invalid {expected} at {path}: {message}")]
    Invalid {
        path: FieldPath,
        expected: &'static str,
        message: String,
    },

    #[error("missing field '{field}' at {path}")]
    MissingField { path: FieldPath, field: &'static str },

    #[error("unknown field '{field}' at {path}")]
    UnknownField { path: FieldPath, field: String },

    #[error("missing tag discriminator for {union} at {path}")]
    MissingTag { path: FieldPath, union: &'static str },

    #[error("unknown tag '{tag}' for {union} at {path}")]
    UnknownTag {
        path: FieldPath,
        union: &'static str,
        tag: String,
    },

    #[error("unknown member '{member}' for {model} at {path}")]
    UnknownMember {
        path: FieldPath,
        model: &'static str,
        member: String,
    },

    #[error("type name mismatch at {path}: expected '{expected}', found '{found}'")]
    TypeNameMismatch {
        path: FieldPath,
        expected: &'static str,
        found: String,
    },
}

impl DeserializeError {
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        match self {
            Self::Shape { path, .. }
            | Self::Invalid { path, .. }
            | Self::MissingField { path, .. }
            | Self::UnknownField { path, .. }
            | Self::MissingTag { path, .. }
            | Self::UnknownTag { path, .. }
            | Self::UnknownMember { path, .. }
            | Self::TypeNameMismatch { path, .. } => path,
        }
    }
}

///
/// TESTS
///
