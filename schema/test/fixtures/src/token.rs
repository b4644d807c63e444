use wiretype::{codec::validate_unboxed, impl_entity, prelude::*};

///
/// Token
///

pub static TOKEN: UnboxedModel = UnboxedModel::new("fixtures::Token", "token", TypeModel::UUID);

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Token(Uuid);

impl Token {
    pub fn new(uuid: Uuid) -> Result<Self, ValidateError> {
        validate_unboxed(&uuid.to_value(), &TOKEN)?;

        Ok(Self(uuid))
    }

    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl Unboxed for Token {
    type Inner = Uuid;

    fn model() -> &'static UnboxedModel {
        &TOKEN
    }

    fn inner(&self) -> &Uuid {
        &self.0
    }

    fn from_inner(inner: Uuid) -> Result<Self, ValidateError> {
        Self::new(inner)
    }
}

impl_entity!(unboxed Token);
