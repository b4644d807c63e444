//! Unboxed types wrapping one another: `C(B(A(text)))`.

use wiretype::{codec::validate_unboxed, impl_entity, prelude::*};

pub static A_MODEL: UnboxedModel = UnboxedModel::new("fixtures::A", "a", TypeModel::TEXT);
pub static B_MODEL: UnboxedModel =
    UnboxedModel::new("fixtures::B", "b", TypeModel::Unboxed(&A_MODEL));
pub static C_MODEL: UnboxedModel =
    UnboxedModel::new("fixtures::C", "c", TypeModel::Unboxed(&B_MODEL));

// unboxed
macro_rules! unboxed {
    ($name:ident, $model:ident, $inner:ty) => {
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct $name($inner);

        impl $name {
            pub fn new(inner: $inner) -> Result<Self, ValidateError> {
                validate_unboxed(&inner.to_value(), &$model)?;

                Ok(Self(inner))
            }

            #[must_use]
            pub const fn get(&self) -> &$inner {
                &self.0
            }
        }

        impl Unboxed for $name {
            type Inner = $inner;

            fn model() -> &'static UnboxedModel {
                &$model
            }

            fn inner(&self) -> &$inner {
                &self.0
            }

            fn from_inner(inner: $inner) -> Result<Self, ValidateError> {
                Self::new(inner)
            }
        }

        impl_entity!(unboxed $name);
    };
}

unboxed!(A, A_MODEL, String);
unboxed!(B, B_MODEL, A);
unboxed!(C, C_MODEL, B);
