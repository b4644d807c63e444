use derive_more::Display;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// Float64
///
/// Payload of the `Float` primitive. NaN and the infinities have no JSON
/// encoding, so they are rejected at construction; `-0.0` is folded into
/// `0.0` so that equal floats hash equal inside sets and map keys.
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display)]
pub struct Float64(f64);

impl Float64 {
    pub const ZERO: Self = Self(0.0);

    /// `None` for NaN or infinite input.
    #[must_use]
    pub fn try_new(v: f64) -> Option<Self> {
        v.is_finite().then_some(Self(v + 0.0))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

///
/// NonFiniteFloat
///

#[derive(Clone, Copy, Debug, PartialEq, ThisError)]
#[error("{0} is not a finite float")]
pub struct NonFiniteFloat(pub f64);

impl TryFrom<f64> for Float64 {
    type Error = NonFiniteFloat;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v).ok_or(NonFiniteFloat(v))
    }
}

impl From<i32> for Float64 {
    fn from(n: i32) -> Self {
        Self(f64::from(n))
    }
}

impl From<Float64> for f64 {
    fn from(x: Float64) -> Self {
        x.get()
    }
}

// Sound because NaN is unrepresentable and -0.0 is normalized.
impl Eq for Float64 {}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///
/// TESTS
///
