//! Primitive value types that need stronger guarantees than their std
//! counterparts. Everything else (decimals, uuids, dates) is used as-is from
//! its crate.

mod float;

pub use float::{Float64, NonFiniteFloat};

// re-exports
pub use chrono::{DateTime, NaiveDate, Utc};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
