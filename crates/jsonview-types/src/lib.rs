//! Value model shared by the jsonview widget crates.

mod value;

pub use value::{FuncValue, JsonValue, TypeTag};
