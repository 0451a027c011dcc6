//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` entity structs matching database rows
//! - Narrow `FromRow` + `Serialize` projection structs returned verbatim
//!   by the read endpoints (serialized under their column names)
//! - `Deserialize` request DTOs (camelCase wire names, `Option` fields
//!   validated by the handlers)

pub mod branch;
pub mod leaf;
pub mod tree;
pub mod user;
