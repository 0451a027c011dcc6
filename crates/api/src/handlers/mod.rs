//! Request handlers.
//!
//! Each submodule provides async handler functions for one entity type.
//! Handlers validate required input, delegate to the corresponding
//! repository in `arbor_db`, and map errors via
//! [`ApiError`](crate::error::ApiError).

pub mod branches;
pub mod trees;
pub mod users;
