//! Domain logic for the arbor backend.
//!
//! Pure, I/O-free building blocks shared by the db and api crates:
//! the shared ID/timestamp types, the domain error enum, and the codecs
//! for the two serialized list columns (`trees.branch_order` and
//! `users.branch_pool`).

pub mod error;
pub mod order;
pub mod pool;
pub mod tree;
pub mod types;
