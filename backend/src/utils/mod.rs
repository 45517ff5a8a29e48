//! Collection of general utility functions.
//!
//! Token signing and password hashing live here so the auth service can stay
//! free of crate-specific plumbing.

pub mod jwt;
pub mod password;
