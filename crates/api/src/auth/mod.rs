//! Token handling for caller authentication.

pub mod jwt;
