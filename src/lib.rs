//! Folio application library
//!
//! Feature modules and helpers for the synthetic book catalogue service.
//! The binary in `main.rs` and `folio-cli` both build on this crate.

pub mod modules;
pub mod utils;

pub use modules::register_all;
