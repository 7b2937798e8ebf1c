//! gatewave CLI library.
//!
//! Input loading and the command implementations behind the `gatewave`
//! binary.

pub mod commands;
pub mod input;
