//! bazaar-style CLI library
//!
//! Argument definitions and command implementations for the `bazaar-style`
//! binary.

pub mod cli;
pub mod commands;
