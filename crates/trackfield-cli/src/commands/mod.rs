//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod export;
pub mod format;
pub mod kinds;
pub mod mask;
pub mod parse;
