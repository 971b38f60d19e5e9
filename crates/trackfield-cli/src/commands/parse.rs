//! Parse command implementation.

use anyhow::{Context, Result};

use crate::config::Config;

/// Run the parse command
pub fn run(config: &Config, kind: Option<&str>, value: &str) -> Result<()> {
    let kind = config.resolve_kind(kind)?;
    let magnitude = trackfield_core::parse(kind, value)
        .with_context(|| format!("Invalid result data for {}", kind))?;
    println!("{}", magnitude);
    Ok(())
}
