//! Kinds command implementation.

use anyhow::Result;
use strum::IntoEnumIterator;
use trackfield_core::ResultKind;

/// Run the kinds command
pub fn run() -> Result<()> {
    for kind in ResultKind::iter() {
        println!("{:<10}{:<24}{}", kind.tag(), kind.unit(), kind.format_hint());
    }
    Ok(())
}
