//! Mask command implementation.

use anyhow::Result;
use trackfield_core::{mask_tag, mask_with_cursor};

use crate::config::Config;

/// Run the mask command
///
/// With `--cursor` the kind must resolve, since the clamp depends on the
/// masked shape; without it unknown kinds pass the input through.
pub fn run(config: &Config, kind: Option<&str>, raw: &str, cursor: Option<usize>) -> Result<()> {
    match cursor {
        Some(cursor) => {
            let kind = config.resolve_kind(kind)?;
            let masked = mask_with_cursor(kind, raw, cursor);
            println!("{}\t{}", masked.text, masked.cursor);
        }
        None => println!("{}", mask_tag(config.kind_tag(kind), raw)),
    }
    Ok(())
}
