//! `keyforge quick`

use super::write_json;
use crate::config::Config;
use crate::output::QuickValue;
use keyforge_common::Result;
use keyforge_key::{GeneratorKind, generate_or_placeholder};
use std::io::Write;

/// One value from every generator; failures print the placeholder
///
/// # Errors
///
/// Returns an error only if output cannot be written.
pub fn handle_quick<W: Write>(config: &Config, use_json: bool, out: &mut W) -> Result<()> {
    let values: Vec<QuickValue> = GeneratorKind::ALL
        .into_iter()
        .map(|kind| QuickValue {
            id: kind.id(),
            name: kind.name(),
            value: generate_or_placeholder(kind, &config.options_for(kind)),
        })
        .collect();

    if use_json {
        return write_json(out, &values);
    }

    for entry in &values {
        writeln!(out, "{:<14} {}", entry.name, entry.value)?;
    }
    Ok(())
}
