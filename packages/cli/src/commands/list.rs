//! `keyforge list`

use super::write_json;
use crate::output::GeneratorInfo;
use keyforge_common::Result;
use keyforge_key::GeneratorKind;
use std::io::Write;

/// Print every generator with its defaults
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn handle_list<W: Write>(use_json: bool, out: &mut W) -> Result<()> {
    if use_json {
        let infos: Vec<GeneratorInfo> = GeneratorKind::ALL.into_iter().map(Into::into).collect();
        return write_json(out, &infos);
    }

    for kind in GeneratorKind::ALL {
        writeln!(out, "{:<14} {:<14} {}", kind.id(), kind.name(), kind.description())?;

        let mut details = Vec::new();
        if let Some(range) = kind.length_range() {
            details.push(format!("length {}..={}", range.start(), range.end()));
        }
        let formats = kind.formats();
        if !formats.is_empty() {
            details.push(format!("formats {}", formats.join("|")));
        }
        if !details.is_empty() {
            writeln!(out, "{:<14} {}", "", details.join(", "))?;
        }
    }
    Ok(())
}
