//! Command handlers

pub mod generate;
pub mod list;
pub mod quick;

use keyforge_common::{Error, ErrorKind, Result};
use serde::Serialize;
use std::io::Write;

/// Write `value` as pretty JSON followed by a newline
pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|e| Error::with_source(ErrorKind::Io, e))?;
    writeln!(out)?;
    Ok(())
}
