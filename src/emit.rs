//! Result emitter.
//!
//! Serializes the envelope to one line of JSON and writes it with a single
//! `write_all`, so a reader never sees a partial object.

use std::io::Write;

use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::result::OutputEnvelope;

/// Serialize `envelope` as compact JSON terminated by `\n`.
pub fn to_json_line(envelope: &OutputEnvelope) -> Result<String> {
    let mut line = serde_json::to_string(envelope)?;
    line.push('\n');
    Ok(line)
}

/// Write `envelope` to `out` as one JSON line and flush.
#[instrument(skip_all)]
pub fn write_envelope<W: Write>(out: &mut W, envelope: &OutputEnvelope) -> Result<()> {
    let line = to_json_line(envelope)?;
    out.write_all(line.as_bytes()).map_err(Error::Write)?;
    out.flush().map_err(Error::Write)?;
    debug!(bytes = line.len(), "emitted envelope");
    Ok(())
}
