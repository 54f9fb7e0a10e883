//! Write command reports as pretty JSON.

use std::io::Write;

use serde::Serialize;

use crate::CliError;

pub(crate) fn write_json<T>(writer: &mut dyn Write, report: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
