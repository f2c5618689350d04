//! Line-oriented prompting
//!
//! Reads one line per prompt. End of input is reported as `None` so the shell
//! can wind down instead of spinning on an empty stream.

use std::io::{BufRead, Write};

use crate::error::TrackerResult;

/// Write `prompt`, flush, and read one line without its line ending
///
/// Returns `None` at end of input. Leading and trailing spaces are kept;
/// free-text fields are stored exactly as typed.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> TrackerResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(Some(line))
}
