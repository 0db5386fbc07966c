//! Interactive input collection.
//!
//! Reads `start`, `target` and `tests` one line at a time. The first answer
//! that does not parse aborts the round: an error line is printed and all
//! three are asked again. Only well-formed inputs ever reach the search
//! layer.

use std::io::{self, BufRead, Write};

use crate::config::TrialInputs;

pub const START_PROMPT: &str = "Enter the start number: ";
pub const TARGET_PROMPT: &str = "Enter the target number: ";
pub const TESTS_PROMPT: &str = "Enter the number of trials: ";
pub const RETRY_MESSAGE: &str = "Some of the input was not a valid integer. Please try again.";
pub const WAIT_PROMPT: &str = "Press [Enter] to exit...";

/// Ask for the three inputs until one full round parses.
///
/// `start` and `target` accept any non-negative integer; `tests` must be at
/// least 1. Range checks beyond that (digit count, maximum state) belong to
/// the search layer.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails, or
/// [`io::ErrorKind::UnexpectedEof`] if input ends before a round completes.
pub fn collect_inputs<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<TrialInputs> {
    loop {
        if let Some(inputs) = ask_round(reader, writer)? {
            return Ok(inputs);
        }
        writeln!(writer, "{RETRY_MESSAGE}")?;
    }
}

fn ask_round<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<TrialInputs>> {
    let Some(start) = ask::<u64, _, _>(reader, writer, START_PROMPT)? else {
        return Ok(None);
    };
    let Some(target) = ask::<u64, _, _>(reader, writer, TARGET_PROMPT)? else {
        return Ok(None);
    };
    let Some(tests) = ask::<usize, _, _>(reader, writer, TESTS_PROMPT)? else {
        return Ok(None);
    };
    if tests == 0 {
        return Ok(None);
    }
    Ok(Some(TrialInputs {
        start,
        target,
        tests,
    }))
}

fn ask<T, R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;
    let line = read_line(reader)?;
    Ok(line.trim().parse().ok())
}

fn read_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before all values were entered",
        ));
    }
    Ok(line)
}

/// Print the exit prompt and block until a line (or EOF) arrives.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn wait_for_enter<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<()> {
    write!(writer, "{WAIT_PROMPT}")?;
    writer.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}
