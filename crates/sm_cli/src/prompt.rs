//! Input prompts with malformed-number handling.

use anyhow::Result;
use std::io::BufRead;

use crate::{flush_stdout, read_trimmed_line};

/// Print a prompt and read one trimmed line.
pub fn line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    flush_stdout()?;
    Ok(read_trimmed_line(input)?)
}

/// Print a prompt and read one non-negative integer.
///
/// Returns `None` on malformed input after reporting it; the caller aborts
/// the current operation and re-displays its menu. The user re-issues the
/// command, nothing is retried automatically.
pub fn number<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<u32>> {
    let raw = line(input, prompt)?;
    match raw.parse::<u32>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Invalid input! Please enter a number.");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_number_parses_valid_input() {
        let mut input = Cursor::new("42\n");
        assert_eq!(number(&mut input, "> ").unwrap(), Some(42));
    }

    #[test]
    fn test_number_rejects_garbage() {
        let mut input = Cursor::new("forty-two\n");
        assert_eq!(number(&mut input, "> ").unwrap(), None);
    }

    #[test]
    fn test_number_rejects_negatives() {
        let mut input = Cursor::new("-3\n");
        assert_eq!(number(&mut input, "> ").unwrap(), None);
    }

    #[test]
    fn test_line_trims_whitespace() {
        let mut input = Cursor::new("  Tigers  \n");
        assert_eq!(line(&mut input, "> ").unwrap(), "Tigers");
    }

    #[test]
    fn test_eof_reads_as_exit_choice() {
        let mut input = Cursor::new("");
        assert_eq!(line(&mut input, "> ").unwrap(), "0");
    }
}
