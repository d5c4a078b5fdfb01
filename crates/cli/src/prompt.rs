//! Interactive confirmation.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question. Anything but `y` or `yes` counts as no.
pub fn confirm(question: &str, mut input: impl BufRead, mut output: impl Write) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
