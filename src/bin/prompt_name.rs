// Prompts for a name with a default and prints the answer.
use std::io::{self, BufRead, Write};

const DEFAULT_NAME: &str = "John Doe";

/// Shows `message` along with its default, then reads one line. A blank
/// line (or closed stdin) accepts the default.
fn ask<R: BufRead>(input: &mut R, message: &str, default: &str) -> io::Result<String> {
    print!("{} ({}): ", message, default);
    io::stdout().flush()?; // flush before reading, or the prompt may not appear

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let name = ask(&mut stdin.lock(), "Enter your name", DEFAULT_NAME)?;
    println!("Name: {}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_answer_is_used() {
        let mut input = Cursor::new("Alice\n");
        let name = ask(&mut input, "Enter your name", DEFAULT_NAME).unwrap();
        assert_eq!(name, "Alice");
    }

    #[test]
    fn test_empty_line_accepts_default() {
        let mut input = Cursor::new("\n");
        let name = ask(&mut input, "Enter your name", DEFAULT_NAME).unwrap();
        assert_eq!(name, "John Doe");
    }

    #[test]
    fn test_closed_input_accepts_default() {
        let mut input = Cursor::new("");
        let name = ask(&mut input, "Enter your name", DEFAULT_NAME).unwrap();
        assert_eq!(name, "John Doe");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let mut input = Cursor::new("  Bob  \n");
        let name = ask(&mut input, "Enter your name", DEFAULT_NAME).unwrap();
        assert_eq!(name, "Bob");
    }
}
