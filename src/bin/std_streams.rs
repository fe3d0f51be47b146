// Echoes arguments to both standard streams, reads a bounded chunk of
// stdin, and exits with an explicit status code.
use std::env;
use std::io::{self, Read, Write};

const INPUT_CAPACITY: usize = 1024;

/// Reads one chunk of at most `capacity` bytes and decodes it, lossily
/// for any non-UTF-8 tail. The flag reports whether the buffer filled
/// completely, in which case input may have been cut off.
fn bounded_read<R: Read>(input: &mut R, capacity: usize) -> io::Result<(String, bool)> {
    let mut buf = vec![0u8; capacity];
    let n = input.read(&mut buf)?;
    let text = String::from_utf8_lossy(&buf[..n]).trim().to_string();
    Ok((text, n == capacity))
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    println!("Argument 1: {}", args.first().map(String::as_str).unwrap_or(""));
    eprintln!("Argument 2: {}", args.get(1).map(String::as_str).unwrap_or(""));

    print!("Enter input: ");
    io::stdout().flush()?;

    let (input, hit_capacity) = bounded_read(&mut io::stdin(), INPUT_CAPACITY)?;
    if hit_capacity {
        eprintln!("input reached the {} byte limit and may be truncated", INPUT_CAPACITY);
    }
    println!("You entered: {}", input);

    std::process::exit(1);
}
