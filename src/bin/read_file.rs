// Reads a single text file and prints it.
use std::io;

// Returns Err if the file is missing, unreadable, or not valid UTF-8
async fn read_file(path: &str) -> io::Result<String> {
    tokio::fs::read_to_string(path).await
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let data = read_file("example.txt").await?;
    println!("{}", data);
    Ok(())
}
