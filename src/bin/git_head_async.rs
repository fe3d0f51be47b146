// Async variant of the captured-subprocess example.
use std::io;

use tokio::process::Command;

async fn capture_stdout(program: &str, args: &[&str]) -> io::Result<String> {
    let output = Command::new(program).args(args).output().await?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let head = capture_stdout("git", &["rev-parse", "HEAD"]).await?;
    println!("Output: {}", head);
    Ok(())
}
