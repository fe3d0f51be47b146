// Prints the commit id of HEAD via a captured subprocess.
use std::io;
use std::process::Command;

// Waits for completion and captures all output. The child's exit status
// and stderr are not inspected; only stdout is of interest here.
fn capture_stdout(program: &str, args: &[&str]) -> io::Result<String> {
    let output = Command::new(program).args(args).output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() -> io::Result<()> {
    let head = capture_stdout("git", &["rev-parse", "HEAD"])?;
    println!("Output: {}", head);
    Ok(())
}
