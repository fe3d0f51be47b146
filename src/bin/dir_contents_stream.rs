// Async variant of directory content streaming.
use std::io;

use futures::{pin_mut, Stream, StreamExt};
use tokio::fs::ReadDir;

/// Turns a directory listing into a lazy stream of file contents. Each
/// element suspends on the read of one file; nothing is read ahead.
fn file_contents(listing: ReadDir) -> impl Stream<Item = io::Result<String>> {
    futures::stream::unfold(listing, |mut listing| async {
        match listing.next_entry().await {
            Ok(Some(entry)) => {
                let content = tokio::fs::read_to_string(entry.path()).await;
                Some((content, listing))
            }
            Ok(None) => None,
            Err(err) => Some((Err(err), listing)),
        }
    })
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let listing = tokio::fs::read_dir("./testdir").await?;
    let stream = file_contents(listing);
    pin_mut!(stream);

    while let Some(content) = stream.next().await {
        println!("{}", content?);
    }
    Ok(())
}
