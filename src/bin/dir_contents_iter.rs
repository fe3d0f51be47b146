// Streams the content of every file in a directory, one at a time.
use std::fs;
use std::io;
use std::path::PathBuf;
use std::vec::IntoIter;

/// Lazily yields the text content of each entry in a directory, in
/// directory-listing order. The listing is taken up front; each file is
/// read only when `next()` asks for it.
pub struct DirContents {
    paths: IntoIter<PathBuf>,
}

impl DirContents {
    pub fn open(dir: &str) -> io::Result<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?; // each entry can fail
            paths.push(entry.path());
        }
        Ok(Self {
            paths: paths.into_iter(),
        })
    }
}

impl Iterator for DirContents {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        Some(fs::read_to_string(path))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

fn main() -> io::Result<()> {
    for content in DirContents::open("./testdir")? {
        println!("{}", content?);
    }
    Ok(())
}
