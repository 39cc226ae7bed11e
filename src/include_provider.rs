use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// User-supplied include reader
///
/// Returns the lines of the file at `path`, without line terminators.
/// A missing file must be reported as `io::ErrorKind::NotFound`.
pub trait IncludeProvider {
    fn read_lines(&mut self, path: &str) -> io::Result<Vec<String>>;
}

impl<P: IncludeProvider + ?Sized> IncludeProvider for &mut P {
    fn read_lines(&mut self, path: &str) -> io::Result<Vec<String>> {
        (**self).read_lines(path)
    }
}

/// Reads includes straight from the file system.
///
/// Paths are used as given, i.e. relative paths are relative to the working directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileIncludeProvider;

impl IncludeProvider for FileIncludeProvider {
    fn read_lines(&mut self, path: &str) -> io::Result<Vec<String>> {
        let file = File::open(path)?;
        tracing::trace!(path, "reading include");

        // `lines` strips both "\n" and "\r\n".
        BufReader::new(file).lines().collect()
    }
}

/// Serves includes from memory, keyed by the exact path string.
#[derive(Clone, Debug, Default)]
pub struct MemoryIncludeProvider {
    files: HashMap<String, String>,
}

impl MemoryIncludeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl<P, C> FromIterator<(P, C)> for MemoryIncludeProvider
where
    P: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        MemoryIncludeProvider {
            files: iter
                .into_iter()
                .map(|(path, contents)| (path.into(), contents.into()))
                .collect(),
        }
    }
}

impl IncludeProvider for MemoryIncludeProvider {
    fn read_lines(&mut self, path: &str) -> io::Result<Vec<String>> {
        let contents = self.files.get(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such include: {}", path))
        })?;

        Ok(contents.lines().map(str::to_owned).collect())
    }
}
