use indexmap::IndexSet;

use crate::include_provider::{FileIncludeProvider, IncludeProvider};
use crate::path_util::{collapse_dot_components, join_include};
use crate::{ResolveError, SourceChunk};

/// Keyword used by `IncludeResolver::default()`.
pub const DEFAULT_INCLUDE_KEYWORD: &str = "//#include";

/// An include directive which was not expanded because its target was already inlined.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SkippedInclude {
    /// File containing the directive
    pub file: String,

    /// 1-based line of the directive in `file`
    pub line: usize,

    /// Resolved path of the include target
    pub path: String,
}

/// Outcome of a successful resolution, including diagnostics.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Resolved {
    /// The flattened text
    pub source: String,

    /// `source`, split by the file each run of lines came from
    pub chunks: Vec<SourceChunk>,

    /// Every file pulled into `source`, in inclusion order; the top-level file comes first
    pub visited: Vec<String>,

    /// Directives that were suppressed as duplicates or cycles
    pub skipped: Vec<SkippedInclude>,
}

/// Expands include directives of the form `<keyword> "relative/path"`.
///
/// The keyword must start the line. Paths are resolved against the directory
/// of the file containing the directive. Each file is inlined at most once per
/// `resolve` call; later directives naming an already inlined file are dropped.
pub struct IncludeResolver<P = FileIncludeProvider> {
    keyword: String,
    provider: P,
}

impl IncludeResolver<FileIncludeProvider> {
    /// Resolver reading from the file system.
    pub fn new(keyword: impl Into<String>) -> Result<Self, ResolveError> {
        Self::with_provider(keyword, FileIncludeProvider)
    }
}

impl Default for IncludeResolver<FileIncludeProvider> {
    fn default() -> Self {
        IncludeResolver {
            keyword: DEFAULT_INCLUDE_KEYWORD.to_owned(),
            provider: FileIncludeProvider,
        }
    }
}

impl<P: IncludeProvider> IncludeResolver<P> {
    pub fn with_provider(keyword: impl Into<String>, provider: P) -> Result<Self, ResolveError> {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return Err(ResolveError::EmptyKeyword);
        }

        Ok(IncludeResolver { keyword, provider })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Flattens `file_path` and everything it includes into a single string.
    pub fn resolve(&mut self, file_path: &str) -> Result<String, ResolveError> {
        self.resolve_with_report(file_path)
            .map(|resolved| resolved.source)
    }

    /// Like `resolve`, but keeps the output split by originating file.
    pub fn resolve_chunks(&mut self, file_path: &str) -> Result<Vec<SourceChunk>, ResolveError> {
        self.resolve_with_report(file_path)
            .map(|resolved| resolved.chunks)
    }

    /// Like `resolve`, additionally reporting which files were inlined and
    /// which directives were skipped.
    pub fn resolve_with_report(&mut self, file_path: &str) -> Result<Resolved, ResolveError> {
        let mut session = ResolutionSession::new(file_path);
        let chunks = {
            let mut scanner = Scanner::new(&self.keyword, &mut self.provider, &mut session);
            scanner.process_file(file_path)?;
            scanner.chunks
        };

        Ok(Resolved {
            source: crate::source_chunk::join_chunks(&chunks),
            chunks,
            visited: session.visited.into_iter().collect(),
            skipped: session.skipped,
        })
    }
}

/// State shared by all recursion levels of a single top-level call.
struct ResolutionSession {
    visited: IndexSet<String>,
    skipped: Vec<SkippedInclude>,
}

impl ResolutionSession {
    fn new(top_level: &str) -> Self {
        let mut visited = IndexSet::new();
        visited.insert(collapse_dot_components(top_level));

        ResolutionSession {
            visited,
            skipped: Vec::new(),
        }
    }
}

struct Scanner<'a, 'b, 'c, P> {
    keyword: &'a str,
    provider: &'b mut P,
    session: &'c mut ResolutionSession,
    chunks: Vec<SourceChunk>,
}

impl<'a, 'b, 'c, P: IncludeProvider> Scanner<'a, 'b, 'c, P> {
    fn new(keyword: &'a str, provider: &'b mut P, session: &'c mut ResolutionSession) -> Self {
        Scanner {
            keyword,
            provider,
            session,
            chunks: Vec::new(),
        }
    }

    fn process_file(&mut self, file_path: &str) -> Result<(), ResolveError> {
        let lines = self
            .provider
            .read_lines(file_path)
            .map_err(|e| ResolveError::from_io(file_path, e))?;

        // Included paths are already collapsed; only the top-level one may differ.
        let this_file = collapse_dot_components(file_path);
        let mut current_chunk = PendingChunk::new(file_path);

        for (idx, line) in lines.iter().enumerate() {
            let line_no = idx + 1;

            let rest = match line.strip_prefix(self.keyword) {
                Some(rest) => rest,
                None => {
                    current_chunk.push_line(line_no, line);
                    continue;
                }
            };

            let quoted_path =
                first_quoted(rest).ok_or_else(|| ResolveError::MalformedDirective {
                    file: file_path.to_owned(),
                    line: line_no,
                    text: line.clone(),
                })?;

            let full_include_path = join_include(file_path, quoted_path);

            if full_include_path == this_file {
                return Err(ResolveError::SelfInclude {
                    file: file_path.to_owned(),
                });
            }

            // Either way the directive line itself is not copied, so the chunk ends here.
            current_chunk.flush_into(&mut self.chunks);

            if self.session.visited.contains(&full_include_path) {
                tracing::debug!(
                    include = %full_include_path,
                    from = file_path,
                    line = line_no,
                    "skipping already included file"
                );
                self.session.skipped.push(SkippedInclude {
                    file: file_path.to_owned(),
                    line: line_no,
                    path: full_include_path,
                });
                continue;
            }

            tracing::debug!(
                include = %full_include_path,
                from = file_path,
                line = line_no,
                "inlining include"
            );
            self.session.visited.insert(full_include_path.clone());
            self.process_file(&full_include_path)?;

            // The newline after the inlined text stands in for the directive line.
            current_chunk.push_line(line_no, "");
        }

        current_chunk.flush_into(&mut self.chunks);
        Ok(())
    }
}

/// Text between the first `"` and the one after it.
fn first_quoted(s: &str) -> Option<&str> {
    let start = s.find('"')? + 1;
    let len = s[start..].find('"')?;
    Some(&s[start..start + len])
}

struct PendingChunk<'a> {
    file: &'a str,
    source: String,
    first_line: usize,
}

impl<'a> PendingChunk<'a> {
    fn new(file: &'a str) -> Self {
        PendingChunk {
            file,
            source: String::new(),
            first_line: 1,
        }
    }

    fn push_line(&mut self, line_no: usize, line: &str) {
        if self.source.is_empty() {
            self.first_line = line_no;
        }
        self.source.push_str(line);
        self.source.push('\n');
    }

    fn flush_into(&mut self, chunks: &mut Vec<SourceChunk>) {
        if !self.source.is_empty() {
            chunks.push(SourceChunk {
                source: std::mem::take(&mut self.source),
                file: self.file.to_owned(),
                line_offset: self.first_line - 1,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::first_quoted;

    #[test]
    fn quoted_path_extraction() {
        assert_eq!(first_quoted(r#" "lib/a.glsl""#), Some("lib/a.glsl"));
        assert_eq!(first_quoted(r#""a.glsl" // "b.glsl""#), Some("a.glsl"));
        assert_eq!(first_quoted(r#" <a.glsl> "b.glsl""#), Some("b.glsl"));
        assert_eq!(first_quoted(r#" """#), Some(""));
        assert_eq!(first_quoted(r#" "a.glsl"#), None);
        assert_eq!(first_quoted(" a.glsl"), None);
    }
}
