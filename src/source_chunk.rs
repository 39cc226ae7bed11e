/// Chunk of flattened source along with information pointing back at the origin
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SourceChunk {
    /// Source text; always a whole number of `\n`-terminated lines
    pub source: String,

    /// File the code came from, as resolved by the include resolver
    pub file: String,

    /// Line in the `file` at which this snippet starts (0-based)
    pub line_offset: usize,
}

impl SourceChunk {
    pub fn line_count(&self) -> usize {
        self.source.matches('\n').count()
    }
}

/// Maps a 1-based line of the flattened output back to `(file, 1-based line)`.
pub fn locate_line(chunks: &[SourceChunk], flattened_line: usize) -> Option<(&str, usize)> {
    if flattened_line == 0 {
        return None;
    }

    let mut first_line = 1;
    for chunk in chunks {
        let count = chunk.line_count();
        if flattened_line < first_line + count {
            let local = flattened_line - first_line;
            return Some((chunk.file.as_str(), chunk.line_offset + local + 1));
        }
        first_line += count;
    }

    None
}

/// Joins chunks back into the flattened text.
pub fn join_chunks(chunks: &[SourceChunk]) -> String {
    chunks.iter().map(|chunk| chunk.source.as_str()).collect()
}
