//! Shader compilers only ever see the flattened source, so the line numbers in their
//! logs point into that single string rather than into the files it was built from.
//!
//! `remap_compiler_log` rewrites those references using the `SourceChunk`s returned by
//! `IncludeResolver::resolve_chunks`. Two log dialects are recognized:
//!
//! * `ERROR: 0:12: ...` as printed by glslang, Intel and AMD drivers
//! * `0(12) : error ...` as printed by NVIDIA drivers
//!
//! Each recognized reference becomes `file(line)`. References to lines outside the
//! flattened source are left as they are.
//!
//! ```rust,no_run
//! # fn main() -> Result<(), glsl_include::ResolveError> {
//! let mut resolver = glsl_include::IncludeResolver::new(glsl_include::DEFAULT_INCLUDE_KEYWORD)?;
//! let chunks = resolver.resolve_chunks("shaders/main.frag")?;
//!
//! let log = "ERROR: 0:12: 'foo' : undeclared identifier";
//! println!("{}", glsl_include::remap_compiler_log(&chunks, log));
//! # Ok(())
//! # }
//! ```

use crate::source_chunk::{locate_line, SourceChunk};

lazy_static::lazy_static! {
    static ref INTEL_AMD_ERROR_RE: regex::Regex = regex::Regex::new(r"(?m)^(ERROR|WARNING):\s*(\d+):(\d+)").unwrap();
}

lazy_static::lazy_static! {
    static ref NV_ERROR_RE: regex::Regex = regex::Regex::new(r"(?m)^(\d+)\((\d+)\)").unwrap();
}

/// Rewrites flattened-source line references in `log` to `file(line)`.
pub fn remap_compiler_log(chunks: &[SourceChunk], log: &str) -> String {
    let remap = |line: &str| -> Option<String> {
        let line = line.parse::<usize>().ok()?;
        locate_line(chunks, line).map(|(file, line)| format!("{}({})", file, line))
    };

    let log = INTEL_AMD_ERROR_RE.replace_all(log, |captures: &regex::Captures| {
        match remap(&captures[3]) {
            Some(location) => format!("{}: {}", &captures[1], location),
            None => captures[0].to_owned(),
        }
    });

    NV_ERROR_RE
        .replace_all(&log, |captures: &regex::Captures| {
            remap(&captures[2]).unwrap_or_else(|| captures[0].to_owned())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::remap_compiler_log;
    use crate::SourceChunk;

    fn chunks() -> Vec<SourceChunk> {
        vec![
            SourceChunk {
                source: "vec3 red;\n".to_owned(),
                file: "lib/colors.glsl".to_owned(),
                line_offset: 0,
            },
            SourceChunk {
                source: "\nvoid main() {}\n".to_owned(),
                file: "main.glsl".to_owned(),
                line_offset: 0,
            },
        ]
    }

    #[test]
    fn intel_amd_style() {
        assert_eq!(
            remap_compiler_log(&chunks(), "ERROR: 0:3: 'main' : syntax error"),
            "ERROR: main.glsl(2): 'main' : syntax error"
        );
        assert_eq!(
            remap_compiler_log(&chunks(), "WARNING: 0:1: unused"),
            "WARNING: lib/colors.glsl(1): unused"
        );
    }

    #[test]
    fn nvidia_style() {
        assert_eq!(
            remap_compiler_log(&chunks(), "0(1) : error C0000: syntax error"),
            "lib/colors.glsl(1) : error C0000: syntax error"
        );
    }

    #[test]
    fn out_of_range_lines_untouched() {
        let log = "ERROR: 0:40: oops\n0(0) : error";
        assert_eq!(remap_compiler_log(&chunks(), log), log);
    }
}
