//! **glsl-include** flattens shader sources which use a line-based include directive.
//! It is mostly aimed at GLSL, which doesn't provide include directive support out of the box.
//!
//! This crate does not implement a preprocessor. A directive is any line starting with a
//! configurable keyword (`//#include` by default, which keeps unprocessed sources valid GLSL),
//! followed by a quoted path relative to the including file:
//!
//! ```glsl
//! //#include "lib/colors.glsl"
//! void main() {}
//! ```
//!
//! Every other line is copied verbatim. Each file is inlined at most once per call,
//! so include cycles and diamond-shaped include graphs resolve without error.
//!
//! Files are read through an [`IncludeProvider`], which enables virtual file systems
//! and tests without touching the disk.
//!
//! Besides a single string, the output is available as a Vec of [`SourceChunk`],
//! which can be used to map the compiler's errors back to the original code.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), glsl_include::ResolveError> {
//! let mut resolver = glsl_include::IncludeResolver::new("//#include")?;
//! let source = resolver.resolve("shaders/main.frag")?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "compiler_log")]
pub mod compiler_log;

mod error;
mod include_provider;
pub mod path_util;
mod resolver;
mod source_chunk;


#[cfg(feature = "compiler_log")]
pub use compiler_log::remap_compiler_log;
pub use error::ResolveError;
pub use include_provider::{FileIncludeProvider, IncludeProvider, MemoryIncludeProvider};
pub use resolver::{IncludeResolver, Resolved, SkippedInclude, DEFAULT_INCLUDE_KEYWORD};
pub use source_chunk::{join_chunks, locate_line, SourceChunk};
