//! Structural tag extraction for LaTeX documents.
//!
//! Scans a document once and reports its parts, chapters,
//! sections, paragraphs, labels and includes, each with its source
//! location and the chain of sectioning units it sits under.
//!
//! # Quick start
//!
//! ```
//! use textags::{Kind, extract};
//!
//! let tags = extract("\\chapter{Basics}\n\\section{Setup}\n");
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[1].name, "Setup");
//!
//! let scope = tags[1].scope.as_ref().unwrap();
//! assert_eq!(scope.kind, Kind::Chapter);
//! assert_eq!(scope.name, "Basics");
//! ```
//!
//! ## Write a tags file
//!
//! ```
//! use textags::{extract, format_tags};
//!
//! let tags = extract("\\section*{Intro}\\label{sec:intro}");
//! let out = format_tags(&tags, "intro.tex");
//! assert_eq!(out, "Intro\tintro.tex\t1;\"\ts\nsec:intro\tintro.tex\t1;\"\tl\n");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod formatter;
pub mod kind;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod scope;
pub mod tag;
pub mod token;

use std::path::{Path, PathBuf};

pub use formatter::{format_kinds, format_tags, format_xref};
pub use kind::{Kind, KindSet, KindSpecError};
pub use lexer::{Lexer, is_ident_char, tokenize};
pub use options::{EXTENSIONS, Options, is_tex_path};
pub use parser::{extract, extract_with, parse, parse_with_scope};
pub use scope::{SCOPE_SEPARATOR, Scope, ScopeState};
pub use tag::{TagEntry, TagSink};
pub use token::{EndOfInput, Span, Token, TokenKind};

/// Errors from the file and configuration surface. Parsing itself
/// never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An invalid kind spec.
    #[error("{0}")]
    Kinds(#[from] KindSpecError),
}

/// Read a file and extract its tags in one step.
pub fn extract_file(path: &Path, options: &Options) -> Result<Vec<TagEntry>, Error> {
    let content = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_with(&content, options))
}
