//! Writers that render tag entries as text.
//!
//! Three shapes are supported: ctags tag-file lines, a `ctags -x`
//! style cross reference, and the kind listing.

use std::fmt::Write as _;

use crate::kind::{Kind, KindSet};
use crate::tag::TagEntry;

/// Format tags as tag-file lines, in the given order.
///
/// Each line is `name<TAB>file<TAB>line;"<TAB>letter`, followed by
/// `<TAB>kind:scope` when the tag has a scope.
#[must_use]
pub fn format_tags(tags: &[TagEntry], file: &str) -> String {
    let mut out = String::new();
    for tag in tags {
        let _ = write!(
            out,
            "{}\t{}\t{};\"\t{}",
            escape_field(&tag.name),
            escape_field(file),
            tag.span.line,
            tag.kind.letter()
        );
        if let Some(scope) = &tag.scope {
            let _ = write!(out, "\t{}:{}", scope.kind, escape_field(&scope.name));
        }
        out.push('\n');
    }
    out
}

/// Format tags as a cross reference listing, one line per tag, with
/// the trimmed source line the tag was found on.
#[must_use]
pub fn format_xref(tags: &[TagEntry], file: &str, source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let mut out = String::new();
    for tag in tags {
        let text = tag
            .span
            .line
            .checked_sub(1)
            .and_then(|idx| lines.get(idx))
            .map_or("", |line| line.trim());
        let _ = writeln!(
            out,
            "{:<16} {:<10} {:>4} {:<16} {}",
            escape_field(&tag.name),
            tag.kind,
            tag.span.line,
            file,
            text
        );
    }
    out
}

/// List every kind with its letter and plural label, marking the
/// ones not in `enabled`.
#[must_use]
pub fn format_kinds(enabled: KindSet) -> String {
    let mut out = String::new();
    for kind in Kind::ALL {
        let _ = write!(out, "{}  {}", kind.letter(), kind.plural());
        if !enabled.contains(kind) {
            out.push_str(" [off]");
        }
        out.push('\n');
    }
    out
}

fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for ch in field.chars() {
        match ch {
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
