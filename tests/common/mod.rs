#![allow(dead_code)]

use textags::{Kind, TagEntry, extract};

/// Tag as `(kind, name, scope)`, convenient for whole-document
/// assertions.
pub type Summary = (Kind, String, Option<(Kind, String)>);

pub fn summarize(tags: &[TagEntry]) -> Vec<Summary> {
    tags.iter()
        .map(|tag| {
            (
                tag.kind,
                tag.name.clone(),
                tag.scope
                    .as_ref()
                    .map(|scope| (scope.kind, scope.name.clone())),
            )
        })
        .collect()
}

pub fn summary(input: &str) -> Vec<Summary> {
    summarize(&extract(input))
}

pub fn names(input: &str) -> Vec<String> {
    extract(input).into_iter().map(|tag| tag.name).collect()
}

/// Build a composed scope name from its segments.
pub fn path(segments: &[&str]) -> String {
    segments.join(textags::SCOPE_SEPARATOR)
}
