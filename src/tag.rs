use crate::kind::{Kind, KindSet};
use crate::scope::{Scope, ScopeState};
use crate::token::Span;

/// One emitted structural entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub name: String,
    pub kind: Kind,
    /// Location of the command that introduced the unit.
    pub span: Span,
    pub scope: Option<Scope>,
}

/// Receives completed tag entries.
pub trait TagSink {
    fn accept(&mut self, entry: TagEntry);
}

impl TagSink for Vec<TagEntry> {
    fn accept(&mut self, entry: TagEntry) {
        self.push(entry);
    }
}

/// Builds tag entries and forwards the enabled ones to a sink.
pub(crate) struct Emitter<'s, S: TagSink + ?Sized> {
    sink: &'s mut S,
    kinds: KindSet,
}

impl<'s, S: TagSink + ?Sized> Emitter<'s, S> {
    pub(crate) const fn new(sink: &'s mut S, kinds: KindSet) -> Self {
        Self { sink, kinds }
    }

    /// Emit a tag for a unit of `kind`, scoped by `scope` as it stands
    /// before the unit is recorded.
    pub(crate) fn emit(&mut self, name: &str, kind: Kind, span: Span, scope: &ScopeState) {
        if !self.kinds.contains(kind) {
            return;
        }
        self.sink.accept(TagEntry {
            name: name.to_string(),
            kind,
            span,
            scope: scope.parent_of(kind),
        });
    }
}
