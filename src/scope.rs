use crate::kind::Kind;

/// Joins the segments of a composed scope name. Chosen because it
/// practically never occurs in LaTeX prose.
pub const SCOPE_SEPARATOR: &str = "\"\"";

/// Kinds that may enclose another unit, shallowest first.
const ANCESTORS: [Kind; 4] = [Kind::Part, Kind::Chapter, Kind::Section, Kind::Subsection];

/// Enclosing scope of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Deepest open ancestor.
    pub kind: Kind,
    /// Every open ancestor name, shallowest first, joined with
    /// [`SCOPE_SEPARATOR`].
    pub name: String,
}

/// Most recent name recorded at each sectioning level.
///
/// One value per parse run. Recording a level clears every deeper
/// level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeState {
    slots: [String; 5],
}

impl ScopeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name recorded for `kind`, if it has a slot and it is non-empty.
    #[must_use]
    pub fn get(&self, kind: Kind) -> Option<&str> {
        kind.slot()
            .map(|slot| self.slots[slot].as_str())
            .filter(|name| !name.is_empty())
    }

    /// Scope a new unit of `kind` would be placed in.
    ///
    /// Must be queried before [`record`](Self::record) for the same
    /// unit. Labels and includes never get a scope.
    #[must_use]
    pub fn parent_of(&self, kind: Kind) -> Option<Scope> {
        if !kind.takes_scope() {
            return None;
        }

        let open: Vec<(Kind, &str)> = ANCESTORS
            .into_iter()
            .filter(|ancestor| *ancestor < kind)
            .filter_map(|ancestor| self.get(ancestor).map(|name| (ancestor, name)))
            .collect();

        let (deepest, _) = *open.last()?;
        let name = open
            .iter()
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(SCOPE_SEPARATOR);

        Some(Scope {
            kind: deepest,
            name,
        })
    }

    /// Record `name` as the latest unit of `kind` and close every
    /// deeper level. An empty name still closes the deeper levels.
    /// Kinds without a slot are ignored.
    pub fn record(&mut self, kind: Kind, name: &str) {
        let Some(slot) = kind.slot() else {
            return;
        };
        name.clone_into(&mut self.slots[slot]);
        for deeper in &mut self.slots[slot + 1..] {
            deeper.clear();
        }
    }

    /// Forget everything, as at the start of a document.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_no_parent() {
        let state = ScopeState::new();
        assert_eq!(state.parent_of(Kind::Section), None);
        assert_eq!(state.parent_of(Kind::Part), None);
    }

    #[test]
    fn deepest_ancestor_is_parent_kind() {
        let mut state = ScopeState::new();
        state.record(Kind::Part, "I");
        state.record(Kind::Chapter, "A");
        state.record(Kind::Section, "B");
        let scope = state.parent_of(Kind::Subsection).expect("scope");
        assert_eq!(scope.kind, Kind::Section);
        assert_eq!(scope.name, "I\"\"A\"\"B");
    }

    #[test]
    fn gaps_are_skipped() {
        let mut state = ScopeState::new();
        state.record(Kind::Part, "I");
        state.record(Kind::Section, "B");
        let scope = state.parent_of(Kind::Paragraph).expect("scope");
        assert_eq!(scope.kind, Kind::Section);
        assert_eq!(scope.name, "I\"\"B");
    }

    #[test]
    fn own_level_is_not_an_ancestor() {
        let mut state = ScopeState::new();
        state.record(Kind::Chapter, "A");
        assert_eq!(state.parent_of(Kind::Chapter), None);
        assert_eq!(state.parent_of(Kind::Part), None);
    }

    #[test]
    fn subsubsection_never_encloses() {
        let mut state = ScopeState::new();
        state.record(Kind::Subsubsection, "X");
        assert_eq!(state.get(Kind::Subsubsection), Some("X"));
        assert_eq!(state.parent_of(Kind::Paragraph), None);
    }

    #[test]
    fn labels_and_includes_have_no_scope() {
        let mut state = ScopeState::new();
        state.record(Kind::Chapter, "A");
        assert_eq!(state.parent_of(Kind::Label), None);
        assert_eq!(state.parent_of(Kind::Include), None);
    }

    #[test]
    fn record_clears_deeper_levels() {
        let mut state = ScopeState::new();
        state.record(Kind::Chapter, "A");
        state.record(Kind::Section, "B");
        state.record(Kind::Subsubsection, "C");
        state.record(Kind::Chapter, "D");
        assert_eq!(state.get(Kind::Chapter), Some("D"));
        assert_eq!(state.get(Kind::Section), None);
        assert_eq!(state.get(Kind::Subsubsection), None);
    }

    #[test]
    fn empty_record_still_clears() {
        let mut state = ScopeState::new();
        state.record(Kind::Section, "B");
        state.record(Kind::Subsection, "C");
        state.record(Kind::Section, "");
        assert_eq!(state.get(Kind::Section), None);
        assert_eq!(state.get(Kind::Subsection), None);
    }

    #[test]
    fn leaves_do_not_touch_state() {
        let mut state = ScopeState::new();
        state.record(Kind::Section, "B");
        state.record(Kind::Label, "x");
        state.record(Kind::Paragraph, "y");
        assert_eq!(state.get(Kind::Section), Some("B"));
    }

    #[test]
    fn reset_forgets_everything() {
        let mut state = ScopeState::new();
        state.record(Kind::Part, "I");
        state.reset();
        assert_eq!(state, ScopeState::new());
    }
}
