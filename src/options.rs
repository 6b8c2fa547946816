use std::path::Path;

use crate::kind::{Kind, KindSet};

/// File extensions this parser handles.
pub const EXTENSIONS: &[&str] = &["tex"];

/// Whether `path` has one of [`EXTENSIONS`]. Case-sensitive.
#[must_use]
pub fn is_tex_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Kinds that produce tags. Disabled kinds still open and close
    /// scopes.
    pub kinds: KindSet,
}

impl Options {
    /// All kinds enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set of enabled kinds.
    #[must_use]
    pub const fn kinds(mut self, kinds: KindSet) -> Self {
        self.kinds = kinds;
        self
    }

    #[must_use]
    pub const fn enable(mut self, kind: Kind) -> Self {
        self.kinds.insert(kind);
        self
    }

    #[must_use]
    pub const fn disable(mut self, kind: Kind) -> Self {
        self.kinds.remove(kind);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tex_extension() {
        assert!(is_tex_path(Path::new("thesis/main.tex")));
        assert!(!is_tex_path(Path::new("main.TEX")));
        assert!(!is_tex_path(Path::new("main.bib")));
        assert!(!is_tex_path(Path::new("tex")));
    }

    #[test]
    fn builder_toggles_kinds() {
        let opts = Options::new().disable(Kind::Label).disable(Kind::Part).enable(Kind::Part);
        assert!(!opts.kinds.contains(Kind::Label));
        assert!(opts.kinds.contains(Kind::Part));
        assert_eq!(Options::new().kinds(KindSet::empty()).kinds, KindSet::empty());
    }
}
