use std::fmt;

/// Structural level of a tag, ordered from shallowest to deepest.
///
/// Only `Part` through `Subsection` ever act as an enclosing scope;
/// `Label` and `Include` are always scope-less leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Part,
    Chapter,
    Section,
    Subsection,
    Subsubsection,
    Paragraph,
    Subparagraph,
    Label,
    Include,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Part,
        Self::Chapter,
        Self::Section,
        Self::Subsection,
        Self::Subsubsection,
        Self::Paragraph,
        Self::Subparagraph,
        Self::Label,
        Self::Include,
    ];

    /// Look up a command name (without backslash) in the keyword
    /// table. Case-exact.
    #[must_use]
    pub fn from_keyword(name: &str) -> Option<Self> {
        Self::from_name(name)
    }

    /// Kind with the given long name (`"section"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Kind with the given single-letter code (`'s'`).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.letter() == letter)
    }

    /// Single-letter code used in tag files.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Part => 'p',
            Self::Chapter => 'c',
            Self::Section => 's',
            Self::Subsection => 'u',
            Self::Subsubsection => 'b',
            Self::Paragraph => 'P',
            Self::Subparagraph => 'G',
            Self::Label => 'l',
            Self::Include => 'i',
        }
    }

    /// Long name, identical to the command that introduces it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Subsection => "subsection",
            Self::Subsubsection => "subsubsection",
            Self::Paragraph => "paragraph",
            Self::Subparagraph => "subparagraph",
            Self::Label => "label",
            Self::Include => "include",
        }
    }

    /// Plural display label.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Part => "parts",
            Self::Chapter => "chapters",
            Self::Section => "sections",
            Self::Subsection => "subsections",
            Self::Subsubsection => "subsubsections",
            Self::Paragraph => "paragraphs",
            Self::Subparagraph => "subparagraphs",
            Self::Label => "labels",
            Self::Include => "includes",
        }
    }

    /// Whether this kind can be attributed an enclosing scope.
    #[must_use]
    pub const fn takes_scope(self) -> bool {
        !matches!(self, Self::Label | Self::Include)
    }

    /// Index of the scope slot this kind records into, if any.
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        match self {
            Self::Part => Some(0),
            Self::Chapter => Some(1),
            Self::Section => Some(2),
            Self::Subsection => Some(3),
            Self::Subsubsection => Some(4),
            _ => None,
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Classifies a kind-spec error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindSpecError {
    /// Letter that names no kind.
    #[error("unknown kind letter: {0}")]
    UnknownLetter(char),
    /// `{name}` that names no kind.
    #[error("unknown kind name: {0}")]
    UnknownName(String),
    /// `{` without a closing `}`.
    #[error("unterminated kind name: {{{0}")]
    UnterminatedName(String),
}

/// Set of enabled kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindSet(u16);

impl KindSet {
    /// No kinds.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every kind.
    #[must_use]
    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < Kind::ALL.len() {
            bits |= Kind::ALL[i].bit();
            i += 1;
        }
        Self(bits)
    }

    #[must_use]
    pub const fn contains(self, kind: Kind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn insert(&mut self, kind: Kind) {
        self.0 |= kind.bit();
    }

    pub const fn remove(&mut self, kind: Kind) {
        self.0 &= !kind.bit();
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled kinds in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Kind> {
        Kind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }

    /// Parse a ctags-style kind spec.
    ///
    /// A bare list (`"csl"`) replaces the set. `+x` and `-x` edit
    /// the current set, which starts with every kind enabled. `*`
    /// stands for all kinds and `{name}` names a kind by its long
    /// name.
    ///
    /// # Errors
    ///
    /// Returns `KindSpecError` on unknown letters or names, or on an
    /// unterminated `{name}`.
    pub fn from_spec(spec: &str) -> Result<Self, KindSpecError> {
        let mut set = if spec.starts_with(['+', '-']) {
            Self::all()
        } else {
            Self::empty()
        };
        let mut adding = true;
        let mut chars = spec.chars();

        while let Some(ch) = chars.next() {
            let kinds = match ch {
                '+' => {
                    adding = true;
                    continue;
                }
                '-' => {
                    adding = false;
                    continue;
                }
                '*' => Self::all(),
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(KindSpecError::UnterminatedName(name)),
                        }
                    }
                    let kind = Kind::from_name(&name).ok_or(KindSpecError::UnknownName(name))?;
                    Self(kind.bit())
                }
                letter => {
                    let kind =
                        Kind::from_letter(letter).ok_or(KindSpecError::UnknownLetter(letter))?;
                    Self(kind.bit())
                }
            };
            if adding {
                set.0 |= kinds.0;
            } else {
                set.0 &= !kinds.0;
            }
        }

        Ok(set)
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Kind> for KindSet {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        let mut set = Self::empty();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}
