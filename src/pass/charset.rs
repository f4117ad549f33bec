//! Character classes and the pool passwords are drawn from.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

const NUMBERS: &str = "0123456789";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SPECIAL: &str = "!@#$%^&*()_+?><:{}[]-.,";

static STANDARD: LazyLock<CharacterPool> = LazyLock::new(|| {
    CharacterPool::new(ClassKind::ALL.map(|kind| CharacterClass::new(kind, kind.standard_chars())))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassKind {
    Numbers,
    Lowercase,
    Uppercase,
    Special,
}

impl ClassKind {
    pub const ALL: [ClassKind; 4] = [
        ClassKind::Numbers,
        ClassKind::Lowercase,
        ClassKind::Uppercase,
        ClassKind::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ClassKind::Numbers => "numbers",
            ClassKind::Lowercase => "lowercase",
            ClassKind::Uppercase => "uppercase",
            ClassKind::Special => "special",
        }
    }

    fn standard_chars(self) -> &'static str {
        match self {
            ClassKind::Numbers => NUMBERS,
            ClassKind::Lowercase => LOWERCASE,
            ClassKind::Uppercase => UPPERCASE,
            ClassKind::Special => SPECIAL,
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable, de-duplicated set of characters with a fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    kind: ClassKind,
    chars: Vec<char>,
}

impl CharacterClass {
    /// Repeated characters in `chars` are kept once, at their first position.
    pub fn new(kind: ClassKind, chars: &str) -> Self {
        let mut seen = BTreeSet::new();
        let chars = chars.chars().filter(|c| seen.insert(*c)).collect();
        Self { kind, chars }
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// The four classes in rotation order: numbers, lowercase, uppercase, special.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    classes: [CharacterClass; 4],
}

impl CharacterPool {
    /// Pools built here are not validated; the builder rejects empty classes.
    pub fn new(classes: [CharacterClass; 4]) -> Self {
        Self { classes }
    }

    /// Digits, ASCII letters and 23 symbols. Capacity 85.
    pub fn standard() -> &'static CharacterPool {
        &STANDARD
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    /// Every distinct character across all classes.
    pub fn unique_chars(&self) -> BTreeSet<char> {
        self.classes
            .iter()
            .flat_map(|class| class.chars().iter().copied())
            .collect()
    }

    /// Longest password the pool can supply without repeating a character.
    pub fn capacity(&self) -> usize {
        self.unique_chars().len()
    }
}
