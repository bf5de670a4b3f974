// src/core/types.rs

/// A part-of-speech bucket that a pattern symbol selects words from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Adjective,
    Verb,
    Noun,
    PluralNoun,
}

impl WordCategory {
    pub const ALL: [WordCategory; 4] = [
        WordCategory::Adjective,
        WordCategory::Verb,
        WordCategory::Noun,
        WordCategory::PluralNoun,
    ];

    /// Maps a pattern symbol to its category. Anything outside `AVNP`
    /// is not a category and passes through the pattern literally.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(WordCategory::Adjective),
            'V' => Some(WordCategory::Verb),
            'N' => Some(WordCategory::Noun),
            'P' => Some(WordCategory::PluralNoun),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            WordCategory::Adjective => 'A',
            WordCategory::Verb => 'V',
            WordCategory::Noun => 'N',
            WordCategory::PluralNoun => 'P',
        }
    }

}

/// Which substitution table `transform` applies, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformationKind {
    /// No substitution; input is returned unchanged.
    Plain,
    /// Vowels only: a, e, i, o.
    MiniLeet,
    /// Full table: a, e, i, o, s, t.
    Leet,
}

impl TransformationKind {
    pub const ALL: [TransformationKind; 3] = [
        TransformationKind::Plain,
        TransformationKind::MiniLeet,
        TransformationKind::Leet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransformationKind::Plain => "plain",
            TransformationKind::MiniLeet => "miniLeet",
            TransformationKind::Leet => "leet",
        }
    }

    /// Parses the configuration-surface name ("plain", "miniLeet", "leet").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(TransformationKind::Plain),
            "miniLeet" => Some(TransformationKind::MiniLeet),
            "leet" => Some(TransformationKind::Leet),
            _ => None,
        }
    }
}

/// The four category word lists the engine draws from.
///
/// Treated as immutable by the engine: each `compose` call works on a
/// private copy, so consumption never leaks across calls. Duplicates in
/// a list are allowed and irrelevant.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    lists: [Vec<String>; 4],
}

impl WordBank {
    pub fn new(
        adjectives: Vec<String>,
        verbs: Vec<String>,
        nouns: Vec<String>,
        plurals: Vec<String>,
    ) -> Self {
        Self {
            lists: [adjectives, verbs, nouns, plurals],
        }
    }

    pub fn words(&self, category: WordCategory) -> &[String] {
        &self.lists[category as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(|list| list.is_empty())
    }
}
