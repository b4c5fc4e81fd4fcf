//! The FLAMES engine.
//!
//! Two names are reduced to a single relationship in three steps:
//!
//! 1. **Normalize**: lowercase each name and drop everything outside `a`-`z`.
//! 2. **Cancel**: strike out one occurrence of every letter the names share.
//!    The number of letters left over across both names is the *count*.
//! 3. **Eliminate**: walk the ring `F L A M E S`, counting `count` symbols
//!    from the cursor and removing the one landed on, until a single
//!    symbol survives.
//!
//! A count of zero (the names cancel completely) is always Friends; the
//! ring is never consulted in that case.
//!
//! ```
//! use flames_rs::{Relationship, compute_relationship};
//!
//! assert_eq!(compute_relationship("Anna", "anna"), Relationship::Friends);
//! assert_eq!(compute_relationship("Alice", "Bob"), Relationship::Affectionate);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One token of the elimination ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    F,
    L,
    A,
    M,
    E,
    S,
}

/// The ring as it stands before the first elimination.
pub const RING: [Symbol; 6] = [
    Symbol::F,
    Symbol::L,
    Symbol::A,
    Symbol::M,
    Symbol::E,
    Symbol::S,
];

impl Symbol {
    /// The uppercase letter this symbol is written as.
    pub fn letter(self) -> char {
        match self {
            Symbol::F => 'F',
            Symbol::L => 'L',
            Symbol::A => 'A',
            Symbol::M => 'M',
            Symbol::E => 'E',
            Symbol::S => 'S',
        }
    }

    /// Parse a ring letter, either case.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'F' => Some(Symbol::F),
            'L' => Some(Symbol::L),
            'A' => Some(Symbol::A),
            'M' => Some(Symbol::M),
            'E' => Some(Symbol::E),
            'S' => Some(Symbol::S),
            _ => None,
        }
    }

    pub fn relationship(self) -> Relationship {
        match self {
            Symbol::F => Relationship::Friends,
            Symbol::L => Relationship::Lovers,
            Symbol::A => Relationship::Affectionate,
            Symbol::M => Relationship::Marriage,
            Symbol::E => Relationship::Enemies,
            Symbol::S => Relationship::Siblings,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The result of a FLAMES reading.
///
/// Serializes as the bare label (`"Lovers"`), which is also what
/// `Display` uses. [`Relationship::label`] adds the emoji. Parsing and
/// deserializing accept either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Relationship {
    Friends,
    Lovers,
    Affectionate,
    Marriage,
    Enemies,
    Siblings,
}

impl Relationship {
    /// Every relationship, in ring order.
    pub const ALL: [Relationship; 6] = [
        Relationship::Friends,
        Relationship::Lovers,
        Relationship::Affectionate,
        Relationship::Marriage,
        Relationship::Enemies,
        Relationship::Siblings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Friends => "Friends",
            Relationship::Lovers => "Lovers",
            Relationship::Affectionate => "Affectionate",
            Relationship::Marriage => "Marriage",
            Relationship::Enemies => "Enemies",
            Relationship::Siblings => "Siblings",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Relationship::Friends => "\u{1F91D}",
            Relationship::Lovers => "\u{2764}\u{FE0F}",
            Relationship::Affectionate => "\u{1F970}",
            Relationship::Marriage => "\u{1F48D}",
            Relationship::Enemies => "\u{1F47F}",
            Relationship::Siblings => "\u{1F9D1}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}",
        }
    }

    /// Display label with emoji, e.g. `"Marriage 💍"`.
    pub fn label(self) -> String {
        format!("{} {}", self.as_str(), self.emoji())
    }

    pub fn symbol(self) -> Symbol {
        match self {
            Relationship::Friends => Symbol::F,
            Relationship::Lovers => Symbol::L,
            Relationship::Affectionate => Symbol::A,
            Relationship::Marriage => Symbol::M,
            Relationship::Enemies => Symbol::E,
            Relationship::Siblings => Symbol::S,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the six labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown relationship: {0}")]
pub struct UnknownRelationship(pub String);

impl FromStr for Relationship {
    type Err = UnknownRelationship;

    /// Accepts `"Marriage"`, `"marriage"` or `"Marriage 💍"`.
    ///
    /// Anything after the word must be free of letters and digits, so a
    /// trailing emoji in any presentation form is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        if rest.chars().any(char::is_alphanumeric) {
            return Err(UnknownRelationship(s.to_string()));
        }
        Relationship::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(word))
            .ok_or_else(|| UnknownRelationship(s.to_string()))
    }
}

impl TryFrom<String> for Relationship {
    type Error = UnknownRelationship;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Everything a reading produces besides the relationship itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Letters of the first name left after cancellation.
    pub remaining_first: String,
    /// Letters of the second name left after cancellation.
    pub remaining_second: String,
    /// Total uncancelled letters; the elimination step size.
    pub count: usize,
    pub relationship: Relationship,
}

/// Lowercase a name and keep only the letters `a` through `z`.
///
/// Characters whose lowercase form is not ASCII (digits, spaces,
/// accented letters) are dropped rather than replaced.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Cross out letters common to both sequences, one occurrence per match.
///
/// Each letter of `first` consumes the earliest unused equal letter of
/// `second` if there is one, and is kept otherwise. Order of the
/// remaining letters is preserved on both sides.
pub fn cancel_common(first: &str, second: &str) -> (String, String) {
    let mut rest_second: Vec<char> = second.chars().collect();
    let mut rest_first = String::with_capacity(first.len());

    for c in first.chars() {
        match rest_second.iter().position(|&other| other == c) {
            Some(idx) => {
                rest_second.remove(idx);
            }
            None => rest_first.push(c),
        }
    }

    (rest_first, rest_second.into_iter().collect())
}

/// Total letters left over after normalizing and cancelling both names.
pub fn flames_count(name1: &str, name2: &str) -> usize {
    let (a, b) = cancel_common(&normalize(name1), &normalize(name2));
    a.len() + b.len()
}

/// Index removed from a ring of `len` symbols, counting `count` from `cursor`.
///
/// `count` and `len` must both be non-zero.
pub(crate) fn removal_index(cursor: usize, count: usize, len: usize) -> usize {
    (cursor + (count - 1) % len) % len
}

/// Run the ring elimination for a given count and return the survivor.
///
/// A count of zero short-circuits to [`Symbol::F`].
pub fn eliminate(count: usize) -> Symbol {
    if count == 0 {
        return Symbol::F;
    }

    let mut ring = RING.to_vec();
    let mut cursor = 0;
    while ring.len() > 1 {
        let idx = removal_index(cursor, count, ring.len());
        ring.remove(idx);
        cursor = idx % ring.len();
    }
    ring[0]
}

/// Compute a full reading for two names.
pub fn compute_outcome(name1: &str, name2: &str) -> Outcome {
    let (remaining_first, remaining_second) = cancel_common(&normalize(name1), &normalize(name2));
    let count = remaining_first.len() + remaining_second.len();
    Outcome {
        remaining_first,
        remaining_second,
        count,
        relationship: eliminate(count).relationship(),
    }
}

/// The FLAMES relationship between two names.
///
/// Total and deterministic: any pair of strings, including empty ones,
/// maps to exactly one of the six relationships.
pub fn compute_relationship(name1: &str, name2: &str) -> Relationship {
    compute_outcome(name1, name2).relationship
}
