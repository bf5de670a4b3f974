// File: src/core/leet.rs
use crate::core::types::TransformationKind;
use rand::seq::SliceRandom;
use rand::Rng;

/// Letters that count as substitution targets when scanning a
/// passphrase, regardless of which table is later applied.
pub const ELIGIBLE_LETTERS: [char; 6] = ['a', 'e', 'i', 'o', 's', 't'];

/// Full substitution table.
fn leet_substitute(c: char) -> Option<char> {
    match c {
        'a' => Some('4'),
        'e' => Some('3'),
        'i' => Some('1'),
        'o' => Some('0'),
        's' => Some('$'),
        't' => Some('7'),
        _ => None,
    }
}

/// Vowel-only table.
fn mini_leet_substitute(c: char) -> Option<char> {
    match c {
        'a' => Some('4'),
        'e' => Some('3'),
        'i' => Some('1'),
        'o' => Some('0'),
        _ => None,
    }
}

/// Char indices of `text` whose case-folded character is a substitution
/// target. Computed over the shared letter set, not per table, so the
/// same position list serves both leet variants.
pub fn eligible_positions(text: &str) -> Vec<usize> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| ELIGIBLE_LETTERS.contains(&c.to_ascii_lowercase()))
        .map(|(i, _)| i)
        .collect()
}

/// Applies a bounded, randomized substitution pass over `text`.
///
/// Candidates are the `eligible_positions` whose lowercased character
/// exists in the table `kind` selects. They are visited in shuffled
/// order and substituted until `max_count` replacements are made. If
/// fewer than `min_count` landed, remaining untransformed candidates
/// are forced until the minimum is met or no candidate is left — the
/// loop is bounded by candidate exhaustion, never by iteration count.
/// A text with no candidate at all comes back unchanged; that is a
/// valid outcome, not an error.
///
/// Lookups are case-insensitive; the replacement is the literal table
/// symbol either way.
pub fn transform<R: Rng>(
    text: &str,
    kind: TransformationKind,
    eligible_positions: &[usize],
    min_count: usize,
    max_count: usize,
    rng: &mut R,
) -> String {
    let table = match kind {
        TransformationKind::Plain => return text.to_string(),
        TransformationKind::MiniLeet => mini_leet_substitute as fn(char) -> Option<char>,
        TransformationKind::Leet => leet_substitute,
    };

    let mut chars: Vec<char> = text.chars().collect();
    let mut candidates: Vec<usize> = eligible_positions
        .iter()
        .copied()
        .filter(|&pos| {
            chars
                .get(pos)
                .map_or(false, |c| table(c.to_ascii_lowercase()).is_some())
        })
        .collect();
    candidates.shuffle(rng);

    let mut applied = 0;
    let mut untransformed = Vec::new();
    for pos in candidates {
        if applied >= max_count {
            untransformed.push(pos);
            continue;
        }
        if let Some(substitute) = table(chars[pos].to_ascii_lowercase()) {
            chars[pos] = substitute;
            applied += 1;
        }
    }

    while applied < min_count {
        let Some(pos) = untransformed.pop() else {
            break;
        };
        if let Some(substitute) = table(chars[pos].to_ascii_lowercase()) {
            chars[pos] = substitute;
            applied += 1;
        }
    }

    chars.into_iter().collect()
}
