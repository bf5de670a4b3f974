use crate::core::config::{ConfigError, GenerationConfig};
use crate::core::leet;
use crate::core::types::{WordBank, WordCategory};
use rand::Rng;

/// Separators a passphrase's tokens are joined with; one is picked
/// uniformly per passphrase.
const SEPARATORS: [char; 4] = ['~', '-', '_', '.'];

/// Composes passphrases from a word bank.
///
/// The bank is read-only: every `compose` call consumes a private copy
/// of each category, so repeating a category symbol in the pattern can
/// never select the same word twice within one passphrase, and one call
/// never affects the next.
pub struct PassphraseEngine {
    bank: WordBank,
}

impl PassphraseEngine {
    pub fn new(bank: WordBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Produces one passphrase for `config`.
    ///
    /// Each pattern symbol resolves left to right: a category symbol
    /// with words remaining draws one uniformly without replacement and
    /// capitalizes its first letter on a coin flip; an exhausted
    /// category or unrecognized symbol renders as the literal symbol.
    /// Tokens are joined with a random separator, then handed to the
    /// leet pass under the config's substitution bounds.
    pub fn compose<R: Rng>(&self, config: &GenerationConfig, rng: &mut R) -> String {
        let mut remaining: Vec<Vec<&str>> = WordCategory::ALL
            .iter()
            .map(|&category| {
                self.bank
                    .words(category)
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .collect();

        let separator = SEPARATORS[rng.gen_range(0..SEPARATORS.len())];
        let mut tokens: Vec<String> = Vec::with_capacity(config.pattern.chars().count());

        for symbol in config.pattern.chars() {
            let pool = WordCategory::from_symbol(symbol)
                .map(|category| &mut remaining[category as usize])
                .filter(|pool| !pool.is_empty());
            match pool {
                Some(pool) => {
                    let word = pool.swap_remove(rng.gen_range(0..pool.len()));
                    if rng.gen_bool(0.5) {
                        tokens.push(capitalize_first(word));
                    } else {
                        tokens.push(word.to_string());
                    }
                }
                None => tokens.push(symbol.to_string()),
            }
        }

        let plain = tokens.join(&separator.to_string());
        let positions = leet::eligible_positions(&plain);
        leet::transform(
            &plain,
            config.transformation,
            &positions,
            config.min_leet_chars,
            config.max_leet_chars,
            rng,
        )
    }

    /// Produces `config.count` passphrases, each from an independent
    /// `compose` call. No uniqueness is guaranteed across the batch.
    pub fn generate_many<R: Rng>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Result<Vec<String>, ConfigError> {
        config.validate()?;
        Ok((0..config.count).map(|_| self.compose(config, rng)).collect())
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TransformationKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_word_bank() -> WordBank {
        WordBank::new(
            vec!["big".into()],
            vec!["run".into()],
            vec!["cat".into()],
            vec!["dogs".into()],
        )
    }

    fn plain_config(pattern: &str) -> GenerationConfig {
        GenerationConfig {
            pattern: pattern.to_string(),
            transformation: TransformationKind::Plain,
            min_leet_chars: 0,
            max_leet_chars: 0,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn batch_length_matches_count() {
        let engine = PassphraseEngine::new(one_word_bank());
        let mut rng = StdRng::seed_from_u64(10);
        for count in [1, 3, 8] {
            let config = GenerationConfig {
                count,
                ..plain_config("AVNP")
            };
            let batch = engine.generate_many(&config, &mut rng).unwrap();
            assert_eq!(batch.len(), count);
        }
    }

    #[test]
    fn generate_many_rejects_invalid_config() {
        let engine = PassphraseEngine::new(one_word_bank());
        let mut rng = StdRng::seed_from_u64(11);
        let config = GenerationConfig {
            count: 0,
            ..plain_config("AVNP")
        };
        assert_eq!(
            engine.generate_many(&config, &mut rng),
            Err(ConfigError::ZeroCount)
        );
    }

    #[test]
    fn pattern_order_is_fixed_and_separator_is_single() {
        let engine = PassphraseEngine::new(one_word_bank());
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..50 {
            let phrase = engine.compose(&plain_config("AVNP"), &mut rng);
            let separator = phrase
                .chars()
                .find(|c| SEPARATORS.contains(c))
                .expect("separator present");
            let tokens: Vec<String> = phrase
                .split(separator)
                .map(|t| t.to_lowercase())
                .collect();
            assert_eq!(tokens, ["big", "run", "cat", "dogs"]);
        }
    }

    #[test]
    fn no_word_repeats_within_one_passphrase() {
        let bank = WordBank::new(
            vec!["apt".into(), "coy".into(), "dim".into(), "fab".into()],
            vec![],
            vec![],
            vec![],
        );
        let engine = PassphraseEngine::new(bank);
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..100 {
            let phrase = engine.compose(&plain_config("AAAA"), &mut rng);
            let separator = phrase.chars().find(|c| SEPARATORS.contains(c)).unwrap();
            let mut tokens: Vec<String> = phrase
                .split(separator)
                .map(|t| t.to_lowercase())
                .collect();
            tokens.sort();
            tokens.dedup();
            assert_eq!(tokens.len(), 4, "duplicate word in {phrase}");
        }
    }

    #[test]
    fn exhausted_category_passes_symbol_through() {
        let bank = WordBank::new(
            vec!["apt".into(), "coy".into()],
            vec![],
            vec![],
            vec![],
        );
        let engine = PassphraseEngine::new(bank);
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..50 {
            let phrase = engine.compose(&plain_config("AAAA"), &mut rng);
            let separator = phrase.chars().find(|c| SEPARATORS.contains(c)).unwrap();
            let tokens: Vec<&str> = phrase.split(separator).collect();
            assert_eq!(tokens.len(), 4);
            let words: Vec<String> = tokens[..2].iter().map(|t| t.to_lowercase()).collect();
            assert!(words.contains(&"apt".to_string()));
            assert!(words.contains(&"coy".to_string()));
            assert_eq!(&tokens[2..], ["A", "A"]);
        }
    }

    #[test]
    fn empty_category_renders_every_occurrence_literally() {
        let engine = PassphraseEngine::new(WordBank::default());
        let mut rng = StdRng::seed_from_u64(15);
        let phrase = engine.compose(&plain_config("AVNP"), &mut rng);
        let separator = phrase.chars().find(|c| SEPARATORS.contains(c)).unwrap();
        let tokens: Vec<&str> = phrase.split(separator).collect();
        assert_eq!(tokens, ["A", "V", "N", "P"]);
    }

    #[test]
    fn unrecognized_symbols_pass_through() {
        let engine = PassphraseEngine::new(one_word_bank());
        let mut rng = StdRng::seed_from_u64(16);
        let phrase = engine.compose(&plain_config("AXN"), &mut rng);
        let separator = phrase.chars().find(|c| SEPARATORS.contains(c)).unwrap();
        let tokens: Vec<String> = phrase
            .split(separator)
            .map(|t| t.to_lowercase())
            .collect();
        assert_eq!(tokens, ["big", "x", "cat"]);
    }

    #[test]
    fn full_leet_with_exact_bounds_changes_exactly_two_chars() {
        let bank = WordBank::new(
            vec!["toasted".into()],
            vec!["sisters".into()],
            vec!["estates".into()],
            vec!["oatiest".into()],
        );
        let engine = PassphraseEngine::new(bank);
        let mut rng = StdRng::seed_from_u64(17);
        let config = GenerationConfig {
            pattern: "AVNP".to_string(),
            transformation: TransformationKind::Leet,
            min_leet_chars: 2,
            max_leet_chars: 2,
            ..GenerationConfig::default()
        };
        for _ in 0..50 {
            let phrase = engine.compose(&config, &mut rng);
            let substituted = phrase
                .chars()
                .filter(|c| ['4', '3', '1', '0', '$', '7'].contains(c))
                .count();
            assert_eq!(substituted, 2, "in {phrase}");
        }
    }

    #[test]
    fn source_bank_is_never_consumed() {
        let engine = PassphraseEngine::new(one_word_bank());
        let mut rng = StdRng::seed_from_u64(18);
        for _ in 0..3 {
            let phrase = engine.compose(&plain_config("AVNP"), &mut rng);
            assert!(phrase.to_lowercase().contains("big"));
        }
        assert_eq!(engine.bank().words(WordCategory::Adjective), ["big"]);
    }

    #[test]
    fn capitalize_first_uppercases_only_the_first_letter() {
        assert_eq!(capitalize_first("big"), "Big");
        assert_eq!(capitalize_first("Big"), "Big");
        assert_eq!(capitalize_first(""), "");
    }
}
