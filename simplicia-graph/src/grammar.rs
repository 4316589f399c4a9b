use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use simplicia_core::Set;

/// A rewrite rule mapping a single-symbol left-hand side to a
/// replacement string.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Production {
    pub lhs: String,
    pub rhs: String,
}

impl Production {
    pub fn new(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs, self.rhs)
    }
}

/// A formal grammar: terminal and nonterminal alphabets, a production
/// set and a start symbol. Symbols are single characters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Grammar {
    pub nonterminals: Set<String>,
    pub terminals: Set<String>,
    pub productions: Set<Production>,
    pub start: String,
}

impl Grammar {
    pub fn symbols(&self) -> Set<String> {
        self.terminals.union(&self.nonterminals)
    }

    /// No production's left-hand side occurs in `word`.
    pub fn is_terminal_word(&self, word: &str) -> bool {
        !self.productions.iter().any(|p| word.contains(&p.lhs))
    }

    /// Byte offsets of the nonterminal symbols occurring in `word`.
    pub fn nonterminal_indices(&self, word: &str) -> Vec<usize> {
        word.char_indices()
            .filter(|(_, c)| self.nonterminals.contains(&c.to_string()))
            .map(|(index, _)| index)
            .collect()
    }

    /// Productions whose left-hand side is `symbol`.
    pub fn productions_for(&self, symbol: &str) -> Set<Production> {
        self.productions
            .iter()
            .filter(|p| p.lhs == symbol)
            .cloned()
            .collect()
    }

    /// Rewrites one randomly chosen nonterminal occurrence of `word`
    /// using a randomly chosen applicable production.
    ///
    /// Terminal words, and words whose nonterminals have no productions,
    /// come back unchanged. The generator is a caller-supplied parameter
    /// so derivations can be reproduced from a seed.
    pub fn apply_random_production(&self, word: &str, rng: &mut impl Rng) -> String {
        if self.is_terminal_word(word) {
            return word.to_string();
        }
        let indices = self.nonterminal_indices(word);
        let Some(&index) = indices.choose(rng) else {
            return word.to_string();
        };
        let Some(symbol) = word[index..].chars().next() else {
            return word.to_string();
        };
        let candidates: Vec<Production> =
            self.productions_for(&symbol.to_string()).into_iter().collect();
        let Some(production) = candidates.choose(rng) else {
            return word.to_string();
        };
        let mut rewritten = String::with_capacity(word.len() + production.rhs.len());
        rewritten.push_str(&word[..index]);
        rewritten.push_str(&production.rhs);
        rewritten.push_str(&word[index + symbol.len_utf8()..]);
        rewritten
    }

    /// Grammar of even-length palindromes over `{a, b}`.
    pub fn even_palindromes() -> Self {
        Self {
            nonterminals: Set::from_iter(["S".to_string()]),
            terminals: Set::from_iter(["a".to_string(), "b".to_string()]),
            productions: Set::from_iter([
                Production::new("S", "aSa"),
                Production::new("S", "bSb"),
                Production::new("S", ""),
            ]),
            start: "S".to_string(),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.start)?;
        for (index, production) in self.productions.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{production}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Grammar;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn terminal_words_have_no_rewritable_symbols() {
        let grammar = Grammar::even_palindromes();
        assert!(grammar.is_terminal_word("abba"));
        assert!(!grammar.is_terminal_word("aSa"));
        assert_eq!(grammar.nonterminal_indices("aSbS"), vec![1, 3]);
    }

    #[test]
    fn productions_for_symbol() {
        let grammar = Grammar::even_palindromes();
        assert_eq!(grammar.productions_for("S").len(), 3);
        assert_eq!(grammar.productions_for("a").len(), 0);
    }

    #[test]
    fn random_derivations_are_reproducible_and_stay_palindromic() {
        let grammar = Grammar::even_palindromes();
        let mut rng = StdRng::seed_from_u64(7);
        let mut word = grammar.start.clone();
        for _ in 0..20 {
            word = grammar.apply_random_production(&word, &mut rng);
            if grammar.is_terminal_word(&word) {
                break;
            }
        }
        if grammar.is_terminal_word(&word) {
            let reversed: String = word.chars().rev().collect();
            assert_eq!(word, reversed);
            assert_eq!(word.len() % 2, 0);
        }

        let mut rng_again = StdRng::seed_from_u64(7);
        let mut word_again = grammar.start.clone();
        for _ in 0..20 {
            word_again = grammar.apply_random_production(&word_again, &mut rng_again);
            if grammar.is_terminal_word(&word_again) {
                break;
            }
        }
        assert_eq!(word, word_again);
    }

    #[test]
    fn terminal_words_pass_through_unchanged() {
        let grammar = Grammar::even_palindromes();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(grammar.apply_random_production("ab", &mut rng), "ab");
    }
}
