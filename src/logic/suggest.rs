// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Canned post openers offered by the "AI Suggest" button.

use rand::Rng;
use rand::seq::SliceRandom;

/// Fixed pool of suggestions.
pub const SUGGESTIONS: [&str; 5] = [
    "🚀 Exciting news! Just launched something amazing...",
    "💡 Here's a quick tip that changed everything for me:",
    "🌟 Behind the scenes of today's creative process...",
    "🔥 This trend is taking over - here's my take:",
    "✨ Grateful for this incredible journey and all of you!",
];

/// Pick a suggestion uniformly at random.
pub fn suggest_content() -> &'static str {
    suggest_content_with(&mut rand::thread_rng())
}

pub fn suggest_content_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SUGGESTIONS.choose(rng).copied().unwrap_or(SUGGESTIONS[0])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn suggestions_are_non_empty_members_of_pool() {
        for _ in 0..50 {
            let s = suggest_content();
            assert!(!s.trim().is_empty());
            assert!(SUGGESTIONS.contains(&s));
        }
    }

    #[test]
    fn every_suggestion_is_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<_> = (0..500).map(|_| suggest_content_with(&mut rng)).collect();

        assert_eq!(seen.len(), SUGGESTIONS.len());
    }
}
