//! Test fixtures and builders

use std::collections::VecDeque;

use quotebook::core::ports::RandomSource;
use quotebook::{Quote, QuoteCollection};

pub const STAY_HUNGRY: &str = "Stay hungry, stay foolish.";

/// Shorthand quote constructor for valid input
pub fn quote(text: &str, category: &str) -> Quote {
    Quote::new(text, category).expect("fixture quote must be valid")
}

/// The four seed quotes: 2 Motivation, 1 Inspiration, 1 Philosophy
pub fn seed() -> QuoteCollection {
    quotebook::book::seed_quotes()
}

/// Random source replaying a fixed list of picks, cycling when exhausted
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    calls: usize,
}

impl ScriptedRandom {
    pub fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.calls += 1;
        let next = self.picks.pop_front().unwrap_or(0);
        self.picks.push_back(next);
        next % len
    }
}
