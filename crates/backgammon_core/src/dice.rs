//! Dice roll and the pips still usable this turn.
//!
//! The search relies on the exact probability model: 15 non-double rolls each
//! standing for 2 of the 36 outcomes, and 6 doubles each standing for 1.

use rand::Rng;

/// Number of equally likely ordered outcomes of two dice.
pub const TOTAL_COMBINATIONS: u32 = 36;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dice {
    value: Option<[u8; 2]>,
    remaining: Vec<u8>,
}

impl Dice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dice already rolled to `outcome`.
    pub fn rolled(outcome: [u8; 2]) -> Self {
        let mut dice = Self::new();
        dice.set_roll(outcome);
        dice
    }

    /// Rolls both dice, or takes `outcome` when given (deterministic tests, search).
    pub fn roll(&mut self, outcome: Option<[u8; 2]>) {
        let outcome = outcome.unwrap_or_else(|| Self::random_outcome(&mut rand::thread_rng()));
        self.set_roll(outcome);
    }

    pub fn roll_with<R: Rng>(&mut self, rng: &mut R) {
        self.set_roll(Self::random_outcome(rng));
    }

    fn random_outcome<R: Rng>(rng: &mut R) -> [u8; 2] {
        [rng.gen_range(1..=6), rng.gen_range(1..=6)]
    }

    fn set_roll(&mut self, outcome: [u8; 2]) {
        let [a, b] = outcome;
        assert!(
            (1..=6).contains(&a) && (1..=6).contains(&b),
            "die values must be in 1..=6, got {outcome:?}"
        );
        self.value = Some(outcome);
        self.remaining = if a == b { vec![a; 4] } else { vec![a, b] };
    }

    /// The last roll in the order it was thrown.
    pub fn value(&self) -> Option<[u8; 2]> {
        self.value
    }

    pub fn is_double(&self) -> bool {
        matches!(self.value, Some([a, b]) if a == b)
    }

    pub fn remaining(&self) -> &[u8] {
        &self.remaining
    }

    /// Distinct unused pip values, ascending.
    pub fn distinct_remaining(&self) -> Vec<u8> {
        let mut pips = self.remaining.clone();
        pips.sort_unstable();
        pips.dedup();
        pips
    }

    /// Consumes one occurrence of `pip`. Panics if it is not available.
    pub fn use_move(&mut self, pip: u8) {
        let pos = self
            .remaining
            .iter()
            .position(|&p| p == pip)
            .unwrap_or_else(|| panic!("pip {pip} not available in {:?}", self.remaining));
        self.remaining.remove(pos);
    }

    pub fn is_depleted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// All 36 ordered outcomes.
    pub fn all_combinations() -> Vec<[u8; 2]> {
        (1..=6)
            .flat_map(|a| (1..=6).map(move |b| [a, b]))
            .collect()
    }

    /// The 15 unordered non-double rolls; each covers 2 of the 36 outcomes.
    pub fn possible_rolls_excluding_doubles() -> Vec<[u8; 2]> {
        (1..=6)
            .flat_map(|a| (a + 1..=6).map(move |b| [a, b]))
            .collect()
    }

    /// The 6 doubles; each covers 1 of the 36 outcomes.
    pub fn possible_doubles() -> Vec<[u8; 2]> {
        (1..=6).map(|a| [a, a]).collect()
    }

    /// The 21 distinct rolls with their multiplicity out of [`TOTAL_COMBINATIONS`].
    pub fn weighted_rolls() -> Vec<([u8; 2], u32)> {
        Self::possible_rolls_excluding_doubles()
            .into_iter()
            .map(|r| (r, 2))
            .chain(Self::possible_doubles().into_iter().map(|r| (r, 1)))
            .collect()
    }
}

#[cfg(test)]
#[path = "dice_tests.rs"]
mod dice_tests;
