use std::collections::VecDeque;

use croupier::{Card, Prompt, PromptError, Table};

/// Prompt answering from fixed scripts, failing once a script runs dry.
#[derive(Debug, Default)]
pub struct Scripted {
    numbers: VecDeque<u32>,
    answers: VecDeque<bool>,
}

impl Scripted {
    pub fn new(numbers: &[u32], answers: &[bool]) -> Self {
        Self {
            numbers: numbers.iter().copied().collect(),
            answers: answers.iter().copied().collect(),
        }
    }
}

impl Prompt for Scripted {
    fn read_integer(&mut self, _prompt: &str, _min: u32, _max: u32) -> Result<u32, PromptError> {
        self.numbers.pop_front().ok_or(PromptError::Closed)
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool, PromptError> {
        self.answers.pop_front().ok_or(PromptError::Closed)
    }
}

pub fn card(rank: u8) -> Card {
    Card::new(rank, 4).unwrap()
}

pub fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(rank)).collect()
}

/// Replaces the shoe so cards are drawn in the given order.
pub fn rig(table: &mut Table, ranks: &[u8]) {
    *table.shoe_mut() = cards(ranks).into_iter().collect();
}
