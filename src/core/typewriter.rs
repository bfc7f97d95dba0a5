//! Rotating typewriter for the hero headline.

use std::time::Duration;

pub const HERO_WORDS: [&str; 4] = ["Waiting", "Blocked", "Stuck", "Delayed"];

pub const DEFAULT_SPEED: Duration = Duration::from_millis(120);
pub const DEFAULT_HOLD: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types a word char by char, holds it, deletes it, then moves to the next
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<&'static str>,
    word: usize,
    shown: usize,
    phase: Phase,
    speed: Duration,
    hold: Duration,
}

impl Typewriter {
    pub fn new(words: &[&'static str], speed: Duration, hold: Duration) -> Self {
        Self {
            words: words.to_vec(),
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            speed,
            hold,
        }
    }

    /// Start with the first word fully typed, about to be held
    pub fn revealed(mut self) -> Self {
        if !self.words.is_empty() {
            self.shown = self.current_len();
            self.phase = Phase::Holding;
        }
        self
    }

    fn current(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    /// Prefix of the current word that is on screen
    pub fn visible(&self) -> &'static str {
        let word = self.current();
        let end = word
            .char_indices()
            .nth(self.shown)
            .map_or(word.len(), |(i, _)| i);
        &word[..end]
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Advance one step and return how long to wait before the next one
    pub fn step(&mut self) -> Duration {
        if self.words.is_empty() {
            return self.hold;
        }
        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= self.current_len() {
                    self.phase = Phase::Holding;
                    return self.hold;
                }
                self.speed
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.delete_one()
            }
            Phase::Deleting => self.delete_one(),
        }
    }

    fn delete_one(&mut self) -> Duration {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.word = (self.word + 1) % self.words.len();
            self.phase = Phase::Typing;
            return self.speed;
        }
        self.speed / 2
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(&HERO_WORDS, DEFAULT_SPEED, DEFAULT_HOLD)
    }
}
