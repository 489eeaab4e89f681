//! Text effects: staggered word reveal and the periodic glitch.

use crate::constants::*;
use crate::tasks::RepeatingTask;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct WordSpan {
    pub word: String,
    pub delay_sec: f64,
}

/// Split on single spaces, staggering each word's entrance.
pub fn split_words(text: &str) -> Vec<WordSpan> {
    text.split(' ')
        .enumerate()
        .map(|(i, w)| WordSpan {
            word: w.to_string(),
            delay_sec: i as f64 * WORD_STAGGER_SEC,
        })
        .collect()
}

/// Replace each character with a random glitch symbol with probability
/// `char_chance`.
pub fn glitch_text<R: Rng + ?Sized>(rng: &mut R, text: &str, char_chance: f64) -> String {
    let symbols: Vec<char> = GLITCH_CHARS.chars().collect();
    text.chars()
        .map(|c| {
            if rng.gen_bool(char_chance.clamp(0.0, 1.0)) {
                symbols[rng.gen_range(0..symbols.len())]
            } else {
                c
            }
        })
        .collect()
}

/// Glitch effect for one element: every period, with `GLITCH_CHANCE`, show a
/// scrambled copy of the original text for a moment.
#[derive(Debug)]
pub struct Glitch {
    original: String,
    task: RepeatingTask,
}

impl Glitch {
    pub fn new(original: impl Into<String>, now: f64) -> Self {
        Self {
            original: original.into(),
            task: RepeatingTask::new(GLITCH_PERIOD_MS, now),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn task(&self) -> &RepeatingTask {
        &self.task
    }

    /// Scrambled text to show at `now`, if this period glitches.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f64) -> Option<String> {
        if !self.task.due(now) || !rng.gen_bool(GLITCH_CHANCE) {
            return None;
        }
        Some(glitch_text(rng, &self.original, GLITCH_CHAR_CHANCE))
    }
}

/// Pulsing call-to-action: every period the `pulse` class is held briefly.
#[derive(Debug)]
pub struct Pulse {
    task: RepeatingTask,
}

impl Pulse {
    pub fn new(now: f64) -> Self {
        Self {
            task: RepeatingTask::new(PULSE_PERIOD_MS, now),
        }
    }

    pub fn task(&self) -> &RepeatingTask {
        &self.task
    }

    pub fn tick(&mut self, now: f64) -> bool {
        self.task.due(now)
    }
}
