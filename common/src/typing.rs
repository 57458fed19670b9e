//! Character-by-character reveal of the guest welcome text.
//!
//! The effect is a small state machine driven by an external timer:
//! [`TypingEffect::start`] reveals the first character and says how long to
//! wait, every [`TypingEffect::tick`] reveals the next one, and once the text
//! is complete the popup is held for a fixed delay before it closes.
//!
//! Each run carries a generation number. Timer callbacks hand it back to
//! `tick`, so callbacks from a cancelled run are ignored.

use crate::config::TypingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Idle,
    Revealing,
    Holding,
    Done,
}

/// What the timer driver has to do after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Call `tick(generation)` after `delay_ms`.
    After { generation: u64, delay_ms: u32 },
    /// Nothing left to schedule.
    Stop,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    chars: Vec<char>,
    revealed: usize,
    buffer: String,
    phase: TypingPhase,
    generation: u64,
    interval_ms: u32,
    hold_ms: u32,
}

impl TypingEffect {
    pub fn new(interval_ms: u32, hold_ms: u32) -> Self {
        Self {
            chars: Vec::new(),
            revealed: 0,
            buffer: String::new(),
            phase: TypingPhase::Idle,
            generation: 0,
            interval_ms,
            hold_ms,
        }
    }

    pub fn from_config(config: &TypingConfig) -> Self {
        Self::new(config.interval_ms, config.hold_ms)
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Text revealed so far.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, TypingPhase::Revealing | TypingPhase::Holding)
    }

    pub fn popup_visible(&self) -> bool {
        self.is_running()
    }

    /// Starts revealing `text`. Returns `None` and changes nothing when a run
    /// is already in progress.
    pub fn start(&mut self, text: &str) -> Option<Next> {
        if self.is_running() {
            log::debug!("welcome text already typing, trigger ignored");
            return None;
        }
        self.generation += 1;
        self.chars = text.chars().collect();
        self.revealed = 0;
        self.buffer.clear();
        self.phase = TypingPhase::Revealing;
        Some(self.step())
    }

    /// Advances the run identified by `generation`.
    pub fn tick(&mut self, generation: u64) -> Next {
        if generation != self.generation {
            return Next::Stop;
        }
        match self.phase {
            TypingPhase::Revealing => self.step(),
            TypingPhase::Holding => {
                self.phase = TypingPhase::Done;
                Next::Stop
            }
            TypingPhase::Idle | TypingPhase::Done => Next::Stop,
        }
    }

    /// Abandons the current run and hides the popup.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.buffer.clear();
        self.revealed = 0;
        self.phase = TypingPhase::Idle;
    }

    fn step(&mut self) -> Next {
        match self.chars.get(self.revealed) {
            Some(c) => {
                self.buffer.push(*c);
                self.revealed += 1;
                self.after(self.interval_ms)
            }
            None => {
                self.phase = TypingPhase::Holding;
                self.after(self.hold_ms)
            }
        }
    }

    fn after(&self, delay_ms: u32) -> Next {
        Next::After {
            generation: self.generation,
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(effect: &mut TypingEffect, mut next: Next) -> Vec<u32> {
        let mut delays = Vec::new();
        while let Next::After { generation, delay_ms } = next {
            delays.push(delay_ms);
            next = effect.tick(generation);
        }
        delays
    }

    #[test]
    fn reveals_one_character_per_tick() {
        let mut effect = TypingEffect::new(70, 600);
        let Some(Next::After { generation, delay_ms }) = effect.start("Hi!") else {
            panic!("run did not start");
        };
        assert_eq!((effect.text(), delay_ms), ("H", 70));

        effect.tick(generation);
        assert_eq!(effect.text(), "Hi");
        effect.tick(generation);
        assert_eq!(effect.text(), "Hi!");
        assert_eq!(effect.phase(), TypingPhase::Revealing);

        assert_eq!(
            effect.tick(generation),
            Next::After {
                generation,
                delay_ms: 600
            }
        );
        assert_eq!(effect.phase(), TypingPhase::Holding);
        assert!(effect.popup_visible());

        assert_eq!(effect.tick(generation), Next::Stop);
        assert_eq!(effect.phase(), TypingPhase::Done);
        assert!(!effect.popup_visible());
        assert_eq!(effect.text(), "Hi!");
    }

    #[test]
    fn schedule_matches_text_length() {
        let mut effect = TypingEffect::from_config(&TypingConfig::default());
        let next = effect.start("Welcome Parent").unwrap();
        let delays = run_to_end(&mut effect, next);
        assert_eq!(delays.len(), "Welcome Parent".len() + 1);
        assert_eq!(delays.last(), Some(&600));
        assert!(delays[..delays.len() - 1].iter().all(|d| *d == 70));
    }

    #[test]
    fn second_trigger_while_running_is_ignored() {
        let mut effect = TypingEffect::new(70, 600);
        let first = effect.start("abc").unwrap();
        assert_eq!(effect.start("xyz"), None);
        run_to_end(&mut effect, first);
        assert_eq!(effect.text(), "abc");

        assert!(effect.start("xyz").is_some());
        assert_eq!(effect.text(), "x");
    }

    #[test]
    fn stale_ticks_are_ignored_after_cancel() {
        let mut effect = TypingEffect::new(70, 600);
        let Some(Next::After { generation, .. }) = effect.start("abc") else {
            panic!("run did not start");
        };
        effect.cancel();
        assert_eq!(effect.tick(generation), Next::Stop);
        assert_eq!(effect.text(), "");
        assert_eq!(effect.phase(), TypingPhase::Idle);
    }

    #[test]
    fn multibyte_text_is_revealed_by_character() {
        let mut effect = TypingEffect::new(1, 1);
        let next = effect.start("héllo 📚").unwrap();
        run_to_end(&mut effect, next);
        assert_eq!(effect.text(), "héllo 📚");
    }

    #[test]
    fn empty_text_goes_straight_to_holding() {
        let mut effect = TypingEffect::new(70, 600);
        assert!(matches!(
            effect.start(""),
            Some(Next::After { delay_ms: 600, .. })
        ));
        assert_eq!(effect.phase(), TypingPhase::Holding);
    }
}
