//! When to show the "Install app" card.
//!
//! The platform signals that an install offer is available and, later, that
//! the app got installed. The card appears a fixed delay after the offer, only
//! while the app is not installed, and never again in the same session once
//! dismissed.

use crate::config::InstallConfig;

/// Outcome of presenting the platform install offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChoice {
    Accepted,
    Dismissed,
}

impl InstallChoice {
    /// Parses the `outcome` field of the platform's user-choice result.
    pub fn from_outcome(outcome: &str) -> Self {
        match outcome {
            "accepted" => InstallChoice::Accepted,
            _ => InstallChoice::Dismissed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPolicy {
    delay_ms: u32,
    offer_available: bool,
    installed: bool,
    dismissed: bool,
    revealed: bool,
}

impl InstallPolicy {
    /// `installed` comes from the standalone display-mode check,
    /// `dismissed` from session storage.
    pub fn new(config: &InstallConfig, installed: bool, dismissed: bool) -> Self {
        Self {
            delay_ms: config.delay_ms,
            offer_available: false,
            installed,
            dismissed,
            revealed: false,
        }
    }

    /// Records a pending offer. Returns the delay after which
    /// [`delay_elapsed`](Self::delay_elapsed) should be called, or `None` when
    /// the card will never be shown.
    pub fn offer_available(&mut self) -> Option<u32> {
        self.offer_available = true;
        (!self.installed && !self.dismissed).then_some(self.delay_ms)
    }

    pub fn delay_elapsed(&mut self) {
        if self.offer_available && !self.installed {
            self.revealed = true;
        }
    }

    pub fn installed(&mut self) {
        log::info!("app installed");
        self.installed = true;
        self.revealed = false;
        self.offer_available = false;
    }

    /// The offer can be presented only once; either answer consumes it.
    pub fn choice_made(&mut self, choice: InstallChoice) {
        log::info!("install offer answered: {choice:?}");
        if choice == InstallChoice::Accepted {
            self.revealed = false;
        }
        self.offer_available = false;
    }

    /// "Not now" or the close button. Holds for the rest of the session.
    pub fn dismiss(&mut self) {
        self.revealed = false;
        self.dismissed = true;
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn can_present(&self) -> bool {
        self.offer_available && !self.installed
    }

    pub fn is_visible(&self) -> bool {
        self.revealed && self.offer_available && !self.installed && !self.dismissed
    }
}
