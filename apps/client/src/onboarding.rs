//! Three-step introduction shown after the first sign-in.

use crate::storage::{keys, KeyValueStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const STEPS: [TourStep; 3] = [
    TourStep {
        title: "Welcome to BookClub!",
        body: "Let us show you around the main features of the platform.",
    },
    TourStep {
        title: "Navigation",
        body: "Use the menu to move between sections: Feed, Catalog, Clubs, Events and Profile.",
    },
    TourStep {
        title: "All set!",
        body: "You are ready to use BookClub. Enjoy reading and talking books!",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourProgress {
    Continue,
    Finished,
}

/// Position in the tour, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tour {
    step: usize,
}

impl Tour {
    pub fn start() -> Self {
        Self { step: 1 }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> TourStep {
        STEPS[(self.step - 1).min(STEPS.len() - 1)]
    }

    pub fn is_last(&self) -> bool {
        self.step >= STEPS.len()
    }

    /// Advance; on the last step the tour is finished instead.
    pub fn next(&mut self) -> TourProgress {
        if self.is_last() {
            TourProgress::Finished
        } else {
            self.step += 1;
            TourProgress::Continue
        }
    }

    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.step, STEPS.len())
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_last() {
            "Finish"
        } else {
            "Next"
        }
    }
}

pub fn is_completed(store: &dyn KeyValueStore) -> bool {
    store.get(keys::ONBOARDING_COMPLETED).as_deref() == Some("true")
}

pub fn mark_completed(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.set(keys::ONBOARDING_COMPLETED, "true")
}
