//! Parent-side state for the upward callback demo.
//!
//! The child component only ever emits a [`ChildEvent`]; the parent folds
//! those events into a [`CallbackLog`].

use std::collections::VecDeque;

/// Event a child component reports to its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChildEvent {
    /// The child's greeting button was pressed.
    Greeting(String),
    /// The child's counter button was pressed; `count` is the child's own tally.
    Clicked { count: u32 },
}

impl ChildEvent {
    /// Log line shown by the parent.
    pub fn describe(&self) -> String {
        match self {
            Self::Greeting(text) => format!("Child says: {}", text),
            Self::Clicked { count } => format!("Child clicked {} time(s)", count),
        }
    }
}

/// Bounded log of child events, newest last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackLog {
    entries: VecDeque<String>,
    capacity: usize,
    received: u32,
}

impl CallbackLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            received: 0,
        }
    }

    /// Record one event, evicting the oldest entry when full.
    pub fn record(&mut self, event: &ChildEvent) {
        self.received += 1;
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(event.describe());
    }

    /// Total events received, including evicted ones.
    pub fn received(&self) -> u32 {
        self.received
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
