// Toast-style notification feed
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Info,
    Success,
    Destructive,
}

/// Advisory text for the UI. Never read back by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>, tone: Tone) -> Self {
        Self { title: title.into(), description: description.into(), tone }
    }
}

/// Bounded feed; the oldest entries drop off first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationFeed {
    capacity: usize,
    items: VecDeque<Notification>,
}

impl NotificationFeed {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { capacity, items: VecDeque::with_capacity(capacity) }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Hands every pending notification to the caller, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.items.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_is_bounded() {
        let mut feed = NotificationFeed::with_capacity(2);
        for i in 0..3 {
            feed.push(Notification::new(format!("n{i}"), "", Tone::Info));
        }
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.iter().next().unwrap().title, "n1");
        assert_eq!(feed.latest().unwrap().title, "n2");

        let drained = feed.drain();
        assert_eq!(drained.len(), 2);
        assert!(feed.is_empty());
    }
}
