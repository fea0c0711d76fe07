//! In-memory notification inbox, newest first.

use crate::domain::{NewNotification, Notification, NotificationError, NotificationId};
use crate::infra::clock::{Clock, SystemClock};
use std::collections::VecDeque;
use std::sync::Arc;

/// Explicit event source for new notifications.
///
/// Producers are polled by the caller; nothing is pushed in the background.
pub trait NotificationFeed {
    fn poll(&mut self) -> Vec<NewNotification>;
}

/// Feed that replays prepared batches, one per poll.
#[derive(Debug, Default, Clone)]
pub struct ScriptedFeed {
    batches: VecDeque<Vec<NewNotification>>,
}

impl ScriptedFeed {
    pub fn new(batches: impl IntoIterator<Item = Vec<NewNotification>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }
}

impl NotificationFeed for ScriptedFeed {
    fn poll(&mut self) -> Vec<NewNotification> {
        self.batches.pop_front().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct NotificationStore {
    items: Vec<Notification>,
    clock: Arc<dyn Clock>,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl NotificationStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: Vec::new(),
            clock,
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Prepend with a fresh id and the clock's current time.
    pub fn push(&mut self, new: NewNotification) -> NotificationId {
        let notification = Notification {
            id: uuid::Uuid::new_v4().to_string(),
            kind: new.kind,
            title: new.title,
            message: new.message,
            read: false,
            timestamp: self.clock.now(),
            action_url: new.action_url,
        };
        let id = notification.id.clone();
        log::debug!("notification {} ({}) added", id, notification.kind);
        self.items.insert(0, notification);
        id
    }

    pub fn mark_read(&mut self, id: &str) -> Result<(), NotificationError> {
        let notification = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotificationError::NotFound(id.to_string()))?;
        notification.read = true;
        Ok(())
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }

    pub fn clear(&mut self, id: &str) -> Result<Notification, NotificationError> {
        let index = self
            .items
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| NotificationError::NotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Push everything the feed has ready. Returns how many were added.
    pub fn drain_feed(&mut self, feed: &mut dyn NotificationFeed) -> usize {
        let batch = feed.poll();
        let count = batch.len();
        for new in batch {
            self.push(new);
        }
        count
    }
}
