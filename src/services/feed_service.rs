use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Collections the admin dashboard watches.
pub const CITIZENSHIP_COLLECTION: &str = "citizenship_applications";
pub const DONATIONS_COLLECTION: &str = "donations";
pub const GOVERNMENT_COLLECTION: &str = "government_applications";

const FEED_CAPACITY: usize = 256;

#[derive(Debug, Clone, Serialize)]
pub struct ChangeEvent {
    pub seq: u64,
    pub collection: String,
    pub action: String,
    pub at: DateTime<Utc>,
}

#[derive(Default)]
struct FeedInner {
    next_seq: u64,
    events: VecDeque<ChangeEvent>,
}

/// In-process change feed the admin dashboard polls. Events carry no row
/// data; the consumer reacts by re-fetching the affected collection.
#[derive(Clone, Default)]
pub struct ChangeFeed {
    inner: Arc<Mutex<FeedInner>>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, collection: &str, action: &str) {
        let mut inner = self.inner.lock().expect("change feed mutex poisoned");
        inner.next_seq += 1;
        let event = ChangeEvent {
            seq: inner.next_seq,
            collection: collection.to_string(),
            action: action.to_string(),
            at: Utc::now(),
        };
        inner.events.push_back(event);
        while inner.events.len() > FEED_CAPACITY {
            inner.events.pop_front();
        }
    }

    /// Events newer than the client's cursor, oldest first.
    pub fn since(&self, after: u64) -> Vec<ChangeEvent> {
        let inner = self.inner.lock().expect("change feed mutex poisoned");
        inner
            .events
            .iter()
            .filter(|event| event.seq > after)
            .cloned()
            .collect()
    }

    /// Highest sequence number published so far.
    pub fn cursor(&self) -> u64 {
        self.inner
            .lock()
            .expect("change feed mutex poisoned")
            .next_seq
    }
}
