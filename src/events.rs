//! Language-change notifications.
//!
//! An explicit observer registry replaces the original ambient page-wide
//! event broadcast: interested page scripts subscribe a callback and receive
//! every successful language change.

use tracing::debug;

/// Notification emitted after a language change has fully taken effect
/// (dictionary installed and applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChanged {
    /// The newly active language code.
    pub language: &'static str,
}

/// Handle for unsubscribing an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

type Callback = Box<dyn Fn(&LanguageChanged) + Send>;

/// Registry of language-change observers.
#[derive(Default)]
pub struct Observers {
    observers: Vec<(ObserverId, Callback)>,
    next_id: u64,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for language-change notifications.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: Fn(&LanguageChanged) + Send + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }

    /// Notify all observers, in subscription order.
    pub fn emit(&self, event: &LanguageChanged) {
        debug!(
            "Notifying {} observers of language change to {}",
            self.observers.len(),
            event.language
        );
        for (_, callback) in &self.observers {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.observers.len())
            .finish()
    }
}
