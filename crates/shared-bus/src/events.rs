//! # Portal Events
//!
//! Change notifications emitted by the stores after each state mutation.
//! Events carry a summary only; subscribers read the new state through the
//! owning store's getters.

use serde::{Deserialize, Serialize};

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalEvent {
    // =========================================================================
    // STORE 1: SESSION
    // =========================================================================
    /// Session state changed (initialize, login, logout, check).
    SessionChanged {
        /// Whether a user is now installed.
        authenticated: bool,
    },

    /// The session's error field changed.
    SessionErrorChanged {
        /// Whether an error is now set.
        has_error: bool,
    },

    // =========================================================================
    // STORE 2: REFERENCE CACHE
    // =========================================================================
    /// Reference collections were replaced or a load attempt finished.
    ReferenceDataChanged {
        /// Whether the dataset is initialized.
        initialized: bool,
        /// Whether the attempt set an error.
        failed: bool,
    },

    // =========================================================================
    // STORE 3: INQUIRIES
    // =========================================================================
    /// Aggregate stats were refreshed.
    InquiryStatsChanged,

    /// The inquiry list slice changed.
    InquiryListChanged {
        /// Current page.
        page: u32,
        /// Total items known for the filter set.
        total: u64,
        /// Whether the last fetch failed.
        failed: bool,
    },

    /// The detail slice changed.
    CurrentInquiryChanged {
        /// Name of the loaded inquiry, if any.
        name: Option<String>,
    },

    /// The create-form slice changed.
    FormStateChanged {
        /// Whether an error is now set.
        has_error: bool,
    },
}

impl PortalEvent {
    /// Get the topic this event belongs to.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::SessionChanged { .. } | Self::SessionErrorChanged { .. } => EventTopic::Session,
            Self::ReferenceDataChanged { .. } => EventTopic::Reference,
            Self::InquiryStatsChanged
            | Self::InquiryListChanged { .. }
            | Self::CurrentInquiryChanged { .. }
            | Self::FormStateChanged { .. } => EventTopic::Inquiries,
        }
    }

    /// Get the originating store ID.
    #[must_use]
    pub fn source_store(&self) -> u8 {
        match self.topic() {
            EventTopic::Session => 1,
            EventTopic::Reference => 2,
            EventTopic::Inquiries | EventTopic::All => 3,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Store 1 events.
    Session,
    /// Store 2 events.
    Reference,
    /// Store 3 events.
    Inquiries,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &PortalEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
