//! # Shared Bus - Change Notification for Portal Stores
//!
//! Every store publishes a [`PortalEvent`] after it finishes mutating its
//! own state. Consumers subscribe with an [`EventFilter`] and read the new
//! state through the store's getters.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Store       │                    │  Consumer    │
//! │              │    publish()       │  (UI, CLI)   │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! Stores never subscribe to each other: the bus is outbound only.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, PortalEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;
