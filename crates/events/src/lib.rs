//! Transport-agnostic event plumbing.
//!
//! The orchestration layer emits domain events through an explicit outbound
//! port ([`EventBus`]) and consumes inbound signals through subscriptions,
//! so the domain has no dependency on any particular pub/sub runtime.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
