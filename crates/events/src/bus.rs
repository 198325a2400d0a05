//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is intentionally **lightweight** and makes minimal assumptions:
//!
//! - **Transport-agnostic**: in-memory channels, message queues, brokers.
//! - **At-least-once delivery**: a message may arrive more than once and out
//!   of order; consumers must be idempotent. The delivery-confirmation
//!   handler relies on exactly this contract.
//! - **No persistence**: the bus distributes messages, it does not store
//!   them. The repository is the source of truth; an operation persists its
//!   aggregate *before* publishing anything.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to an event stream.
///
/// Each subscription receives a copy of every message published to the bus
/// (broadcast semantics). Subscriptions are designed for single-threaded
/// consumption: one subscription per consumer thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish` can fail (bus full, transport error). Callers that have already
/// persisted their aggregate may treat a publish failure as non-fatal and
/// retry or log it; the stored state is not affected.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
