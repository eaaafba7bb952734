//! EventSink trait and the buffered event log
//!
//! The sink is the only boundary between an engine and whatever renders
//! its steps. Engines call it synchronously; nothing is queued on the
//! engine side.

use super::{Event, EventKind, Signal};
use serde::Serialize;

/// Receiver of step-level notifications.
///
/// Implementations must not call back into the emitting engine.
pub trait EventSink {
    /// Deliver a discriminated event.
    fn emit(&mut self, event: Event);

    /// Deliver a single-value result on the secondary channel.
    fn signal(&mut self, signal: Signal);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: Event) {
        (**self).emit(event);
    }

    fn signal(&mut self, signal: Signal) {
        (**self).signal(signal);
    }
}

/// One entry of an [`EventLog`], in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum Notification {
    Event(Event),
    Signal(Signal),
}

impl Notification {
    /// The event kind, or `None` for a signal.
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Self::Event(event) => Some(event.kind),
            Self::Signal(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Self::Event(event) => Some(event),
            Self::Signal(_) => None,
        }
    }

    pub fn as_signal(&self) -> Option<&Signal> {
        match self {
            Self::Event(_) => None,
            Self::Signal(signal) => Some(signal),
        }
    }
}

/// Buffered, ordered queue of notifications.
///
/// The default sink of every engine. Callers drain it after each operation.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<Notification>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered notification, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Buffered events only, skipping signals.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter().filter_map(Notification::as_event)
    }

    pub fn signals(&self) -> impl Iterator<Item = &Signal> {
        self.entries.iter().filter_map(Notification::as_signal)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: Event) {
        tracing::trace!(kind = %event.kind, message = %event.message, "event");
        self.entries.push(Notification::Event(event));
    }

    fn signal(&mut self, signal: Signal) {
        tracing::trace!(?signal, "signal");
        self.entries.push(Notification::Signal(signal));
    }
}
