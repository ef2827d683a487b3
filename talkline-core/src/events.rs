//! Event System
//!
//! Callbacks for Talkline bridge events.
//!
//! The catalog is fixed at three entries. The window events are named after
//! the vendor messenger window: its overlay appearing is what pauses the
//! host activity, so the pause hook emits `WindowDidShow` and the resume
//! hook emits `WindowDidHide`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::sdk::UnreadCountListener;

/// Events emitted by the Talkline bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalklineEvent {
    /// The vendor messenger window covered the host application.
    WindowDidShow,

    /// The vendor messenger window went away and the host resumed.
    WindowDidHide,

    /// The vendor reported a new unread conversation count.
    UnreadCountChanged {
        /// Number of unread conversations.
        unread_count: u32,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive Talkline events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: TalklineEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(TalklineEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(TalklineEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(TalklineEvent) + Send + Sync,
{
    fn on_event(&self, event: TalklineEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
///
/// Handlers are shared with the unread-count relay, which dispatches from
/// whatever thread the vendor SDK chooses, so registration goes through a
/// lock rather than `&mut`.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&self, handler: Arc<dyn EventHandler>) {
        self.handlers.write().push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&self) {
        self.handlers.write().clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Dispatches an event to all handlers.
    ///
    /// The handler list is cloned out of the lock first, so a handler may
    /// register or remove listeners without deadlocking.
    pub fn dispatch(&self, event: TalklineEvent) {
        let handlers = self.handlers.read().clone();
        for handler in handlers {
            handler.on_event(event.clone());
        }
    }
}

/// The single named relay between the vendor's unread-count callback and
/// the bridge dispatcher.
///
/// One instance is held by the gate for the process lifetime and attached
/// to the vendor client exactly once per successful initialization. The
/// callback only reads shared state; it never touches the gate.
pub struct UnreadCountRelay {
    events: Arc<EventDispatcher>,
}

impl UnreadCountRelay {
    /// Creates a relay that forwards into the given dispatcher.
    pub fn new(events: Arc<EventDispatcher>) -> Self {
        UnreadCountRelay { events }
    }
}

impl UnreadCountListener for UnreadCountRelay {
    fn on_count_update(&self, unread_count: u32) {
        self.events
            .dispatch(TalklineEvent::UnreadCountChanged { unread_count });
    }
}
