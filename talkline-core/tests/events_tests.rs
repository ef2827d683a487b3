//! Tests for the event system and the unread-count relay.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use talkline_core::{
    CallbackHandler, EventDispatcher, EventHandler, Messenger, MockSdk, TalklineConfig,
    TalklineEvent, UnreadCountListener, UnreadCountRelay,
};

#[test]
fn callback_handler_invokes_closure() {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();

    let handler = CallbackHandler::new(move |_event| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    handler.on_event(TalklineEvent::WindowDidShow);

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn dispatcher_tracks_handler_count() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);

    dispatcher.add_handler(Arc::new(CallbackHandler::new(|_| {})));
    assert_eq!(dispatcher.handler_count(), 1);

    dispatcher.clear_handlers();
    assert_eq!(dispatcher.handler_count(), 0);
}

#[test]
fn dispatcher_reaches_every_handler() {
    let count = Arc::new(AtomicUsize::new(0));
    let dispatcher = EventDispatcher::new();

    for _ in 0..3 {
        let count_clone = count.clone();
        dispatcher.add_handler(Arc::new(CallbackHandler::new(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        })));
    }

    dispatcher.dispatch(TalklineEvent::WindowDidHide);

    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn relay_translates_count_updates() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();

    let dispatcher = Arc::new(EventDispatcher::new());
    dispatcher.add_handler(Arc::new(CallbackHandler::new(move |event| {
        seen_clone.lock().push(event);
    })));

    let relay = UnreadCountRelay::new(dispatcher);
    relay.on_count_update(3);

    assert_eq!(
        seen.lock().as_slice(),
        &[TalklineEvent::UnreadCountChanged { unread_count: 3 }]
    );
}

/// A vendor unread-count callback with count 5 reaches every
/// registered listener as `UnreadCountChanged { 5 }`.
#[test]
fn vendor_unread_callback_reaches_all_listeners() {
    let sdk = MockSdk::new();
    let messenger = Messenger::new(
        Arc::new(sdk.clone()),
        TalklineConfig::with_keys("key-1", "app-1"),
    );
    messenger.load();

    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    for seen in [&first, &second] {
        let seen_clone = seen.clone();
        messenger.add_event_handler(Arc::new(CallbackHandler::new(move |event| {
            seen_clone.lock().push(event);
        })));
    }

    sdk.emit_unread(5);

    let expected = [TalklineEvent::UnreadCountChanged { unread_count: 5 }];
    assert_eq!(first.lock().as_slice(), &expected);
    assert_eq!(second.lock().as_slice(), &expected);
}

/// The pause hook announces the messenger window, the resume hook its
/// disappearance.
#[test]
fn lifecycle_hooks_emit_window_events() {
    let sdk = MockSdk::new();
    let messenger = Messenger::new(Arc::new(sdk), TalklineConfig::default());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    messenger.add_event_handler(Arc::new(CallbackHandler::new(move |event| {
        seen_clone.lock().push(event);
    })));

    messenger.handle_pause();
    messenger.handle_resume();

    assert_eq!(
        seen.lock().as_slice(),
        &[TalklineEvent::WindowDidShow, TalklineEvent::WindowDidHide]
    );
}

/// Window events fire even while the gate is closed; they describe host
/// lifecycle, not vendor state.
#[test]
fn window_events_do_not_require_open_gate() {
    let sdk = MockSdk::new();
    let messenger = Messenger::new(Arc::new(sdk.clone()), TalklineConfig::default());
    messenger.load();

    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    messenger.add_event_handler(Arc::new(CallbackHandler::new(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    })));

    messenger.handle_pause();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(sdk.calls().is_empty());
}
