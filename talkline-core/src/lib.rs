//! Talkline Core Library
//!
//! Bridge core for the closed-source Talkline customer-messaging SDK:
//! the client lifecycle gate, the structural JSON-to-attribute converter,
//! the event relay, and the trait seam the vendor SDK plugs into.
//!
//! The mobile bindings crate (`talkline-mobile`) layers the remote-call
//! surface on top of this; everything testable lives here.

pub mod config;
pub mod convert;
pub mod error;
pub mod events;
pub mod gate;
pub mod messenger;
pub mod sdk;

pub use config::{Credentials, TalklineConfig};
pub use convert::{
    attribute_from_json, attribute_list_from_json, attributes_from_json, AttributeMap,
    AttributeValue,
};
pub use error::{TalklineError, TalklineResult};
pub use events::{
    CallbackHandler, EventDispatcher, EventHandler, TalklineEvent, UnreadCountRelay,
};
pub use gate::{ClientGate, GateState};
pub use messenger::{Messenger, INVALID_PUSH_MESSAGE};
pub use sdk::mock::{MockSdk, SdkCall};
pub use sdk::{
    Company, LauncherVisibility, MessengerClient, MessengerSdk, PushClient, Registration,
    UnreadCountListener, UserAttributes,
};
