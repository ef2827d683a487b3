//! Tests for the messenger orchestrator: vendor forwarding and the push
//! hard-failure contract.

use std::sync::Arc;

use serde_json::json;

use talkline_core::{
    attributes_from_json, Company, GateState, LauncherVisibility, Messenger, MockSdk,
    Registration, SdkCall, TalklineConfig, TalklineError, UserAttributes, INVALID_PUSH_MESSAGE,
};

fn open_messenger(sdk: &MockSdk) -> Messenger {
    let messenger = Messenger::new(
        Arc::new(sdk.clone()),
        TalklineConfig::with_keys("key-1", "app-1"),
    );
    messenger.load();
    messenger
}

/// Registration after `load_with_keys` reaches the vendor with
/// the email set and the user ID unset.
#[test]
fn register_identified_user_forwards_email_only() {
    let sdk = MockSdk::new();
    let messenger = Messenger::new(Arc::new(sdk.clone()), TalklineConfig::default());

    messenger.load_with_keys(Some("key1".into()), Some("app1".into()));
    assert_eq!(messenger.gate_state(), GateState::Open);

    messenger.register_identified_user(&Registration::new().with_email("a@b.com"));

    assert!(sdk.calls().contains(&SdkCall::RegisterIdentifiedUser(
        Registration {
            email: Some("a@b.com".into()),
            user_id: None,
        }
    )));
}

#[test]
fn update_user_forwards_attributes() {
    let sdk = MockSdk::new();
    let messenger = open_messenger(&sdk);

    let payload = json!({"plan": "pro", "seats": 3});
    let attributes = UserAttributes {
        user_id: Some("u-1".into()),
        name: Some("Ada".into()),
        company: Some(Company::new("c-1", "Initech")),
        custom_attributes: attributes_from_json(payload.as_object()),
        ..UserAttributes::default()
    };
    messenger.update_user(&attributes);

    assert!(sdk.calls().contains(&SdkCall::UpdateUser(attributes)));
}

#[test]
fn ui_operations_forward_to_vendor() {
    let sdk = MockSdk::new();
    let messenger = open_messenger(&sdk);

    messenger.display_messenger();
    messenger.display_message_composer("hi there");
    messenger.display_help_center();
    messenger.hide_messenger();
    messenger.set_launcher_visibility(LauncherVisibility::Visible);
    messenger.set_launcher_visibility(LauncherVisibility::Gone);
    messenger.display_carousel("carousel-9");
    messenger.display_article("article-7");
    messenger.set_bottom_padding(42);

    let calls = sdk.calls();
    for expected in [
        SdkCall::DisplayMessenger,
        SdkCall::DisplayMessageComposer {
            initial_message: "hi there".into(),
        },
        SdkCall::DisplayHelpCenter,
        SdkCall::HideMessenger,
        SdkCall::SetLauncherVisibility(LauncherVisibility::Visible),
        SdkCall::SetLauncherVisibility(LauncherVisibility::Gone),
        SdkCall::DisplayCarousel {
            carousel_id: "carousel-9".into(),
        },
        SdkCall::DisplayArticle {
            article_id: "article-7".into(),
        },
        SdkCall::SetBottomPadding { padding: 42 },
    ] {
        assert!(calls.contains(&expected), "missing {:?}", expected);
    }
}

#[test]
fn log_event_forwards_converted_metadata() {
    let sdk = MockSdk::new();
    let messenger = open_messenger(&sdk);

    let payload = json!({"source": "checkout", "attempt": 2, "stale": null});
    let metadata = attributes_from_json(payload.as_object());
    messenger.log_event("purchase", metadata.as_ref());

    let recorded = sdk
        .calls()
        .into_iter()
        .find_map(|c| match c {
            SdkCall::LogEvent { name, metadata } if name == "purchase" => Some(metadata),
            _ => None,
        })
        .expect("event forwarded");
    let recorded = recorded.expect("metadata present");
    assert_eq!(recorded.len(), 2);
    assert!(!recorded.contains_key("stale"));
}

#[test]
fn log_event_without_metadata() {
    let sdk = MockSdk::new();
    let messenger = open_messenger(&sdk);

    messenger.log_event("opened", None);

    assert!(sdk.calls().contains(&SdkCall::LogEvent {
        name: "opened".into(),
        metadata: None,
    }));
}

#[test]
fn identity_verification_forwards() {
    let sdk = MockSdk::new();
    let messenger = open_messenger(&sdk);

    messenger.set_user_hash("hmac-1");
    messenger.set_user_jwt("jwt-1");

    assert!(sdk.calls().contains(&SdkCall::SetUserHash {
        hmac: "hmac-1".into()
    }));
    assert!(sdk.calls().contains(&SdkCall::SetUserJwt { jwt: "jwt-1".into() }));
}

// === Push: the only hard-failure operations ===

/// Push token submission works without an open gate; the push client is
/// independent of the messenger client.
#[test]
fn push_token_works_with_closed_gate() {
    let sdk = MockSdk::new();
    let messenger = Messenger::new(Arc::new(sdk.clone()), TalklineConfig::default());

    messenger.send_push_token("token-1").unwrap();

    assert_eq!(
        sdk.calls(),
        vec![SdkCall::SendToken {
            token: "token-1".into()
        }]
    );
}

#[test]
fn push_token_failure_surfaces_to_caller() {
    let sdk = MockSdk::new();
    sdk.set_fail_send_token(true);
    let messenger = open_messenger(&sdk);

    let err = messenger.send_push_token("token-1").unwrap_err();
    assert!(matches!(err, TalklineError::PushToken(_)));
}

/// A payload the vendor classifier rejects fails with the
/// exact message, and the vendor never sees it.
#[test]
fn unrecognized_push_is_reported() {
    let sdk = MockSdk::new();
    sdk.set_reject_push(true);
    let messenger = open_messenger(&sdk);

    let payload = json!({"title": "unrelated"});
    let attributes = attributes_from_json(payload.as_object()).unwrap();
    let err = messenger.receive_push(&attributes).unwrap_err();

    assert_eq!(err.to_string(), INVALID_PUSH_MESSAGE);
    assert!(!sdk
        .calls()
        .iter()
        .any(|c| matches!(c, SdkCall::HandlePush { .. })));
}

#[test]
fn recognized_push_is_forwarded() {
    let sdk = MockSdk::new();
    let messenger = open_messenger(&sdk);

    let payload = json!({"conversation_id": "c-1", "body": "hello"});
    let attributes = attributes_from_json(payload.as_object()).unwrap();
    messenger.receive_push(&attributes).unwrap();

    assert!(sdk
        .calls()
        .iter()
        .any(|c| matches!(c, SdkCall::HandlePush { .. })));
}

#[test]
fn push_handling_failure_surfaces_to_caller() {
    let sdk = MockSdk::new();
    sdk.set_fail_handle_push(true);
    let messenger = open_messenger(&sdk);

    let payload = json!({"conversation_id": "c-1"});
    let attributes = attributes_from_json(payload.as_object()).unwrap();
    let err = messenger.receive_push(&attributes).unwrap_err();

    assert!(matches!(err, TalklineError::PushHandling(_)));
}
