//! Exported-constructor tests.
//!
//! Kept in their own test binary: vendor registration is process-wide and
//! must not leak into the boundary tests.

use std::sync::Arc;

use talkline_core::{MockSdk, SdkCall};
use talkline_mobile::{register_vendor_sdk, PluginError, TalklinePlugin};

#[test]
fn constructor_initializes_from_static_config() {
    let sdk = MockSdk::new();
    register_vendor_sdk(Arc::new(sdk.clone()));

    let _plugin =
        TalklinePlugin::new(Some(r#"{"apiKey": "key-9", "appId": "app-9"}"#.into())).unwrap();

    assert_eq!(
        sdk.calls()[0],
        SdkCall::Initialize {
            api_key: "key-9".into(),
            app_id: "app-9".into(),
        }
    );
}

#[test]
fn constructor_rejects_malformed_config() {
    let err = TalklinePlugin::new(Some("{not json".into())).unwrap_err();
    assert!(matches!(err, PluginError::InvalidInput(_)));
}
