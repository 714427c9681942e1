//! End-to-end flows through the component and the app.

mod common;

use std::time::Duration;

use gw2link::adapters::mock::MockResponse;
use gw2link::app::{spawn_item_metadata, App, AppMessage};
use gw2link::chatlink::{ChatLink, ChatLinkType};
use gw2link::metadata::ItemMetadataKey;
use gw2link::state::{item, ChatLinkState, ROOT_FRAGMENT};
use gw2link::traits::{Platform, Response};

#[test]
fn test_known_item_link_yields_ids() {
    let state = ChatLinkState::from_encoded("[&AgHcdwDgRhIAAOpfAAAnYAAA]");

    assert_eq!(state.link_type(), Some(ChatLinkType::Item));
    assert_eq!(state.get(item::AMOUNT), Some(1));
    assert_eq!(state.get(item::ITEM_ID), Some(30684));
    assert_eq!(state.get(item::SKIN_ID), Some(4678));
    assert_eq!(state.get(item::FIRST_UPGRADE_SLOT), Some(24554));
    assert_eq!(state.get(item::SECOND_UPGRADE_SLOT), Some(24615));
    assert_eq!(state.fragment(), "[&AgHcdwDgRhIAAOpfAAAnYAAA]");
}

#[test]
fn test_invalid_text_keeps_no_type() {
    let http = common::not_found_http();
    let (component, _) = common::test_component(&http, None);

    component.update_encoded("[&Ag==]");
    let state = component.chat_link();
    assert_eq!(state.link_type(), None);
    assert_eq!(state.encoded(), Some("[&Ag==]"));
    assert!(state.properties().is_empty());
    assert_eq!(state.fragment(), ROOT_FRAGMENT);
}

#[test]
fn test_editing_properties_reencodes() {
    let http = common::not_found_http();
    let (component, _) = common::test_component(&http, Some(ChatLink::item(1, 46762)));

    component.update_property(item::AMOUNT.name(), Some(250));
    component.update_property(item::ITEM_ID.name(), Some(19721));
    assert_eq!(component.chat_link().encoded(), Some("[&AvoJTQAA]"));

    component.update_type(ChatLinkType::Skin);
    assert_eq!(component.chat_link().encoded(), None);
    component.update_property("skin_id", Some(4678));
    assert_eq!(component.chat_link().encoded(), Some("[&CkYSAAA=]"));
}

#[tokio::test]
async fn test_fragment_follows_state() {
    let http = common::not_found_http();
    let (component, platform) = common::test_component(&http, None);
    let _sync = component.spawn_fragment_sync();

    component.update_encoded("[&BnMVAAA=]");
    for _ in 0..50 {
        if platform.navigation_fragment() == "[&BnMVAAA=]" {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(platform.navigation_fragment(), "[&BnMVAAA=]");
    assert_eq!(component.share_url(), "https://link.test/[&BnMVAAA=]");
}

async fn next_message(app: &mut App) -> AppMessage {
    let rx = app.message_rx.as_mut().unwrap();
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a message")
        .expect("channel closed")
}

#[tokio::test]
async fn test_item_metadata_arrives_for_current_link() {
    let http = common::not_found_http();
    http.set_response(
        "https://api.test/v2/items?ids=30684,24554,24615",
        MockResponse::json(
            200,
            r#"[
                {"id": 30684, "name": "Frostfang"},
                {"id": 24554, "name": "Superior Sigil of Air"},
                {"id": 24615, "name": "Superior Sigil of Force"}
            ]"#,
        ),
    );
    http.set_response(
        "https://api.test/v2/skins/4678",
        MockResponse::json(200, r#"{"id": 4678, "name": "Frostfang", "type": "Weapon"}"#),
    );

    let link = gw2link::chatlink::decode_chat_link("[&AgHcdwDgRhIAAOpfAAAnYAAA]").unwrap();
    let (component, _) = common::test_component(&http, Some(link));
    let mut app = App::new(component, 1 << 20);
    app.sync_state();

    for _ in 0..2 {
        let message = next_message(&mut app).await;
        app.handle_message(message);
    }

    assert_eq!(app.item_metadata.item.as_ref().unwrap().name, "Frostfang");
    assert_eq!(
        app.item_metadata.first_upgrade.as_ref().unwrap().name,
        "Superior Sigil of Air"
    );
    assert_eq!(
        app.item_metadata.second_upgrade.as_ref().unwrap().name,
        "Superior Sigil of Force"
    );
    assert_eq!(app.skin.as_ref().unwrap().id, 4678);
}

#[tokio::test]
async fn test_missing_metadata_leaves_blank_slots() {
    let http = common::not_found_http();
    let (component, _) = common::test_component(&http, Some(ChatLink::item(1, 46762)));
    let mut app = App::new(component, 1 << 20);
    app.sync_state();

    let message = next_message(&mut app).await;
    app.handle_message(message);

    assert!(app.item_metadata.item.is_none());
    assert!(app.skin.is_none());
    assert_eq!(
        http.requested_urls(),
        vec!["https://api.test/v2/items?ids=46762".to_string()]
    );
}

#[tokio::test]
async fn test_share_url_follows_synced_fragment() {
    let http = common::not_found_http();
    let (component, platform) = common::test_component(&http, None);
    let mut app = App::new(component, 1 << 20);

    // Nothing stored on the platform yet
    app.component().update_encoded("[&CkYSAAA=]");
    assert_eq!(app.share_url(), "https://link.test/");

    let _sync = app.spawn_fragment_sync();
    let message = next_message(&mut app).await;
    assert!(matches!(&message, AppMessage::FragmentStored(f) if f == "[&CkYSAAA=]"));
    app.handle_message(message);
    assert_eq!(app.share_url(), "https://link.test/[&CkYSAAA=]");

    app.component().update_encoded("[&AdsnAAA=]");
    let message = next_message(&mut app).await;
    app.handle_message(message);
    assert_eq!(platform.navigation_fragment(), "[&AdsnAAA=]");
    assert_eq!(app.share_url(), "https://link.test/[&AdsnAAA=]");

    // Invalid text falls back to the root fragment
    app.component().update_encoded("[&Ag==]");
    let message = next_message(&mut app).await;
    app.handle_message(message);
    assert_eq!(app.share_url(), "https://link.test/");
}

#[tokio::test]
async fn test_slow_response_for_old_link_is_dropped() {
    let http = common::not_found_http();
    http.set_response(
        "https://api.test/v2/items?ids=46762",
        MockResponse::Delayed(
            Duration::from_millis(300),
            Response::json_body(200, r#"[{"id": 46762, "name": "Twilight"}]"#),
        ),
    );
    http.set_response(
        "https://api.test/v2/items?ids=19721",
        MockResponse::json(200, r#"[{"id": 19721, "name": "Glob of Ectoplasm"}]"#),
    );

    let (component, _) = common::test_component(&http, Some(ChatLink::item(1, 46762)));
    let mut app = App::new(component, 1 << 20);
    app.sync_state();
    let old_key = ItemMetadataKey::from_state(&app.chat_link()).unwrap();

    app.component().update_encoded("[&AvoJTQAA]");
    app.sync_state();
    let new_key = ItemMetadataKey::from_state(&app.chat_link()).unwrap();

    // The new link's answer arrives first
    let first = next_message(&mut app).await;
    assert!(matches!(&first, AppMessage::ItemMetadataLoaded { key, .. } if *key == new_key));
    app.handle_message(first);
    assert_eq!(app.item_metadata.item.as_ref().unwrap().name, "Glob of Ectoplasm");

    let second = next_message(&mut app).await;
    assert!(matches!(&second, AppMessage::ItemMetadataLoaded { key, .. } if *key == old_key));
    app.handle_message(second);
    assert_eq!(app.item_metadata.item.as_ref().unwrap().name, "Glob of Ectoplasm");

    assert_eq!(
        http.requested_urls(),
        vec![
            "https://api.test/v2/items?ids=46762".to_string(),
            "https://api.test/v2/items?ids=19721".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_spawned_fetch_for_stale_key_is_ignored() {
    let http = common::not_found_http();
    http.set_response(
        "https://api.test/v2/items?ids=46762",
        MockResponse::json(200, r#"[{"id": 46762, "name": "Twilight"}]"#),
    );

    let (component, _) = common::test_component(&http, Some(ChatLink::Skin { skin_id: 1 }));
    let mut app = App::new(component, 1 << 20);
    app.sync_state();
    let _ = next_message(&mut app).await;

    let stale = ItemMetadataKey {
        item_id: Some(46762),
        ..Default::default()
    };
    let api = app.component().api();
    spawn_item_metadata(api, stale, app.message_sender())
        .await
        .unwrap();

    let message = next_message(&mut app).await;
    assert!(matches!(&message, AppMessage::ItemMetadataLoaded { metadata: Ok(m), .. } if m.item.is_some()));
    app.handle_message(message);
    assert!(app.item_metadata.item.is_none());
}
