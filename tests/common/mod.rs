//! Common test utilities for integration tests.
//!
//! Known chat codes with the links they decode to, plus builders for a
//! component wired to in-memory adapters.

use std::sync::Arc;

use gw2link::adapters::mock::{MockHttpClient, MockResponse, RecordingPlatform};
use gw2link::api::Gw2ApiClient;
use gw2link::chatlink::ChatLink;
use gw2link::component::MainComponent;

/// Chat codes as the game produces them, with their decoded form.
pub fn known_links() -> Vec<(&'static str, ChatLink)> {
    vec![
        ("[&AgGqtgAA]", ChatLink::item(1, 46762)),
        (
            "[&AgHcdwDgRhIAAOpfAAAnYAAA]",
            ChatLink::Item {
                amount: 1,
                item_id: 30684,
                skin_id: Some(4678),
                first_upgrade_slot: Some(24554),
                second_upgrade_slot: Some(24615),
            },
        ),
        ("[&AvoJTQAA]", ChatLink::item(250, 19721)),
        ("[&CkYSAAA=]", ChatLink::Skin { skin_id: 4678 }),
        ("[&AdsnAAA=]", ChatLink::Coin { copper: 10203 }),
        ("[&BDgAAAA=]", ChatLink::Map { poi_id: 56 }),
        ("[&BnMVAAA=]", ChatLink::Skill { skill_id: 5491 }),
        ("[&B/IDAAA=]", ChatLink::Trait { trait_id: 1010 }),
        ("[&CQEAAAA=]", ChatLink::Recipe { recipe_id: 1 }),
        ("[&CwEAAAA=]", ChatLink::Outfit { outfit_id: 1 }),
        ("[&AwoAAAA=]", ChatLink::NpcText { text_id: 10 }),
        (
            "[&DAYAAAAmAAAA]",
            ChatLink::WvwObjective {
                objective_id: 6,
                map_id: 38,
            },
        ),
    ]
}

/// A mock HTTP client answering 404 for anything not configured.
pub fn not_found_http() -> MockHttpClient {
    let http = MockHttpClient::new();
    http.set_default_response(MockResponse::json(404, r#"{"text":"no such id"}"#));
    http
}

/// API client over `http` with a fixed base URL and no language.
pub fn test_api(http: &MockHttpClient) -> Arc<Gw2ApiClient> {
    Arc::new(Gw2ApiClient::new(Arc::new(http.clone())).with_base_url("https://api.test"))
}

/// Component over in-memory adapters.
#[allow(dead_code)]
pub fn test_component(
    http: &MockHttpClient,
    initial: Option<ChatLink>,
) -> (Arc<MainComponent>, RecordingPlatform) {
    let platform = RecordingPlatform::new();
    let component = MainComponent::new(test_api(http), Arc::new(platform.clone()), initial)
        .with_site_url("https://link.test");
    (Arc::new(component), platform)
}
