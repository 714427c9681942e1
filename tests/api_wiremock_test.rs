//! The API client over real HTTP against a local mock server.

use std::sync::Arc;

use gw2link::adapters::ReqwestHttpClient;
use gw2link::api::{items_by_ids, skins_by_id, Gw2ApiClient, SCHEMA_VERSION_HEADER};
use gw2link::config::{AppConfig, DEFAULT_SCHEMA_VERSION};
use gw2link::error::NetworkError;
use gw2link::metadata::{fetch_item_metadata, fetch_skin_metadata, ItemMetadataKey, SkinMetadataKey};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> Gw2ApiClient {
    let config = AppConfig::default().with_api_base_url(server.uri());
    Gw2ApiClient::from_config(Arc::new(ReqwestHttpClient::new()), &config)
}

#[tokio::test]
async fn test_skin_request_sends_schema_and_lang() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/skins/4678"))
        .and(query_param("lang", "en"))
        .and(header(SCHEMA_VERSION_HEADER, DEFAULT_SCHEMA_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 4678,
            "name": "Frostfang",
            "type": "Weapon",
            "icon": "https://render.test/frostfang.png",
            "rarity": "Exotic"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let skin = api_for(&server).execute(&skins_by_id(4678)).await.unwrap();
    assert_eq!(skin.id, 4678);
    assert_eq!(skin.name, "Frostfang");
    assert_eq!(skin.icon.as_deref(), Some("https://render.test/frostfang.png"));
}

#[tokio::test]
async fn test_partial_content_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/items"))
        .and(query_param("ids", "46762,1"))
        .respond_with(
            ResponseTemplate::new(206)
                .set_body_json(serde_json::json!([{"id": 46762, "name": "Zojja's Greatsword"}])),
        )
        .mount(&server)
        .await;

    let items = api_for(&server)
        .execute(&items_by_ids(&[46762, 1]))
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 46762);
}

#[tokio::test]
async fn test_not_found_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/skins/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "text": "no such id"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.execute(&skins_by_id(1)).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, NetworkError::HttpStatus { status: 404, .. }));

    let skin = fetch_skin_metadata(&api, &SkinMetadataKey { skin_id: Some(1) }).await;
    assert!(matches!(skin, Ok(None)));
}

#[tokio::test]
async fn test_item_metadata_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/items"))
        .and(query_param("ids", "30684,24554"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 24554, "name": "Superior Sigil of Air"},
            {"id": 30684, "name": "Frostfang"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let key = ItemMetadataKey {
        item_id: Some(30684),
        first_upgrade_slot: Some(24554),
        second_upgrade_slot: Some(24554),
    };
    let metadata = fetch_item_metadata(&api_for(&server), &key).await.unwrap();

    assert_eq!(metadata.item.unwrap().name, "Frostfang");
    assert_eq!(metadata.first_upgrade.as_ref().unwrap().id, 24554);
    assert_eq!(metadata.second_upgrade, metadata.first_upgrade);
}

#[tokio::test]
async fn test_garbage_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).execute(&skins_by_id(2)).await.unwrap_err();
    assert!(matches!(err, NetworkError::InvalidResponse { .. }));
}
