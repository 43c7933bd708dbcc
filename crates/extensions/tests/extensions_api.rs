//! End-to-end tests: resource client over the real reqwest transport against
//! a local mock HTTP server.

use oncall_extensions::{
    Config, Error, Extension, ExtensionsClient, HttpClient, ListExtensionsOptions,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ExtensionsClient<HttpClient> {
    let mut config = Config::new("secret-token");
    config.base_url = server.uri();
    ExtensionsClient::from_config(config).expect("client should build from a valid config")
}

#[tokio::test]
async fn list_sends_set_filters_and_omits_unset_ones() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/extensions"))
        .and(query_param("query", "foo"))
        .and(query_param_is_missing("extension_object_id"))
        .and(query_param_is_missing("extension_schema_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 25,
            "offset": 0,
            "more": false,
            "total": 1,
            "extensions": [{ "id": "PABC12", "name": "Slack notifier" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListExtensionsOptions {
        query: Some("foo".to_string()),
        ..ListExtensionsOptions::default()
    };
    let page = client_for(&server).list(&options).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.extensions[0].name, "Slack notifier");
}

#[tokio::test]
async fn create_round_trips_the_opaque_config() {
    let config_value = json!({
        "fields": [{ "name": "channel", "value": "#incidents" }],
        "notify": null
    });

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extensions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "extension": {
                "id": "PNEW01",
                "type": "extension",
                "name": "Slack notifier",
                "config": config_value
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = Extension {
        name: "Slack notifier".to_string(),
        config: config_value.clone(),
        ..Extension::default()
    };
    let created = client_for(&server).create(&payload).await.unwrap();
    assert_eq!(created.reference.id, "PNEW01");
    assert_eq!(created.config, config_value);
}

#[tokio::test]
async fn get_surfaces_not_found_as_an_undifferentiated_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/extensions/PMISSING"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = client_for(&server).get("PMISSING").await.unwrap_err();
    assert!(matches!(err, Error::Status { .. }));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_returns_unit_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/extensions/PABC12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete("PABC12").await.unwrap();
}
