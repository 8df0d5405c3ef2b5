//! `RestStore` against a mock PostgREST-style proxy.

use std::time::Duration;

use adsmith_core::dto::CreateCampaign;
use adsmith_core::tone::Tone;
use adsmith_db::{CampaignStore, RestStore, StoreError};
use assert_matches::assert_matches;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "service-key";

fn store_for(server: &MockServer) -> RestStore {
    RestStore::new(
        &format!("{}/rest/v1", server.uri()),
        API_KEY.to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn creative_row(id: &str) -> Value {
    json!({
        "id": id,
        "campaignId": "c1",
        "headlineId": "h1",
        "imageId": "i1",
        "status": "ACTIVE",
        "createdAt": "2025-06-01T10:03:00+00:00"
    })
}

fn headline_row(id: &str, text: &str) -> Value {
    json!({
        "id": id,
        "text": text,
        "status": "READY",
        "campaignId": "c1",
        "createdAt": "2025-06-01T10:01:00+00:00"
    })
}

// ---------------------------------------------------------------------------
// Request shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upsert_creative_merges_on_the_unique_triple() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/creatives"))
        .and(query_param("on_conflict", "campaign_id,headline_id,image_id"))
        .and(header("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([creative_row("cr1")])))
        .expect(1)
        .mount(&server)
        .await;

    let creative = store_for(&server)
        .upsert_creative("c1", "h1", "i1")
        .await
        .unwrap();
    assert_eq!(creative.id, "cr1");
    assert_eq!(creative.status, "ACTIVE");

    let request = &server.received_requests().await.unwrap()[0];
    let prefer = request.headers.get("prefer").unwrap().to_str().unwrap();
    assert!(prefer.contains("resolution=merge-duplicates"));
    assert!(prefer.contains("return=representation"));
    assert_eq!(
        request.headers.get("authorization").unwrap().to_str().unwrap(),
        "Bearer service-key"
    );
    let body: Value = request.body_json().unwrap();
    assert_eq!(
        body,
        json!({
            "campaign_id": "c1",
            "headline_id": "h1",
            "image_id": "i1",
            "status": "ACTIVE"
        })
    );
}

#[tokio::test]
async fn lookups_filter_by_id_with_eq() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/headlines"))
        .and(query_param("id", "eq.h1"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([headline_row("h1", "Jetzt zugreifen")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/images"))
        .and(query_param("id", "eq.missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let headline = store.find_headline("h1").await.unwrap().unwrap();
    assert_eq!(headline.text, "Jetzt zugreifen");
    assert_eq!(store.find_image("missing").await.unwrap(), None);
}

#[tokio::test]
async fn delete_creative_targets_one_id_and_reports_absence() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/creatives"))
        .and(query_param("id", "eq.cr1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([creative_row("cr1")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/creatives"))
        .and(query_param("id", "eq.gone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    let removed = store.delete_creative("cr1").await.unwrap();
    assert_eq!(removed.map(|c| c.id).as_deref(), Some("cr1"));
    assert_eq!(store.delete_creative("gone").await.unwrap(), None);
}

#[tokio::test]
async fn list_campaigns_orders_newest_first_and_flattens_counts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/campaigns"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "c2",
            "name": "Winter Deals",
            "industry": "Retail",
            "audience": "Families",
            "tone": "CASUAL",
            "createdAt": "2025-06-02T10:00:00+00:00",
            "headlines": [{"count": 4}],
            "images": [{"count": 2}],
            "creatives": [{"count": 1}]
        }])))
        .mount(&server)
        .await;

    let summaries = store_for(&server).list_campaigns().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].headline_count, 4);
    assert_eq!(summaries[0].image_count, 2);
    assert_eq!(summaries[0].creative_count, 1);
}

#[tokio::test]
async fn create_campaign_stores_the_upper_case_tone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/campaigns"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": "c1",
            "name": "Summer Sale",
            "industry": "Retail",
            "audience": "Young adults",
            "tone": "PROFESSIONAL",
            "description": null,
            "createdAt": "2025-06-01T10:00:00+00:00"
        }])))
        .mount(&server)
        .await;

    let input = CreateCampaign {
        name: "Summer Sale".into(),
        industry: "Retail".into(),
        audience: "Young adults".into(),
        tone: Tone::Professional,
        description: None,
    };
    let campaign = store_for(&server).create_campaign(&input).await.unwrap();
    assert_eq!(campaign.id, "c1");

    let request = &server.received_requests().await.unwrap()[0];
    let body: Value = request.body_json().unwrap();
    assert_eq!(body["tone"], "PROFESSIONAL");
    assert_eq!(body["description"], Value::Null);
}

// ---------------------------------------------------------------------------
// Headline batch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn headline_batch_is_one_bulk_insert() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/headlines"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            headline_row("h1", "eins"),
            headline_row("h2", "zwei")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let texts = vec!["eins".to_string(), "zwei".to_string()];
    let created = store_for(&server)
        .create_headlines("c1", &texts)
        .await
        .unwrap();
    assert_eq!(created.len(), 2);

    let request = &server.received_requests().await.unwrap()[0];
    let body: Value = request.body_json().unwrap();
    assert_eq!(
        body,
        json!([
            {"text": "eins", "status": "READY", "campaign_id": "c1"},
            {"text": "zwei", "status": "READY", "campaign_id": "c1"}
        ])
    );
}

#[tokio::test]
async fn headline_batch_with_missing_rows_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/headlines"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([headline_row("h1", "eins")])),
        )
        .mount(&server)
        .await;

    let texts = vec!["eins".to_string(), "zwei".to_string()];
    let err = store_for(&server)
        .create_headlines("c1", &texts)
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Decode(msg) if msg.contains("returned 1 rows, expected 2"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/images"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string(r#"{"code":"23503","message":"fk"}"#),
        )
        .mount(&server)
        .await;

    let err = store_for(&server)
        .create_image("missing", "https://cdn.example/1.png", "prompt")
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Api { status: 409, ref body } if body.contains("23503"));
}

#[tokio::test]
async fn health_check_surfaces_unavailable_proxy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/campaigns"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = store_for(&server).health_check().await.unwrap_err();
    assert_matches!(err, StoreError::Api { status: 503, .. });
}

#[tokio::test]
async fn write_without_returned_row_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/creatives"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .upsert_creative("c1", "h1", "i1")
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Decode(msg) if msg.contains("creatives"));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = store_for(&server).find_campaign("c1").await.unwrap_err();
    assert_matches!(err, StoreError::Decode(_));
}
