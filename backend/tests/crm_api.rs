//! Calls against a fake CRM backend served by axum on a local port.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use backend::{
    api::{
        saved_searches::create_saved_search,
        search::{apply_bulk_operation, fetch_filter_descriptor, fetch_search_suggestions, load_more_results, search_for_results},
    },
    crm_utils::crm_client::CrmClient,
};
use common::{
    bulk_operation::{BulkAction, BulkActionData, BulkOperationRequest},
    entity_type::EntityType,
    saved_search::SavedSearch,
    search_query::{FilterValue, RangeBounds, SearchPayload, SortOrder},
    search_result::SearchResultSet,
    selection::SelectionId,
};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct RecordedRequest {
    path: String,
    params: Vec<(String, String)>,
    body: Option<Value>,
    authorization: Option<String>,
}

#[derive(Clone, Default)]
struct FakeCrm {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeCrm {
    fn record(&self, path: &str, params: Vec<(String, String)>, body: Option<Value>, headers: &HeaderMap) {
        let authorization = headers.get("authorization").and_then(|h| h.to_str().ok()).map(|s| s.to_string());
        self.requests.lock().unwrap().push(RecordedRequest { path: path.to_string(), params, body, authorization });
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn search(State(crm): State<FakeCrm>, headers: HeaderMap, Query(params): Query<Vec<(String, String)>>) -> Json<Value> {
    crm.record("/api/search/", params, None, &headers);
    Json(json!({"results": [{"id": 1, "name": "Acme"}, {"id": 2, "name": "Acme Labs"}], "total_count": 75}))
}

async fn search_post(State(crm): State<FakeCrm>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    crm.record("/api/search/", vec![], Some(body), &headers);
    Json(json!({"results": [{"id": 51, "name": "Next"}]}))
}

async fn search_advanced(State(crm): State<FakeCrm>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    crm.record("/api/search/advanced/", vec![], Some(body), &headers);
    Json(json!({"results": [{"id": 52}, {"id": 53}]}))
}

async fn filters(State(crm): State<FakeCrm>, headers: HeaderMap, Query(params): Query<Vec<(String, String)>>) -> Json<Value> {
    crm.record("/api/search/filters/", params, None, &headers);
    Json(json!({
        "contacts": {
            "text_filters": ["name", "email"],
            "choice_filters": {"status": ["active", "inactive"]},
            "date_filters": ["created_at"],
            "number_filters": ["age"]
        }
    }))
}

async fn suggestions(State(crm): State<FakeCrm>, headers: HeaderMap, Query(params): Query<Vec<(String, String)>>) -> Json<Value> {
    crm.record("/api/search/suggestions/", params, None, &headers);
    Json(json!({"suggestions": ["John", "Johnson"]}))
}

async fn bulk(State(crm): State<FakeCrm>, headers: HeaderMap, Json(body): Json<Value>) -> StatusCode {
    crm.record("/api/search/bulk-operations/", vec![], Some(body), &headers);
    StatusCode::NO_CONTENT
}

async fn saved_searches(State(crm): State<FakeCrm>, headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let name = body["name"].clone();
    crm.record("/api/saved-searches/", vec![], Some(body), &headers);
    (StatusCode::CREATED, Json(json!({"id": 17, "name": name, "is_public": false})))
}

async fn spawn_fake_crm() -> (FakeCrm, CrmClient) {
    spawn_fake_crm_with_token(None).await
}

async fn spawn_fake_crm_with_token(token: Option<String>) -> (FakeCrm, CrmClient) {
    let crm = FakeCrm::default();
    let router = Router::new()
        .route("/api/search/", get(search).post(search_post))
        .route("/api/search/advanced/", post(search_advanced))
        .route("/api/search/filters/", get(filters))
        .route("/api/search/suggestions/", get(suggestions))
        .route("/api/search/bulk-operations/", post(bulk))
        .route("/api/saved-searches/", post(saved_searches))
        .with_state(crm.clone());
    let base_url = serve(router).await;
    let client = CrmClient::new(base_url, token, Duration::from_secs(5)).expect("client");
    (crm, client)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn param<'a>(req: &'a RecordedRequest, key: &str) -> Option<&'a str> {
    req.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[tokio::test]
async fn search_sends_flattened_query_params() {
    let (crm, client) = spawn_fake_crm().await;
    let mut payload = SearchPayload { q: "acme corp".to_string(), entity_type: EntityType::Deals, sort_order: SortOrder::Asc, ..Default::default() };
    payload.filters.insert("stage".to_string(), FilterValue::Text("won".to_string()));
    payload.filters.insert("value".to_string(), FilterValue::Range(RangeBounds { gte: Some("1000".to_string()), lte: None }));

    let response = search_for_results(&client, &payload).await.expect("search");
    assert_eq!(response.total_count, 75);
    assert!(matches!(response.results, SearchResultSet::Flat(ref items) if items.len() == 2));

    let requests = crm.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(param(req, "q"), Some("acme corp"));
    assert_eq!(param(req, "type"), Some("deals"));
    assert_eq!(param(req, "filter_stage"), Some("won"));
    assert_eq!(param(req, "filter_value__gte"), Some("1000"));
    assert_eq!(param(req, "sort_order"), Some("asc"));
    assert_eq!(param(req, "limit"), Some("50"));
    assert_eq!(param(req, "offset"), None);
    assert_eq!(req.authorization, None);
}

#[tokio::test]
async fn filter_descriptor_is_taken_from_the_type_entry() {
    let (crm, client) = spawn_fake_crm().await;
    let descriptor = fetch_filter_descriptor(&client, EntityType::Contacts).await.expect("filters");
    assert_eq!(descriptor.text_filters, vec!["name".to_string(), "email".to_string()]);
    assert_eq!(descriptor.number_filters, vec!["age".to_string()]);

    let missing = fetch_filter_descriptor(&client, EntityType::Invoices).await.expect("filters");
    assert!(missing.is_empty());

    let requests = crm.requests();
    assert_eq!(param(&requests[0], "entity_type"), Some("contacts"));
    assert_eq!(param(&requests[1], "entity_type"), Some("invoices"));
}

#[tokio::test]
async fn suggestions_are_scoped_by_type() {
    let (crm, client) = spawn_fake_crm().await;
    let suggestions = fetch_search_suggestions(&client, "jo", EntityType::Contacts).await.expect("suggestions");
    assert_eq!(suggestions, vec!["John".to_string(), "Johnson".to_string()]);
    let req = &crm.requests()[0];
    assert_eq!(param(req, "q"), Some("jo"));
    assert_eq!(param(req, "type"), Some("contacts"));
}

#[tokio::test]
async fn load_more_picks_endpoint_by_filters_and_sends_offset() {
    let (crm, client) = spawn_fake_crm().await;
    let plain = SearchPayload { q: "acme".to_string(), entity_type: EntityType::Accounts, ..Default::default() };
    let more = load_more_results(&client, &plain, 50).await.expect("load more");
    assert_eq!(more.len(), 1);

    let mut filtered = plain.clone();
    filtered.filters.insert("industry".to_string(), FilterValue::Text("retail".to_string()));
    let more = load_more_results(&client, &filtered, 100).await.expect("load more");
    assert_eq!(more.iter().map(|i| i.id).collect::<Vec<_>>(), vec![52, 53]);

    let requests = crm.requests();
    assert_eq!(requests[0].path, "/api/search/");
    assert_eq!(requests[0].body.as_ref().unwrap()["offset"], json!(50));
    assert_eq!(requests[0].body.as_ref().unwrap()["q"], json!("acme"));
    assert_eq!(requests[1].path, "/api/search/advanced/");
    assert_eq!(requests[1].body.as_ref().unwrap()["offset"], json!(100));
    assert_eq!(requests[1].body.as_ref().unwrap()["filters"], json!({"industry": "retail"}));
}

#[tokio::test]
async fn bulk_operation_posts_composite_ids() {
    let (crm, client) = spawn_fake_crm().await;
    let request = BulkOperationRequest {
        action: BulkAction::Update,
        items: vec![SelectionId::new(EntityType::Contacts, 1), SelectionId::new(EntityType::Accounts, 1)],
        data: BulkActionData { status: Some("inactive".to_string()), ..Default::default() },
    };
    let answer = apply_bulk_operation(&client, &request).await.expect("bulk");
    assert_eq!(answer, Value::Null);
    let req = &crm.requests()[0];
    assert_eq!(
        req.body,
        Some(json!({"action": "update", "items": ["contacts:1", "accounts:1"], "data": {"status": "inactive"}}))
    );
}

#[tokio::test]
async fn bulk_operation_without_items_is_rejected_locally() {
    let (crm, client) = spawn_fake_crm().await;
    let request = BulkOperationRequest { action: BulkAction::Delete, items: vec![], data: BulkActionData::default() };
    assert!(apply_bulk_operation(&client, &request).await.is_err());
    assert!(crm.requests().is_empty());
}

#[tokio::test]
async fn saved_search_is_created() {
    let (crm, client) = spawn_fake_crm().await;
    let mut payload = SearchPayload { q: "jo".to_string(), entity_type: EntityType::Contacts, ..Default::default() };
    payload.filters.insert("name".to_string(), FilterValue::Text("John".to_string()));
    let saved = SavedSearch::from_payload("Johns".to_string(), String::new(), false, &payload);

    let created = create_saved_search(&client, &saved).await.expect("saved search");
    assert_eq!(created.id, 17);
    assert_eq!(created.name, "Johns");

    let body = crm.requests()[0].body.clone().unwrap();
    assert_eq!(body["search_type"], json!("contacts"));
    assert_eq!(body["search_query"], json!("jo"));
    assert_eq!(body["filters"], json!({"name": "John"}));
    assert_eq!(body["is_public"], json!(false));

    let unnamed = SavedSearch { name: "  ".to_string(), ..saved };
    assert!(create_saved_search(&client, &unnamed).await.is_err());
    assert_eq!(crm.requests().len(), 1);
}

#[tokio::test]
async fn api_token_is_sent_as_authorization_header() {
    let (crm, client) = spawn_fake_crm_with_token(Some("secret".to_string())).await;
    fetch_search_suggestions(&client, "ac", EntityType::Global).await.expect("suggestions");
    assert_eq!(crm.requests()[0].authorization.as_deref(), Some("Token secret"));
}

#[tokio::test]
async fn server_errors_become_errors() {
    let router = Router::new().route(
        "/api/search/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
    );
    let base_url = serve(router).await;
    let client = CrmClient::new(base_url, None, Duration::from_secs(5)).expect("client");
    let err = search_for_results(&client, &SearchPayload::default()).await.expect_err("must fail");
    let msg = err.to_string();
    assert!(msg.contains("500"), "{msg}");
    assert!(msg.contains("database unavailable"), "{msg}");
}
