use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use super::client::ApiClient;
use super::error::{ApiError, ApiResult};
use super::leaderboard::{CombinedChangeQuery, ValueFactorChangeQuery};
use super::session_layer::SessionLayer;
use super::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::session::tests::MemoryStorage;
use crate::session::{SessionCredential, SessionStore};
use crate::types::common::SortOrder;

// =========================================================
// Shared mock components
// =========================================================

struct TestContext {
    /// Every request the transport saw, in order
    requests: Mutex<Vec<ApiRequest>>,
    /// Canned responses, consumed front to back
    responses: Mutex<VecDeque<ApiResult<ApiResponse>>>,
    /// Number of times the unauthorized hook fired
    unauthorized_calls: AtomicU32,
}

impl TestContext {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            unauthorized_calls: AtomicU32::new(0),
        })
    }

    fn respond_with(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    fn fail_with(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("expected at least one request")
            .clone()
    }

    fn unauthorized_calls(&self) -> u32 {
        self.unauthorized_calls.load(Ordering::SeqCst)
    }
}

struct MockTransport {
    ctx: Arc<TestContext>,
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, req: ApiRequest) -> ApiResult<ApiResponse> {
        self.ctx.requests.lock().unwrap().push(req);
        self.ctx
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no canned response".to_string())))
    }
}

/// Bare client: no session middleware, for query construction tests
fn make_client(ctx: &Arc<TestContext>) -> ApiClient<MockTransport> {
    ApiClient::with_transport(MockTransport { ctx: ctx.clone() })
}

/// Client wrapped in the session layer, plus the backing store
fn make_session_client(
    ctx: &Arc<TestContext>,
) -> (ApiClient<SessionLayer<MockTransport>>, Arc<SessionStore>) {
    let (backend, _) = MemoryStorage::new();
    let session = Arc::new(SessionStore::with_backend(Box::new(backend)));
    let hook_ctx = ctx.clone();
    let on_unauthorized: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
        hook_ctx.unauthorized_calls.fetch_add(1, Ordering::SeqCst);
    });
    let layer = SessionLayer::new(
        MockTransport { ctx: ctx.clone() },
        session.clone(),
        on_unauthorized,
    );
    (ApiClient::with_transport(layer), session)
}

fn make_credential() -> SessionCredential {
    SessionCredential {
        token: "tok-123".into(),
        token_type: Some("bearer".into()),
        wq_id: "WQ001".into(),
        username: Some("alice".into()),
    }
}

fn query_pairs(req: &ApiRequest) -> Vec<(&str, &str)> {
    req.query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

// =========================================================
// Query construction
// =========================================================

#[tokio::test]
async fn user_leaderboard_query_is_exact() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);

    let _ = client.get_user_leaderboard(6, 7, SortOrder::Asc).await;

    let req = ctx.last_request();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/leaderboard/user-leaderboard");
    assert_eq!(
        query_pairs(&req),
        vec![("limit", "6"), ("days", "7"), ("order", "asc")]
    );
}

#[tokio::test]
async fn paged_endpoint_omits_unset_filters() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);

    let _ = client.get_country_rankings(2, 25, None).await;
    let req = ctx.last_request();
    assert_eq!(req.path, "/dashboard/country-rankings");
    assert_eq!(query_pairs(&req), vec![("page", "2"), ("page_size", "25")]);

    let _ = client.get_country_rankings(1, 50, Some("2025Q2")).await;
    let req = ctx.last_request();
    assert_eq!(
        query_pairs(&req),
        vec![("page", "1"), ("page_size", "50"), ("quarter", "2025Q2")]
    );
}

#[tokio::test]
async fn weight_change_ranking_carries_order_and_optional_country() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);

    let _ = client
        .get_top_users_by_weight_change(1, 50, None, SortOrder::Desc, None)
        .await;
    let req = ctx.last_request();
    assert_eq!(req.path, "/dashboard/top-users-by-weight-change");
    assert_eq!(
        query_pairs(&req),
        vec![("page", "1"), ("page_size", "50"), ("order", "desc")]
    );

    let _ = client
        .get_top_users_by_weight_change(1, 50, Some("2025Q1"), SortOrder::Asc, Some("CN"))
        .await;
    let req = ctx.last_request();
    assert_eq!(
        query_pairs(&req),
        vec![
            ("page", "1"),
            ("page_size", "50"),
            ("quarter", "2025Q1"),
            ("order", "asc"),
            ("country", "CN"),
        ]
    );
}

#[tokio::test]
async fn country_history_path_embeds_country() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);

    let _ = client.get_country_history("US", 1, 20).await;

    let req = ctx.last_request();
    assert_eq!(req.path, "/dashboard/country-history/US");
    assert_eq!(query_pairs(&req), vec![("page", "1"), ("page_size", "20")]);
}

#[tokio::test]
async fn value_factor_changes_serialize_full_parameter_set() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);

    let query = ValueFactorChangeQuery {
        countries: vec!["US".into(), "CN".into()],
        exclude_both_half: true,
        ..Default::default()
    };
    let _ = client.get_value_factor_user_changes(&query).await;

    let req = ctx.last_request();
    assert_eq!(req.path, "/leaderboard/value-factor-user-changes");
    assert_eq!(
        query_pairs(&req),
        vec![
            ("sort_by", "value_change"),
            ("sort_order", "desc"),
            ("page", "1"),
            ("page_size", "50"),
            ("countries", "US,CN"),
            ("exclude_both_half", "true"),
        ]
    );
}

#[tokio::test]
async fn combined_changes_join_countries_and_default_the_rest() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);

    let query = CombinedChangeQuery {
        countries: vec!["US".into(), "CN".into()],
        ..Default::default()
    };
    let _ = client.get_combined_user_changes(&query).await;

    let req = ctx.last_request();
    assert_eq!(req.path, "/leaderboard/combined-user-changes");
    assert_eq!(
        query_pairs(&req),
        vec![
            ("sort_by", "alpha_change"),
            ("sort_order", "desc"),
            ("page", "1"),
            ("page_size", "50"),
            ("countries", "US,CN"),
            ("exclude_both_half", "false"),
        ]
    );
}

#[tokio::test]
async fn genius_user_changes_omit_unset_date_range() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);

    let _ = client
        .get_genius_user_weight_changes(Some("L1,L2"), None, None, None, SortOrder::Desc)
        .await;

    let req = ctx.last_request();
    assert_eq!(req.path, "/leaderboard/genius-user-weight-changes");
    assert_eq!(
        query_pairs(&req),
        vec![("order", "desc"), ("levels", "L1,L2")]
    );
}

// =========================================================
// Request bodies
// =========================================================

#[tokio::test]
async fn login_posts_wq_id_body() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);
    ctx.respond_with(
        200,
        r#"{"success":true,"message":"ok","access_token":"tok-1","token_type":"bearer","wq_id":"WQ001","username":"alice"}"#,
    );

    let response = client.login("WQ001").await.unwrap();

    let req = ctx.last_request();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.body, Some(json!({ "wq_id": "WQ001" })));
    assert!(response.success);
    assert_eq!(response.access_token.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn current_user_is_fetched_by_wq_id() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);
    ctx.respond_with(200, r#"{"wq_id":"WQ001","username":"alice","country":"CN"}"#);

    let profile = client.get_current_user("WQ001").await.unwrap();

    let req = ctx.last_request();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/auth/user/me");
    assert_eq!(query_pairs(&req), vec![("wq_id", "WQ001")]);
    assert_eq!(profile.username.as_deref(), Some("alice"));
    assert_eq!(profile.university, None);
}

#[tokio::test]
async fn feedback_body_omits_unset_optional_fields() {
    use super::feedback::{FeedbackRequest, FeedbackType};

    let ctx = TestContext::new();
    let client = make_client(&ctx);
    ctx.respond_with(200, r#"{"success":true,"message":"received"}"#);

    let payload = FeedbackRequest {
        content: "排行榜数据缺了一天".to_string(),
        feedback_type: FeedbackType::Bug,
        page: None,
        contact: None,
    };
    let response = client.submit_feedback(&payload).await.unwrap();

    let req = ctx.last_request();
    assert_eq!(req.path, "/feedback");
    assert_eq!(
        req.body,
        Some(json!({ "content": "排行榜数据缺了一天", "feedback_type": "bug" }))
    );
    assert!(response.success);
}

// =========================================================
// Session middleware
// =========================================================

#[tokio::test]
async fn bearer_header_attached_when_token_present() {
    let ctx = TestContext::new();
    let (client, session) = make_session_client(&ctx);
    session.set(&make_credential());
    ctx.respond_with(200, r#"[]"#);

    let _ = client.get_available_countries().await;

    let req = ctx.last_request();
    assert!(
        req.headers
            .iter()
            .any(|(k, v)| k == "Authorization" && v == "Bearer tok-123")
    );
}

#[tokio::test]
async fn request_left_unmodified_without_token() {
    let ctx = TestContext::new();
    let (client, _session) = make_session_client(&ctx);
    ctx.respond_with(200, r#"[]"#);

    let _ = client.get_available_countries().await;

    let req = ctx.last_request();
    assert!(req.headers.is_empty());
}

#[tokio::test]
async fn unauthorized_clears_session_and_fires_hook() {
    let ctx = TestContext::new();
    let (client, session) = make_session_client(&ctx);
    session.set(&make_credential());
    ctx.respond_with(401, r#"{"detail":"token expired"}"#);

    let result = client.get_summary_statistics(7).await;

    // The failure is still surfaced to the caller
    let error = result.unwrap_err();
    assert!(error.is_unauthorized());
    assert_eq!(error.status(), Some(401));

    // All three keys are gone and the hook fired exactly once
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert_eq!(ctx.unauthorized_calls(), 1);
}

#[tokio::test]
async fn unauthorized_is_handled_regardless_of_module() {
    let ctx = TestContext::new();
    let (client, session) = make_session_client(&ctx);

    session.set(&make_credential());
    ctx.respond_with(401, "{}");
    let _ = client.get_country_rankings(1, 50, None).await;
    assert!(!session.is_authenticated());
    assert_eq!(ctx.unauthorized_calls(), 1);

    session.set(&make_credential());
    ctx.respond_with(401, "{}");
    let _ = client.get_user_statistics().await;
    assert!(!session.is_authenticated());
    assert_eq!(ctx.unauthorized_calls(), 2);
}

#[tokio::test]
async fn other_error_statuses_pass_through_untouched() {
    let ctx = TestContext::new();
    let (client, session) = make_session_client(&ctx);
    session.set(&make_credential());
    ctx.respond_with(500, "internal error");

    let error = client.get_summary_statistics(7).await.unwrap_err();

    assert_eq!(
        error,
        ApiError::Status {
            status: 500,
            body: "internal error".to_string()
        }
    );
    // Session untouched, hook not fired
    assert!(session.is_authenticated());
    assert_eq!(ctx.unauthorized_calls(), 0);
}

#[tokio::test]
async fn transport_errors_pass_through_untouched() {
    let ctx = TestContext::new();
    let (client, session) = make_session_client(&ctx);
    session.set(&make_credential());
    ctx.fail_with(ApiError::Timeout);

    let error = client.get_summary_statistics(7).await.unwrap_err();

    assert_eq!(error, ApiError::Timeout);
    assert!(session.is_authenticated());
    assert_eq!(ctx.unauthorized_calls(), 0);
}

// =========================================================
// Response decoding
// =========================================================

#[tokio::test]
async fn paginated_response_decodes() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);
    ctx.respond_with(
        200,
        r#"{
            "data": [{
                "country": "CN",
                "user_count": 120,
                "weight_factor": 52.5,
                "submissions_count": 300,
                "super_alpha_submissions_count": 12,
                "total_submissions": 312,
                "weight_change": 1.25
            }],
            "total": 16,
            "page": 1,
            "page_size": 50,
            "total_pages": 1
        }"#,
    );

    let page = client.get_country_rankings(1, 50, None).await.unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.total, 16);
    assert_eq!(page.total_pages, (page.total as u32).div_ceil(page.page_size));
    assert!(page.data.len() <= page.page_size as usize);
    let first = &page.data[0];
    assert_eq!(first.country, "CN");
    assert_eq!(first.weight_change, Some(1.25));
    assert_eq!(first.value_factor, None);
}

#[tokio::test]
async fn malformed_body_surfaces_as_serialization_error() {
    let ctx = TestContext::new();
    let client = make_client(&ctx);
    ctx.respond_with(200, "not json at all");

    let error = client.get_available_countries().await.unwrap_err();

    assert!(matches!(error, ApiError::Serialization(_)));
}
