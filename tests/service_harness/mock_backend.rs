//! In-process stand-in for the admin REST API
//!
//! Routes live under `/api` like the real backend. Every route except login
//! and register requires `Authorization: Bearer test-token`. Created members
//! are echoed wrapped in `{"details": ...}`, updated ones bare, so both
//! response shapes get exercised.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use gymdesk::core::entity::EntityId;
use gymdesk::core::error::TransportError;
use gymdesk::core::service::CollectionService;
use gymdesk::entities::{GymInfo, GymInfoDraft, Member, MemberDraft, Payment, PaymentDraft};
use gymdesk::reports::{DashboardStats, renewals};
use gymdesk::storage::InMemoryCollection;

pub const TEST_TOKEN: &str = "test-token";
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "s3cret";

type ApiError = (StatusCode, Json<Value>);
type ApiResult = Result<Json<Value>, ApiError>;

#[derive(Clone, Default)]
pub struct MockBackend {
    pub members: InMemoryCollection<Member>,
    pub payments: InMemoryCollection<Payment>,
    pub gym_info: Arc<Mutex<Option<GymInfo>>>,
    /// `Authorization` header of every authenticated route hit, in order
    pub seen_auth: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockBackend {
    pub fn with_members(members: Vec<Member>) -> Self {
        let backend = Self::default();
        backend.members.seed(members);
        backend
    }

    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.seen_auth.lock().unwrap().clone()
    }

    /// Serve on a random local port; returns the API root (`http://addr/api`)
    pub async fn spawn(&self) -> String {
        let api = Router::new()
            .route("/members/", get(list_members).post(create_member))
            .route("/members/{id}", put(update_member).delete(delete_member))
            .route("/payments/", get(list_payments).post(create_payment))
            .route("/renewals/7days", get(upcoming_renewals))
            .route("/renewals/exp", get(expired_members))
            .route("/renewals/today", get(today_renewals))
            .route("/dashboard/", get(dashboard))
            .route(
                "/gym-info/",
                get(get_gym_info).post(create_gym_info).put(update_gym_info),
            )
            .route("/login", post(login))
            .route("/register", post(register))
            .route("/reset-password", post(reset_password))
            .with_state(self.clone());
        let app = Router::new().nest("/api", api);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Small delay to let the server start
        tokio::time::sleep(Duration::from_millis(50)).await;

        format!("http://{}/api", addr)
    }
}

fn detail(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "detail": message })))
}

fn reject(err: TransportError) -> ApiError {
    match err {
        TransportError::Status { status, detail: message } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(json!({ "detail": message })),
        ),
        TransportError::Unauthorized => detail(StatusCode::UNAUTHORIZED, "Not authenticated"),
        other => detail(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string()),
    }
}

fn authorize(state: &MockBackend, headers: &HeaderMap) -> Result<(), ApiError> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen_auth.lock().unwrap().push(header.clone());

    let expected = format!("Bearer {}", TEST_TOKEN);
    if header.as_deref() == Some(expected.as_str()) {
        Ok(())
    } else {
        Err(detail(StatusCode::UNAUTHORIZED, "Invalid or expired token"))
    }
}

async fn list_members(State(state): State<MockBackend>, headers: HeaderMap) -> ApiResult {
    authorize(&state, &headers)?;
    let members = state.members.fetch_all().await.map_err(reject)?;
    Ok(Json(json!(members)))
}

async fn create_member(
    State(state): State<MockBackend>,
    headers: HeaderMap,
    Json(draft): Json<MemberDraft>,
) -> ApiResult {
    authorize(&state, &headers)?;
    let member = state.members.create(&draft).await.map_err(reject)?;
    Ok(Json(json!({ "message": "Member created", "details": member })))
}

async fn update_member(
    State(state): State<MockBackend>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
    Json(draft): Json<MemberDraft>,
) -> ApiResult {
    authorize(&state, &headers)?;
    let member = state.members.update(id, &draft).await.map_err(reject)?;
    Ok(Json(json!(member)))
}

async fn delete_member(
    State(state): State<MockBackend>,
    headers: HeaderMap,
    Path(id): Path<EntityId>,
) -> ApiResult {
    authorize(&state, &headers)?;
    state.members.delete(id).await.map_err(reject)?;
    Ok(Json(json!({ "message": "Member deleted successfully" })))
}

async fn list_payments(State(state): State<MockBackend>, headers: HeaderMap) -> ApiResult {
    authorize(&state, &headers)?;
    let payments = state.payments.fetch_all().await.map_err(reject)?;
    Ok(Json(json!(payments)))
}

async fn create_payment(
    State(state): State<MockBackend>,
    headers: HeaderMap,
    Json(draft): Json<PaymentDraft>,
) -> ApiResult {
    authorize(&state, &headers)?;
    let payment = state.payments.create(&draft).await.map_err(reject)?;
    Ok(Json(json!(payment)))
}

#[derive(Deserialize)]
struct WindowQuery {
    days: Option<u32>,
}

async fn upcoming_renewals(
    State(state): State<MockBackend>,
    headers: HeaderMap,
    Query(query): Query<WindowQuery>,
) -> ApiResult {
    authorize(&state, &headers)?;
    let members = state.members.snapshot();
    let days = query.days.unwrap_or(renewals::DEFAULT_WINDOW_DAYS);
    let upcoming = renewals::upcoming(&members, super::today(), days)
        .map_err(|e| detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()))?;
    Ok(Json(json!(upcoming)))
}

async fn expired_members(State(state): State<MockBackend>, headers: HeaderMap) -> ApiResult {
    authorize(&state, &headers)?;
    let members = state.members.snapshot();
    Ok(Json(json!(renewals::expired(&members, super::today()))))
}

async fn today_renewals(State(state): State<MockBackend>, headers: HeaderMap) -> ApiResult {
    authorize(&state, &headers)?;
    let members = state.members.snapshot();
    Ok(Json(json!(renewals::due_today(&members, super::today()))))
}

async fn dashboard(State(state): State<MockBackend>, headers: HeaderMap) -> ApiResult {
    authorize(&state, &headers)?;
    let stats = DashboardStats::compute(
        &state.members.snapshot(),
        &state.payments.snapshot(),
        super::today(),
    );
    Ok(Json(json!(stats)))
}

async fn get_gym_info(State(state): State<MockBackend>, headers: HeaderMap) -> ApiResult {
    authorize(&state, &headers)?;
    match state.gym_info.lock().unwrap().clone() {
        Some(info) => Ok(Json(json!(info))),
        None => Err(detail(StatusCode::NOT_FOUND, "Gym info not found")),
    }
}

async fn create_gym_info(
    State(state): State<MockBackend>,
    headers: HeaderMap,
    Json(draft): Json<GymInfoDraft>,
) -> ApiResult {
    authorize(&state, &headers)?;
    let mut slot = state.gym_info.lock().unwrap();
    if slot.is_some() {
        return Err(detail(StatusCode::BAD_REQUEST, "Gym info already exists"));
    }
    let info = GymInfo {
        id: 1,
        name: draft.name,
        logo_url: draft.logo_url,
    };
    *slot = Some(info.clone());
    Ok(Json(json!(info)))
}

async fn update_gym_info(
    State(state): State<MockBackend>,
    headers: HeaderMap,
    Json(draft): Json<GymInfoDraft>,
) -> ApiResult {
    authorize(&state, &headers)?;
    let mut slot = state.gym_info.lock().unwrap();
    match slot.as_mut() {
        Some(info) => {
            info.name = draft.name;
            info.logo_url = draft.logo_url;
            Ok(Json(json!(info)))
        }
        None => Err(detail(StatusCode::NOT_FOUND, "Gym info not found")),
    }
}

async fn login(Json(body): Json<Value>) -> ApiResult {
    if body["username"] == ADMIN_USER && body["password"] == ADMIN_PASSWORD {
        Ok(Json(json!({
            "access_token": TEST_TOKEN,
            "token_type": "bearer",
            "message": "Login successful"
        })))
    } else {
        Err(detail(StatusCode::UNAUTHORIZED, "Invalid username or password"))
    }
}

async fn register(Json(body): Json<Value>) -> ApiResult {
    if body["username"] == ADMIN_USER {
        return Err(detail(
            StatusCode::BAD_REQUEST,
            "Username or email already exists",
        ));
    }
    Ok(Json(json!({ "message": "Registration successful" })))
}

async fn reset_password(Json(body): Json<Value>) -> ApiResult {
    if body["old_password"] != ADMIN_PASSWORD {
        return Err(detail(StatusCode::BAD_REQUEST, "Old password is incorrect"));
    }
    Ok(Json(json!({ "message": "Password reset successful" })))
}
