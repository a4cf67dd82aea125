//! HTTP API Client
//!
//! Functions for communicating with the Farmunity REST API. Every
//! authenticated call attaches the bearer token from the cached auth blob;
//! a 401 from any endpoint clears that blob so route guards redirect.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt::Display;

use crate::api::types::*;
use crate::state::auth;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("farmunity_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Query building ============

/// URL query-string builder that skips empty values, mirroring how the
/// backend treats absent parameters.
#[derive(Debug, Default)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair unless the value is empty.
    pub fn set(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// Append a pair when the value is present.
    pub fn set_opt<T: Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(v) = value {
            self.set(key, &v.to_string());
        }
    }

    /// Render as "?a=1&b=2", or "" when no pairs were set.
    pub fn to_query(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

/// Minimal percent-encoding for query values (reserved and non-ASCII bytes).
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

// ============ Request plumbing ============

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Attach the bearer token from the cached auth blob, when present.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match auth::auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Decode a response, clearing cached auth on 401 and preferring the
/// backend-provided error message on failure.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.status() == 401 {
        auth::clear_auth();
    }

    if !response.ok() {
        let status = response.status();
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("HTTP {}", status),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check a response for success without decoding a body.
async fn read_ok(response: Response) -> Result<(), String> {
    if response.status() == 401 {
        auth::clear_auth();
    }

    if !response.ok() {
        let status = response.status();
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("HTTP {}", status),
        });
        return Err(error.error);
    }
    Ok(())
}

fn network_err(e: gloo_net::Error) -> String {
    format!("Network error: {}", e)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}{}", get_api_base(), path);
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(network_err)?;
    read_json(response).await
}

async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let url = format!("{}{}", get_api_base(), path);
    let response = with_auth(Request::post(&url))
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(network_err)?;
    read_json(response).await
}

// ============ Auth ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, serde::Deserialize)]
struct MeResponse {
    user: User,
}

pub async fn signup(payload: &SignupPayload) -> Result<AuthResponse, String> {
    post_json("/api/auth/signup", payload).await
}

pub async fn login(payload: &LoginPayload) -> Result<AuthResponse, String> {
    post_json("/api/auth/login", payload).await
}

/// Validate the cached token and fetch the current user.
pub async fn me() -> Result<User, String> {
    let response: MeResponse = get_json("/api/auth/me").await?;
    Ok(response.user)
}

/// Warm the API once on boot to reduce first-load latency (cold starts).
pub async fn prewarm() {
    let url = format!("{}/api/health", get_api_base());
    let _ = Request::get(&url).send().await;
}

// ============ Crops ============

/// Filters accepted by `GET /api/crops`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CropFilters {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl CropFilters {
    pub fn to_query(&self) -> String {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("q", self.q.as_deref());
        pairs.set_opt("category", self.category.as_deref());
        pairs.set_opt("minPrice", self.min_price);
        pairs.set_opt("maxPrice", self.max_price);
        pairs.set_opt("limit", self.limit);
        pairs.set_opt("skip", self.skip);
        pairs.set_opt("sort", self.sort.as_deref());
        pairs.set_opt("order", self.order.as_deref());
        pairs.to_query()
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct CropListResponse {
    pub items: Vec<Crop>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, serde::Deserialize)]
struct CropItemResponse {
    item: Crop,
}

/// New crop listing payload for `POST /api/crops`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NewCrop {
    pub farmer: String,
    pub crop: String,
    pub quantity: String,
    pub price: f64,
    pub location: String,
    pub quality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

pub async fn fetch_crops(filters: &CropFilters) -> Result<CropListResponse, String> {
    get_json(&format!("/api/crops{}", filters.to_query())).await
}

pub async fn create_crop(payload: &NewCrop) -> Result<Crop, String> {
    let response: CropItemResponse = post_json("/api/crops", payload).await?;
    Ok(response.item)
}

pub async fn fetch_my_crops() -> Result<Vec<Crop>, String> {
    let response: CropListResponse = get_json("/api/crops/mine").await?;
    Ok(response.items)
}

pub async fn delete_crop(id: &str) -> Result<(), String> {
    let url = format!("{}/api/crops/{}", get_api_base(), id);
    let response = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(network_err)?;
    read_ok(response).await
}

// ============ Equipment ============

/// Filters accepted by `GET /api/equipment`.
#[derive(Clone, Debug, PartialEq)]
pub struct EquipmentFilters {
    pub category: Option<String>,
    pub city: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort: Option<String>,
}

impl Default for EquipmentFilters {
    fn default() -> Self {
        Self {
            category: None,
            city: None,
            page: 1,
            limit: 12,
            sort: Some("rating:desc".to_string()),
        }
    }
}

impl EquipmentFilters {
    pub fn to_query(&self) -> String {
        let mut pairs = QueryPairs::new();
        pairs.set("page", &self.page.to_string());
        pairs.set("limit", &self.limit.to_string());
        pairs.set_opt("sort", self.sort.as_deref());
        pairs.set_opt("category", self.category.as_deref());
        pairs.set_opt("city", self.city.as_deref());
        pairs.to_query()
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentListResponse {
    pub items: Vec<Equipment>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, serde::Deserialize)]
struct EquipmentItemResponse {
    item: Equipment,
}

/// Equipment payload for create and update.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct EquipmentPayload {
    pub title: String,
    pub category: String,
    pub location: EquipmentLocation,
    pub price: RentalPrice,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub available: bool,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestEquipmentResponse {
    conversation_id: Option<String>,
}

pub async fn fetch_equipment(filters: &EquipmentFilters) -> Result<EquipmentListResponse, String> {
    get_json(&format!("/api/equipment{}", filters.to_query())).await
}

pub async fn fetch_equipment_item(id: &str) -> Result<Equipment, String> {
    let response: EquipmentItemResponse = get_json(&format!("/api/equipment/{}", id)).await?;
    Ok(response.item)
}

pub async fn create_equipment(payload: &EquipmentPayload) -> Result<Equipment, String> {
    let response: EquipmentItemResponse = post_json("/api/equipment", payload).await?;
    Ok(response.item)
}

pub async fn update_equipment(id: &str, payload: &EquipmentPayload) -> Result<Equipment, String> {
    let url = format!("{}/api/equipment/{}", get_api_base(), id);
    let response = with_auth(Request::put(&url))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(network_err)?;
    let item: EquipmentItemResponse = read_json(response).await?;
    Ok(item.item)
}

pub async fn delete_equipment(id: &str) -> Result<(), String> {
    let url = format!("{}/api/equipment/{}", get_api_base(), id);
    let response = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(network_err)?;
    read_ok(response).await
}

/// Send a booking request; the backend opens (or reuses) a conversation
/// with the owner and returns its id.
pub async fn request_equipment(id: &str) -> Result<String, String> {
    let url = format!("{}/api/equipment/{}/request", get_api_base(), id);
    let response = with_auth(Request::post(&url))
        .send()
        .await
        .map_err(network_err)?;
    let body: RequestEquipmentResponse = read_json(response).await?;
    body.conversation_id
        .ok_or_else(|| "Could not open chat for booking request".to_string())
}

pub async fn fetch_my_equipment() -> Result<Vec<Equipment>, String> {
    let response: EquipmentListResponse = get_json("/api/equipment/mine").await?;
    Ok(response.items)
}

/// SSE endpoint for live equipment refreshes.
pub fn equipment_stream_url() -> String {
    format!("{}/api/equipment/stream", get_api_base())
}

// ============ Chat ============

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct StartConversationPayload<'a> {
    recipient_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    crop_id: Option<&'a str>,
}

#[derive(Debug, serde::Deserialize)]
struct ConversationResponse {
    conversation: Conversation,
}

#[derive(Debug, serde::Deserialize)]
struct ConversationListResponse {
    conversations: Vec<Conversation>,
}

#[derive(Debug, serde::Deserialize)]
struct MessageListResponse {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, serde::Deserialize)]
struct MessageResponse {
    message: ChatMessage,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessagePayload<'a> {
    conversation_id: &'a str,
    text: &'a str,
}

/// Start (or fetch existing) conversation with a recipient.
pub async fn start_conversation(
    recipient_id: &str,
    crop_id: Option<&str>,
) -> Result<Conversation, String> {
    let response: ConversationResponse = post_json(
        "/api/chat/start",
        &StartConversationPayload {
            recipient_id,
            crop_id,
        },
    )
    .await?;
    Ok(response.conversation)
}

pub async fn fetch_conversations() -> Result<Vec<Conversation>, String> {
    let response: ConversationListResponse = get_json("/api/chat/conversations").await?;
    Ok(response.conversations)
}

pub async fn fetch_messages(conversation_id: &str) -> Result<Vec<ChatMessage>, String> {
    let response: MessageListResponse =
        get_json(&format!("/api/chat/messages/{}", conversation_id)).await?;
    Ok(response.messages)
}

pub async fn send_message(conversation_id: &str, text: &str) -> Result<ChatMessage, String> {
    let response: MessageResponse = post_json(
        "/api/chat/messages",
        &SendMessagePayload {
            conversation_id,
            text,
        },
    )
    .await?;
    Ok(response.message)
}

// ============ AI assistant ============

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct AskPayload<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct AiSessionListResponse {
    sessions: Vec<AiSession>,
}

#[derive(Debug, serde::Deserialize)]
struct AiSessionResponse {
    session: AiSession,
}

pub async fn ask_ai(question: &str, session_id: Option<&str>) -> Result<AskResponse, String> {
    post_json(
        "/api/ai/ask",
        &AskPayload {
            question,
            session_id,
        },
    )
    .await
}

pub async fn fetch_ai_sessions() -> Result<Vec<AiSession>, String> {
    let response: AiSessionListResponse = get_json("/api/ai/sessions").await?;
    Ok(response.sessions)
}

pub async fn fetch_ai_session(id: &str) -> Result<AiSession, String> {
    let response: AiSessionResponse = get_json(&format!("/api/ai/sessions/{}", id)).await?;
    Ok(response.session)
}

pub async fn delete_ai_session(id: &str) -> Result<(), String> {
    let url = format!("{}/api/ai/sessions/{}", get_api_base(), id);
    let response = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(network_err)?;
    read_ok(response).await
}

// ============ Forum ============

#[derive(Debug, serde::Serialize)]
struct NewDiscussionPayload<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

#[derive(Debug, serde::Serialize)]
struct NewReplyPayload<'a> {
    text: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct DiscussionListResponse {
    discussions: Vec<Discussion>,
}

#[derive(Debug, serde::Deserialize)]
struct DiscussionResponse {
    discussion: Discussion,
}

#[derive(Debug, serde::Deserialize)]
struct ReplyResponse {
    reply: Reply,
}

pub async fn fetch_discussions() -> Result<Vec<Discussion>, String> {
    let response: DiscussionListResponse = get_json("/api/forum/discussions").await?;
    Ok(response.discussions)
}

pub async fn create_discussion(title: &str, category: Option<&str>) -> Result<Discussion, String> {
    let response: DiscussionResponse =
        post_json("/api/forum/discussions", &NewDiscussionPayload { title, category }).await?;
    Ok(response.discussion)
}

pub async fn create_reply(discussion_id: &str, text: &str) -> Result<Reply, String> {
    let response: ReplyResponse = post_json(
        &format!("/api/forum/discussions/{}/replies", discussion_id),
        &NewReplyPayload { text },
    )
    .await?;
    Ok(response.reply)
}

// ============ Weather ============

pub async fn fetch_weather_now() -> Result<WeatherNow, String> {
    get_json("/api/weather/now").await
}

pub async fn fetch_weather_advisory() -> Result<WeatherAdvisory, String> {
    get_json("/api/weather/advisory").await
}

// ============ Prices ============

#[derive(Debug, serde::Deserialize)]
struct StatesResponse {
    states: Vec<String>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct PriceResponse {
    pub state: String,
    #[serde(rename = "type")]
    pub price_type: String,
    #[serde(default)]
    pub date: Option<String>,
    pub items: Vec<PriceRow>,
}

pub async fn fetch_states() -> Result<Vec<String>, String> {
    let response: StatesResponse = get_json("/api/states").await?;
    Ok(response.states)
}

pub async fn fetch_today_prices(state: &str, price_type: &str) -> Result<PriceResponse, String> {
    let mut pairs = QueryPairs::new();
    pairs.set("state", state);
    pairs.set("type", price_type);
    get_json(&format!("/api/prices/today{}", pairs.to_query())).await
}

// ============ Certification ============

#[derive(Debug, serde::Deserialize)]
struct CertSubmitResponse {
    certification: Certification,
}

/// An equipment item awaiting certification review.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct PendingCert {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub owner: EquipmentOwner,
    #[serde(default)]
    pub certification: Certification,
}

#[derive(Debug, serde::Deserialize)]
struct PendingCertsResponse {
    items: Vec<PendingCert>,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CertReviewPayload<'a> {
    approve: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry_date: Option<&'a str>,
}

#[derive(Debug, serde::Deserialize)]
struct CertReviewResponse {
    status: String,
}

/// Seller uploads invoice + certificate as multipart form data; the
/// browser sets the boundary, so no Content-Type header is added here.
pub async fn submit_certification(
    equipment_id: &str,
    form: web_sys::FormData,
) -> Result<Certification, String> {
    let url = format!("{}/api/equipment/{}/certs", get_api_base(), equipment_id);
    let response = with_auth(Request::post(&url))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(network_err)?;
    let body: CertSubmitResponse = read_json(response).await?;
    Ok(body.certification)
}

pub async fn fetch_pending_certs() -> Result<Vec<PendingCert>, String> {
    let response: PendingCertsResponse = get_json("/api/admin/certs/pending").await?;
    Ok(response.items)
}

/// Admin one-click approve or reject; returns the resulting status.
pub async fn review_certification(
    equipment_id: &str,
    approve: bool,
    notes: Option<&str>,
    expiry_date: Option<&str>,
) -> Result<String, String> {
    let response: CertReviewResponse = post_json(
        &format!("/api/admin/certs/{}/approve", equipment_id),
        &CertReviewPayload {
            approve,
            notes,
            expiry_date,
        },
    )
    .await?;
    Ok(response.status)
}

// ============ Notifications ============

#[derive(Debug, serde::Deserialize)]
struct NotificationsResponse {
    items: Vec<Notification>,
}

pub async fn fetch_notifications() -> Result<Vec<Notification>, String> {
    let response: NotificationsResponse = get_json("/api/notifications").await?;
    Ok(response.items)
}

// ============ Dashboard ============

pub async fn fetch_dashboard_summary() -> Result<DashboardSummary, String> {
    get_json("/api/dashboard/summary").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_skip_empty_values() {
        let mut pairs = QueryPairs::new();
        pairs.set("state", "Karnataka");
        pairs.set("city", "");
        pairs.set_opt::<&str>("category", None);
        pairs.set_opt("limit", Some(12));
        assert_eq!(pairs.to_query(), "?state=Karnataka&limit=12");
    }

    #[test]
    fn query_pairs_empty_renders_nothing() {
        assert_eq!(QueryPairs::new().to_query(), "");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let mut pairs = QueryPairs::new();
        pairs.set("state", "Tamil Nadu");
        pairs.set("q", "rice & wheat");
        assert_eq!(pairs.to_query(), "?state=Tamil%20Nadu&q=rice%20%26%20wheat");
    }

    #[test]
    fn crop_filters_use_backend_parameter_names() {
        let filters = CropFilters {
            q: Some("wheat".into()),
            category: Some("grains".into()),
            min_price: Some(1000.0),
            max_price: None,
            limit: Some(24),
            skip: Some(0),
            sort: Some("createdAt".into()),
            order: Some("desc".into()),
        };
        let query = filters.to_query();
        assert!(query.contains("minPrice=1000"));
        assert!(query.contains("category=grains"));
        assert!(!query.contains("maxPrice"));
        // skip=0 is a real value, not an empty one
        assert!(query.contains("skip=0"));
    }

    #[test]
    fn default_equipment_filters_sort_by_rating() {
        let query = EquipmentFilters::default().to_query();
        assert_eq!(query, "?page=1&limit=12&sort=rating%3Adesc");
    }

    #[test]
    fn equipment_filters_include_city_when_set() {
        let filters = EquipmentFilters {
            city: Some("Ludhiana".into()),
            category: Some("Tractors".into()),
            ..Default::default()
        };
        let query = filters.to_query();
        assert!(query.contains("city=Ludhiana"));
        assert!(query.contains("category=Tractors"));
    }
}
