//! Backend API Bindings
//!
//! HTTP calls to the Goal Pilot backend, plus the simulated planner and
//! goal submission. Both simulations are modelled as fallible so the real
//! backend can slot in without touching callers.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde_json::Value;

use crate::models::{GeneratedPlan, NewGoal, RemoteGoal};
use crate::plan;

const API_BASE: &str = "http://127.0.0.1:8000";

const GENERIC_LOGIN_ERROR: &str = "Login failed. Please try again.";

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never completed (network, CORS, ...)
    Http(String),
    /// Non-2xx response
    Status(u16),
    /// Body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(msg) => write!(f, "request failed: {}", msg),
            ApiError::Status(code) => write!(f, "unexpected status {}", code),
            ApiError::Decode(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Login failure, classified for field-specific messaging
#[derive(Debug, Clone, PartialEq)]
pub enum LoginError {
    IncorrectEmail,
    IncorrectPassword,
    /// Backend rejected the attempt with its own message
    Rejected(String),
    Network(String),
}

impl LoginError {
    /// Inline message shown under the login form
    pub fn message(&self) -> String {
        match self {
            LoginError::IncorrectEmail => "Incorrect email".to_string(),
            LoginError::IncorrectPassword => "Incorrect password".to_string(),
            LoginError::Rejected(msg) => msg.clone(),
            LoginError::Network(_) => {
                "An error occurred. Please check your network or server.".to_string()
            }
        }
    }
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::Network(msg) => write!(f, "login request failed: {}", msg),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for LoginError {}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `POST /users/login`. The session token is the returned user id (falling
/// back to the email until the backend grows a real token field).
pub async fn login(email: &str, password: &str) -> Result<String, LoginError> {
    let resp = Request::post(&format!("{}/users/login", API_BASE))
        .json(&LoginRequest { email, password })
        .map_err(|e| LoginError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoginError::Network(e.to_string()))?;
    let body: Value = resp
        .json()
        .await
        .map_err(|e| LoginError::Network(e.to_string()))?;

    if resp.ok() {
        token_from_login_body(&body).ok_or_else(|| LoginError::Rejected(GENERIC_LOGIN_ERROR.to_string()))
    } else {
        Err(classify_login_detail(body.get("detail")))
    }
}

fn token_from_login_body(body: &Value) -> Option<String> {
    value_as_token(body.get("id")).or_else(|| value_as_token(body.get("email")))
}

fn value_as_token(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Map a backend validation `detail` onto a field-specific login error.
/// Anything that is not the expected FastAPI shape degrades to the generic
/// message.
pub fn classify_login_detail(detail: Option<&Value>) -> LoginError {
    if let Some(first) = detail.and_then(|d| d.get(0)) {
        if let Some(loc) = first.get("loc").and_then(Value::as_array) {
            if loc.iter().any(|v| v.as_str() == Some("email")) {
                return LoginError::IncorrectEmail;
            }
            if loc.iter().any(|v| v.as_str() == Some("password")) {
                return LoginError::IncorrectPassword;
            }
        }
        if let Some(msg) = first.get("msg").and_then(Value::as_str) {
            return LoginError::Rejected(msg.to_string());
        }
    }
    LoginError::Rejected(GENERIC_LOGIN_ERROR.to_string())
}

/// `GET /goals/?user_id=<token>`. The caller decides what a failure means;
/// the dashboard substitutes demo data.
pub async fn fetch_goals(token: &str) -> Result<Vec<RemoteGoal>, ApiError> {
    let url = format!("{}/goals/?user_id={}", API_BASE, token);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Http(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Ask the planner for a schedule. The real planner is an external service;
/// today this is a fixed delay followed by the deterministic demo plan.
pub async fn generate_plan() -> Result<GeneratedPlan, ApiError> {
    TimeoutFuture::new(1_500).await;
    Ok(plan::build_plan())
}

/// Submit the finished wizard. Simulated delay today; the Result shape is
/// what the wizard relies on to keep its state when submission fails.
pub async fn create_goal(goal: &NewGoal) -> Result<(), ApiError> {
    TimeoutFuture::new(2_000).await;
    web_sys::console::log_1(
        &format!(
            "[API] Goal created: {}",
            serde_json::to_string(goal).unwrap_or_default()
        )
        .into(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_validation_error_is_classified() {
        let detail = json!([{"loc": ["body", "email"], "msg": "value is not a valid email"}]);
        assert_eq!(
            classify_login_detail(Some(&detail)),
            LoginError::IncorrectEmail
        );
    }

    #[test]
    fn test_password_validation_error_is_classified() {
        let detail = json!([{"loc": ["body", "password"], "msg": "wrong password"}]);
        assert_eq!(
            classify_login_detail(Some(&detail)),
            LoginError::IncorrectPassword
        );
    }

    #[test]
    fn test_detail_message_is_surfaced_when_no_field_matches() {
        let detail = json!([{"loc": ["body"], "msg": "user not found"}]);
        assert_eq!(
            classify_login_detail(Some(&detail)),
            LoginError::Rejected("user not found".to_string())
        );
    }

    #[test]
    fn test_unrecognized_detail_degrades_to_generic_message() {
        let detail = json!("no such user");
        assert_eq!(
            classify_login_detail(Some(&detail)),
            LoginError::Rejected(GENERIC_LOGIN_ERROR.to_string())
        );
        assert_eq!(
            classify_login_detail(None),
            LoginError::Rejected(GENERIC_LOGIN_ERROR.to_string())
        );
    }

    #[test]
    fn test_login_token_prefers_id_over_email() {
        let body = json!({"id": 42, "email": "a@b.c"});
        assert_eq!(token_from_login_body(&body), Some("42".to_string()));

        let body = json!({"email": "a@b.c"});
        assert_eq!(token_from_login_body(&body), Some("a@b.c".to_string()));

        assert_eq!(token_from_login_body(&json!({})), None);
    }
}
