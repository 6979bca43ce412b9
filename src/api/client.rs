//! HTTP API Client
//!
//! Functions for communicating with the Converse backend service.

use gloo_net::http::{Request, Response};

use crate::state::chat::{ConversationSummary, Message};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Fixed system prompt sent with every `/ask` exchange.
pub const SYSTEM_PROMPT: &str =
    "You are Converse, a helpful assistant. Answer the user's questions clearly and concisely.";

/// Get the API base URL from local storage or use the default. The
/// `converse_api_url` key is an operator override for pointing a deployed
/// bundle at a non-local backend.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("converse_api_url") {
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

// ============ Request / Response Types ============

#[derive(Debug, serde::Serialize)]
struct CredentialsRequest {
    email: String,
    password: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, serde::Deserialize)]
struct HistoryResponse {
    history: Vec<ConversationSummary>,
}

#[derive(Debug, serde::Deserialize)]
struct SessionResponse {
    messages: Vec<Message>,
}

#[derive(Debug, serde::Serialize)]
pub struct AskRequest {
    pub message: String,
    pub user_email: String,
    /// `None` serializes as JSON null: the backend starts a new session.
    pub session_id: Option<String>,
    pub system_prompt: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct AskResponse {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Error body shape used by the backend for every endpoint.
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    detail: Option<String>,
}

/// Extract the server-supplied detail message from a non-OK response,
/// falling back to a fixed text when the body is absent or unparseable.
async fn server_detail(response: Response, fallback: &str) -> String {
    response
        .json::<ApiError>()
        .await
        .ok()
        .and_then(|error| error.detail)
        .unwrap_or_else(|| fallback.to_string())
}

// ============ API Functions ============

/// Create an account.
pub async fn signup(email: &str, password: &str) -> Result<(), String> {
    let response = Request::post(&format!("{}/signup", get_api_base()))
        .json(&CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(server_detail(response, "Signup failed").await);
    }
    Ok(())
}

/// Exchange credentials for opaque tokens.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    let response = Request::post(&format!("{}/login", get_api_base()))
        .json(&CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(server_detail(response, "Invalid email or password").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the conversation history list for a user.
pub async fn fetch_chat_history(email: &str) -> Result<Vec<ConversationSummary>, String> {
    let response = Request::get(&format!("{}/chat_history?email={}", get_api_base(), email))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(server_detail(response, "Could not load chat history").await);
    }

    let result: HistoryResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(result.history)
}

/// Fetch the full message sequence of a stored session.
pub async fn fetch_session(session_id: &str) -> Result<Vec<Message>, String> {
    let response = Request::get(&format!("{}/chat_history/{}", get_api_base(), session_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(server_detail(response, "Could not load conversation").await);
    }

    let result: SessionResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(result.messages)
}

/// Send one chat message and await the assistant's reply.
pub async fn ask(request: &AskRequest) -> Result<AskResponse, String> {
    let response = Request::post(&format!("{}/ask", get_api_base()))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(server_detail(response, "The assistant is unavailable").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_serializes_null_session_for_new_conversations() {
        let request = AskRequest {
            message: "Hello".to_string(),
            user_email: "alice@example.com".to_string(),
            session_id: None,
            system_prompt: SYSTEM_PROMPT.to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("session_id").unwrap().is_null());
        assert_eq!(value.get("message").unwrap(), "Hello");
        assert_eq!(value.get("user_email").unwrap(), "alice@example.com");
    }

    #[test]
    fn ask_request_carries_the_active_session_id() {
        let request = AskRequest {
            message: "More".to_string(),
            user_email: "alice@example.com".to_string(),
            session_id: Some("s1".to_string()),
            system_prompt: SYSTEM_PROMPT.to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value.get("session_id").unwrap(), "s1");
    }

    #[test]
    fn message_roles_use_the_wire_spelling() {
        let messages: Vec<Message> = serde_json::from_str(
            r#"[{"role":"user","content":"Hello"},{"role":"assistant","content":"Hi!"}]"#,
        )
        .unwrap();
        assert_eq!(messages[0].role, crate::state::chat::Role::User);
        assert_eq!(messages[1].role, crate::state::chat::Role::Assistant);
    }
}
