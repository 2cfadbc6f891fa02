//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn failing() -> Self {
        Self {
            success: false,
            ..Self::default()
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// A bot that sends every request to this server
    pub fn bot(&self) -> Bot {
        let api_url = url::Url::parse(&self.server.uri()).expect("mock server uri");
        Bot::new(test_bot_token()).set_api_url(api_url)
    }

    /// Setup mock for getChatAdministrators returning `members`
    pub async fn mock_get_chat_administrators(&self, members: Vec<Value>, config: MockResponseConfig) {
        let body = config.custom_response.clone().unwrap_or_else(|| {
            if config.success {
                json!({ "ok": true, "result": members })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: chat not found"
                })
            }
        });

        self.mount("getchatadministrators", body, &config).await;
    }

    /// Setup mock for deleteMessage endpoint
    pub async fn mock_delete_message(&self, config: MockResponseConfig) {
        let body = config.custom_response.clone().unwrap_or_else(|| {
            if config.success {
                json!({ "ok": true, "result": true })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: message to delete not found"
                })
            }
        });

        self.mount("deletemessage", body, &config).await;
    }

    /// Number of requests received for a Bot API method
    pub async fn request_count(&self, api_method: &str) -> usize {
        let suffix = format!("/{}", api_method.to_lowercase());
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path().to_lowercase().ends_with(&suffix))
            .count()
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    async fn mount(&self, api_method: &str, body: Value, config: &MockResponseConfig) {
        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path_regex(format!(r"(?i)^/bot[^/]+/{}$", api_method)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }
}

/// Telegram user JSON
pub fn user_json(id: i64, first_name: &str, username: Option<&str>, is_bot: bool) -> Value {
    let mut user = json!({
        "id": id,
        "is_bot": is_bot,
        "first_name": first_name,
        "language_code": "en"
    });
    if let Some(username) = username {
        user["username"] = json!(username);
    }
    user
}

/// `ChatMemberOwner` JSON
pub fn owner_json(user: Value) -> Value {
    json!({
        "user": user,
        "status": "creator",
        "is_anonymous": false
    })
}

/// `ChatMemberAdministrator` JSON; posting and editing follow `can_post_messages`
pub fn administrator_json(user: Value, can_post_messages: bool) -> Value {
    json!({
        "user": user,
        "status": "administrator",
        "can_be_edited": false,
        "is_anonymous": false,
        "can_manage_chat": true,
        "can_delete_messages": true,
        "can_manage_video_chats": true,
        "can_restrict_members": true,
        "can_promote_members": false,
        "can_change_info": true,
        "can_invite_users": true,
        "can_post_messages": can_post_messages,
        "can_edit_messages": can_post_messages,
        "can_pin_messages": true,
        "can_manage_topics": false,
        "can_post_stories": false,
        "can_edit_stories": false,
        "can_delete_stories": false
    })
}

/// Test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Test chat ID
pub fn test_chat_id() -> i64 {
    -1001234567890
}

/// The bot's own user id in mocked responses
pub fn test_bot_id() -> u64 {
    12345
}
