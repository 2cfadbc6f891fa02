//! Chat view over a group entity

use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};
use serde_json::Value;
use crate::config::ChatOptions;
use super::GroupEntity;

/// A group chat the bot moderates, with its configured options
#[derive(Debug)]
pub struct Chat {
    group: Arc<GroupEntity>,
    options: RwLock<ChatOptions>,
}

impl Chat {
    pub fn new(group: Arc<GroupEntity>) -> Self {
        Self {
            group,
            options: RwLock::new(ChatOptions::new()),
        }
    }

    pub fn group(&self) -> &Arc<GroupEntity> {
        &self.group
    }

    /// Replace the chat's options wholesale. No validation happens here.
    pub fn set_options(&self, options: ChatOptions) {
        *self.options.write().unwrap_or_else(PoisonError::into_inner) = options;
    }

    pub fn get_options(&self) -> ChatOptions {
        self.options.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Single option lookup
    pub fn option(&self, key: &str) -> Option<Value> {
        self.options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl Deref for Chat {
    type Target = GroupEntity;

    fn deref(&self) -> &GroupEntity {
        &self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use serde_json::json;
    use teloxide::types::{ChatId, UserId};
    use crate::groups::testing::{admin, FakeGroupApi};

    fn chat() -> Chat {
        let api = Arc::new(FakeGroupApi::with_roster(vec![admin(5)]));
        Chat::new(Arc::new(GroupEntity::new(
            ChatId(-1001),
            UserId(42),
            Duration::from_secs(60),
            api,
        )))
    }

    fn options(value: Value) -> ChatOptions {
        match value {
            Value::Object(map) => map,
            _ => panic!("options must be an object"),
        }
    }

    #[test]
    fn test_options_start_empty() {
        assert!(chat().get_options().is_empty());
    }

    #[test]
    fn test_set_options_overwrites() {
        let chat = chat();
        chat.set_options(options(json!({ "welcome": "hi", "strict": true })));
        chat.set_options(options(json!({ "welcome": "hello" })));

        let current = chat.get_options();
        assert_eq!(current.len(), 1);
        assert_eq!(chat.option("welcome"), Some(json!("hello")));
        assert_eq!(chat.option("strict"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_exposes_group_contract() {
        let chat = chat();
        assert!(chat.is_admin(UserId(5)).await);
        assert_eq!(chat.id(), ChatId(-1001));
    }
}
