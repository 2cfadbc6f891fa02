//! Per-update bot context
//!
//! [`BotContext`] is registered as a dispatcher dependency and handed to
//! every handler. It gives feature code access to group entities without
//! threading the bot or registry through each call.

use std::sync::Arc;
use teloxide::types::{ChatId, Me, UserId};
use crate::groups::{Channel, Chat, GroupEntity};
use super::registry::GroupRegistry;

/// Identity of the running bot, learned from `getMe` at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    pub user_id: UserId,
    pub username: Option<String>,
}

impl From<&Me> for BotIdentity {
    fn from(me: &Me) -> Self {
        Self {
            user_id: me.user.id,
            username: me.user.username.clone(),
        }
    }
}

/// Helpers attached to each update's execution context
#[derive(Debug, Clone)]
pub struct BotContext {
    registry: Arc<GroupRegistry>,
    identity: Arc<BotIdentity>,
    private_channel_id: Option<ChatId>,
}

impl BotContext {
    pub fn new(
        registry: Arc<GroupRegistry>,
        identity: BotIdentity,
        private_channel_id: Option<ChatId>,
    ) -> Self {
        Self {
            registry,
            identity: Arc::new(identity),
            private_channel_id,
        }
    }

    pub fn registry(&self) -> &Arc<GroupRegistry> {
        &self.registry
    }

    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }

    pub fn bot_id(&self) -> UserId {
        self.identity.user_id
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.identity.username.as_deref()
    }

    /// Get or create the chat for `id`
    pub fn get_chat(&self, id: ChatId) -> Arc<Chat> {
        self.registry.get_chat(id)
    }

    /// Get or create the channel for `id`
    pub fn get_channel(&self, id: ChatId) -> Channel {
        self.registry.get_channel(id)
    }

    /// Get or create the base group entity for `id`
    pub fn get_group(&self, id: ChatId) -> Arc<GroupEntity> {
        self.registry.get_group(id)
    }

    /// The configured private channel, if any
    pub fn private_channel(&self) -> Option<Channel> {
        self.private_channel_id.map(|id| self.get_channel(id))
    }

    pub fn owned_chats(&self) -> Vec<Arc<Chat>> {
        self.registry.owned_chats()
    }

    pub fn is_owned_chat(&self, id: ChatId) -> bool {
        self.registry.is_owned(id)
    }

    /// Whether the bot already tracks a group entity for `id`
    pub fn is_known_group(&self, id: ChatId) -> bool {
        self.registry.is_registered(id)
    }
}
