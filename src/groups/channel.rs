//! Channel view over a group entity

use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;
use super::GroupEntity;

/// A Telegram channel the bot publishes into
#[derive(Debug, Clone)]
pub struct Channel {
    group: Arc<GroupEntity>,
}

impl Channel {
    pub fn new(group: Arc<GroupEntity>) -> Self {
        Self { group }
    }

    pub fn group(&self) -> &Arc<GroupEntity> {
        &self.group
    }

    /// Whether the bot is an admin here with the right to post.
    ///
    /// Derived from the cached roster on every call.
    pub async fn can_post_messages(&self) -> bool {
        let allowed = self
            .group
            .bot_record()
            .await
            .map(|record| record.can_post_messages)
            .unwrap_or(false);

        debug!(chat_id = self.group.id().0, allowed, "can_post_messages");
        allowed
    }
}

impl Deref for Channel {
    type Target = GroupEntity;

    fn deref(&self) -> &GroupEntity {
        &self.group
    }
}
