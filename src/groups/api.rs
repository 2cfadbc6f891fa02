//! Telegram calls the group layer depends on

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::MessageId;
use crate::models::AdminRecord;
use crate::utils::errors::Result;

/// Platform operations needed by [`GroupEntity`](super::GroupEntity)
#[async_trait]
pub trait GroupApi: Send + Sync {
    /// Full administrator roster of `chat_id`
    async fn fetch_administrators(&self, chat_id: ChatId) -> Result<Vec<AdminRecord>>;

    /// Delete a message in `chat_id`
    async fn remove_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()>;
}

#[async_trait]
impl GroupApi for Bot {
    async fn fetch_administrators(&self, chat_id: ChatId) -> Result<Vec<AdminRecord>> {
        let members = self.get_chat_administrators(chat_id).await?;
        Ok(members.iter().map(AdminRecord::from).collect())
    }

    async fn remove_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.delete_message(chat_id, message_id).await?;
        Ok(())
    }
}
