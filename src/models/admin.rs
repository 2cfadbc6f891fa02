//! Admin roster model

use serde::{Deserialize, Serialize};
use teloxide::types::{ChatMember, ChatMemberKind, UserId};

/// Membership status reported by Telegram for a roster entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminStatus {
    Owner,
    Administrator,
    Member,
    Restricted,
    Left,
    Banned,
}

impl AdminStatus {
    /// Owners and administrators
    pub fn is_privileged(self) -> bool {
        matches!(self, AdminStatus::Owner | AdminStatus::Administrator)
    }
}

impl From<&ChatMemberKind> for AdminStatus {
    fn from(kind: &ChatMemberKind) -> Self {
        match kind {
            ChatMemberKind::Owner(_) => AdminStatus::Owner,
            ChatMemberKind::Administrator(_) => AdminStatus::Administrator,
            ChatMemberKind::Restricted(_) => AdminStatus::Restricted,
            ChatMemberKind::Banned(_) => AdminStatus::Banned,
            ChatMemberKind::Left => AdminStatus::Left,
            _ => AdminStatus::Member,
        }
    }
}

/// One row of a group's admin roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    pub user_id: UserId,
    pub is_bot: bool,
    pub display_name: String,
    pub username: Option<String>,
    pub status: AdminStatus,
    pub can_post_messages: bool,
    pub can_delete_messages: bool,
}

impl AdminRecord {
    pub fn is_privileged(&self) -> bool {
        self.status.is_privileged()
    }

    /// `@username` when available, otherwise the display name
    pub fn mention(&self) -> String {
        match &self.username {
            Some(username) => format!("@{}", username),
            None => self.display_name.clone(),
        }
    }
}

impl From<&ChatMember> for AdminRecord {
    fn from(member: &ChatMember) -> Self {
        let (can_post_messages, can_delete_messages) = match &member.kind {
            ChatMemberKind::Owner(_) => (true, true),
            ChatMemberKind::Administrator(rights) => {
                (rights.can_post_messages, rights.can_delete_messages)
            }
            _ => (false, false),
        };

        Self {
            user_id: member.user.id,
            is_bot: member.user.is_bot,
            display_name: member.user.full_name(),
            username: member.user.username.clone(),
            status: AdminStatus::from(&member.kind),
            can_post_messages,
            can_delete_messages,
        }
    }
}
