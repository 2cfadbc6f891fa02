//! Shared admin roster cache for channels and chats
//!
//! A [`GroupEntity`] lazily fetches the administrator list of one Telegram
//! group and keeps it for a fixed TTL. Failed fetches never replace or extend
//! the cached roster; callers just see "no admins known" for that round.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use teloxide::types::{ChatId, MessageId, UserId};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};
use crate::models::AdminRecord;
use crate::utils::errors::Result;
use crate::utils::logging::log_roster_refresh;
use super::GroupApi;

/// Roster plus the instant it goes stale. Always written together.
#[derive(Debug, Clone)]
struct RosterCache {
    admins: Arc<[AdminRecord]>,
    next_refresh_at: Instant,
}

impl RosterCache {
    fn fresh(&self, now: Instant) -> Option<Arc<[AdminRecord]>> {
        (now < self.next_refresh_at).then(|| Arc::clone(&self.admins))
    }
}

/// Base state and behaviour of any group the bot administers
pub struct GroupEntity {
    id: ChatId,
    bot_id: UserId,
    ttl: Duration,
    api: Arc<dyn GroupApi>,
    roster: RwLock<RosterCache>,
    refresh_gate: Mutex<()>,
}

impl GroupEntity {
    /// New entity with an empty roster that is due for refresh immediately
    pub fn new(id: ChatId, bot_id: UserId, ttl: Duration, api: Arc<dyn GroupApi>) -> Self {
        Self {
            id,
            bot_id,
            ttl,
            api,
            roster: RwLock::new(RosterCache {
                admins: Arc::new([]),
                next_refresh_at: Instant::now(),
            }),
            refresh_gate: Mutex::new(()),
        }
    }

    pub fn id(&self) -> ChatId {
        self.id
    }

    pub fn bot_id(&self) -> UserId {
        self.bot_id
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current admin roster, refreshed from Telegram when stale or forced.
    ///
    /// Never fails: a failed fetch yields an empty roster and leaves the
    /// cache as it was, so the next call retries.
    pub async fn get_admins(&self, force_refresh: bool) -> Arc<[AdminRecord]> {
        debug!(chat_id = self.id.0, force_refresh, "get_admins");

        if !force_refresh {
            if let Some(admins) = self.cached() {
                return admins;
            }
        }

        let _gate = self.refresh_gate.lock().await;

        // Another caller may have refreshed while we waited for the gate
        if !force_refresh {
            if let Some(admins) = self.cached() {
                return admins;
            }
        }

        match self.fetch_and_store(force_refresh).await {
            Ok(admins) => admins,
            Err(e) => {
                warn!(chat_id = self.id.0, error = %e, "Failed to fetch chat administrators");
                Arc::new([])
            }
        }
    }

    /// Fetch the roster unconditionally, surfacing the failure.
    ///
    /// On error the cache is left untouched.
    pub async fn refresh_admins(&self) -> Result<Arc<[AdminRecord]>> {
        let _gate = self.refresh_gate.lock().await;
        self.fetch_and_store(true).await
    }

    /// Whether `user_id` is an owner or administrator of this group
    pub async fn is_admin(&self, user_id: UserId) -> bool {
        let admins = self.get_admins(false).await;

        match admins.iter().find(|admin| admin.user_id == user_id) {
            Some(found) => {
                debug!(chat_id = self.id.0, user_id = user_id.0, status = ?found.status, "Found roster entry");
                found.is_privileged()
            }
            None => false,
        }
    }

    pub async fn is_bot_admin(&self) -> bool {
        self.is_admin(self.bot_id).await
    }

    /// The bot's own roster entry, if it is an admin here
    pub async fn bot_record(&self) -> Option<AdminRecord> {
        let admins = self.get_admins(false).await;
        admins.iter().find(|admin| admin.user_id == self.bot_id).cloned()
    }

    /// Best-effort message deletion.
    ///
    /// Returns whether Telegram confirmed the deletion. Messages that are
    /// already gone, too old, or not ours to delete are reported as `false`.
    pub async fn delete_message(&self, message_id: MessageId) -> bool {
        debug!(chat_id = self.id.0, message_id = message_id.0, "delete_message");

        match self.api.remove_message(self.id, message_id).await {
            Ok(()) => true,
            Err(e) => {
                debug!(chat_id = self.id.0, message_id = message_id.0, error = %e, "delete_message failed");
                false
            }
        }
    }

    /// Number of admins in the cached roster, without refreshing
    pub fn admin_count(&self) -> usize {
        self.read_roster().admins.len()
    }

    /// Time left until the cached roster goes stale
    pub fn next_refresh_in(&self) -> Duration {
        self.read_roster()
            .next_refresh_at
            .saturating_duration_since(Instant::now())
    }

    fn cached(&self) -> Option<Arc<[AdminRecord]>> {
        self.read_roster().fresh(Instant::now())
    }

    async fn fetch_and_store(&self, forced: bool) -> Result<Arc<[AdminRecord]>> {
        let admins: Arc<[AdminRecord]> = self.api.fetch_administrators(self.id).await?.into();

        {
            let mut roster = self.roster.write().unwrap_or_else(PoisonError::into_inner);
            *roster = RosterCache {
                admins: Arc::clone(&admins),
                next_refresh_at: Instant::now() + self.ttl,
            };
        }

        log_roster_refresh(self.id.0, admins.len(), forced);
        Ok(admins)
    }

    fn read_roster(&self) -> std::sync::RwLockReadGuard<'_, RosterCache> {
        self.roster.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for GroupEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupEntity")
            .field("id", &self.id)
            .field("bot_id", &self.bot_id)
            .field("ttl", &self.ttl)
            .field("admin_count", &self.admin_count())
            .finish()
    }
}
