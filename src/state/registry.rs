//! Process-wide group registry
//!
//! The registry is the only place group entities are created, which keeps a
//! single roster cache per Telegram chat id. Entries live as long as the
//! registry and are never evicted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use teloxide::types::{ChatId, UserId};
use tracing::{debug, info};
use crate::config::ChatlistEntry;
use crate::groups::{Channel, Chat, GroupApi, GroupEntity};

#[derive(Default)]
struct Entries {
    groups: HashMap<ChatId, Arc<GroupEntity>>,
    chats: HashMap<ChatId, Arc<Chat>>,
    owned: Vec<ChatId>,
}

/// Registry of every channel and chat the bot has touched
pub struct GroupRegistry {
    api: Arc<dyn GroupApi>,
    bot_id: UserId,
    admin_ttl: Duration,
    entries: Mutex<Entries>,
}

impl GroupRegistry {
    pub fn new(api: Arc<dyn GroupApi>, bot_id: UserId, admin_ttl: Duration) -> Self {
        Self {
            api,
            bot_id,
            admin_ttl,
            entries: Mutex::new(Entries::default()),
        }
    }

    pub fn bot_id(&self) -> UserId {
        self.bot_id
    }

    /// The single group entity for `id`, created on first use
    pub fn get_group(&self, id: ChatId) -> Arc<GroupEntity> {
        let mut entries = self.lock();
        self.group_entry(&mut entries, id)
    }

    /// The chat registered for `id`, created on first use.
    ///
    /// Repeated calls with the same id return the same instance.
    pub fn get_chat(&self, id: ChatId) -> Arc<Chat> {
        let mut entries = self.lock();

        if let Some(chat) = entries.chats.get(&id) {
            return Arc::clone(chat);
        }

        let chat = Arc::new(Chat::new(self.group_entry(&mut entries, id)));
        entries.chats.insert(id, Arc::clone(&chat));
        debug!(chat_id = id.0, "Registered chat");
        chat
    }

    /// Channel view over the group entity for `id`
    pub fn get_channel(&self, id: ChatId) -> Channel {
        Channel::new(self.get_group(id))
    }

    /// Register the chatlist entries as owned chats, applying their options.
    ///
    /// Returns the chats in chatlist order.
    pub fn register_owned(&self, entries: Vec<ChatlistEntry>) -> Vec<Arc<Chat>> {
        let mut chats = Vec::with_capacity(entries.len());

        for entry in entries {
            info!(chat_id = entry.id, "Create chat instance");
            let id = ChatId(entry.id);
            let chat = self.get_chat(id);
            chat.set_options(entry.options);

            let mut registered = self.lock();
            if !registered.owned.contains(&id) {
                registered.owned.push(id);
            }
            drop(registered);

            chats.push(chat);
        }

        chats
    }

    /// Owned chats in chatlist order
    pub fn owned_chats(&self) -> Vec<Arc<Chat>> {
        let entries = self.lock();
        entries
            .owned
            .iter()
            .filter_map(|id| entries.chats.get(id).cloned())
            .collect()
    }

    pub fn is_owned(&self, id: ChatId) -> bool {
        self.lock().owned.contains(&id)
    }

    /// Whether an entity already exists for `id`
    pub fn is_registered(&self, id: ChatId) -> bool {
        self.lock().groups.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.lock().groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn group_entry(&self, entries: &mut Entries, id: ChatId) -> Arc<GroupEntity> {
        let group = entries.groups.entry(id).or_insert_with(|| {
            debug!(chat_id = id.0, "Creating group entity");
            Arc::new(GroupEntity::new(id, self.bot_id, self.admin_ttl, Arc::clone(&self.api)))
        });
        Arc::clone(group)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for GroupRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.lock();
        f.debug_struct("GroupRegistry")
            .field("bot_id", &self.bot_id)
            .field("admin_ttl", &self.admin_ttl)
            .field("groups", &entries.groups.len())
            .field("owned", &entries.owned)
            .finish()
    }
}
