//! Chat member update handlers
//!
//! Promotions and demotions invalidate the cached roster, so any update that
//! changes someone's admin status in a tracked group forces a refresh.

use teloxide::types::ChatMemberUpdated;
use tracing::{debug, info};
use crate::models::AdminRecord;
use crate::state::BotContext;
use crate::utils::errors::Result;

/// Handle `chat_member` and `my_chat_member` updates
pub async fn handle_member_update(update: ChatMemberUpdated, ctx: BotContext) -> Result<()> {
    let chat_id = update.chat.id;
    let user_id = update.new_chat_member.user.id;

    if !admin_status_changed(&update) {
        debug!(chat_id = chat_id.0, user_id = user_id.0, "Member update without admin change");
        return Ok(());
    }

    if !ctx.is_known_group(chat_id) && user_id != ctx.bot_id() {
        debug!(chat_id = chat_id.0, "Admin change in untracked group");
        return Ok(());
    }

    let group = ctx.get_group(chat_id);
    let admins = group.get_admins(true).await;
    info!(
        chat_id = chat_id.0,
        user_id = user_id.0,
        is_bot = user_id == ctx.bot_id(),
        admin_count = admins.len(),
        "Admin roster refreshed after membership change"
    );

    Ok(())
}

/// Whether the update moves a user into or out of owner/administrator status,
/// or changes the rights the roster tracks
pub fn admin_status_changed(update: &ChatMemberUpdated) -> bool {
    let old = AdminRecord::from(&update.old_chat_member);
    let new = AdminRecord::from(&update.new_chat_member);

    old.is_privileged() != new.is_privileged()
        || (new.is_privileged()
            && (old.can_post_messages != new.can_post_messages
                || old.can_delete_messages != new.can_delete_messages))
}
