//! Bot handlers module
//!
//! Update handlers and the dispatcher tree that routes to them

pub mod commands;
pub mod members;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Update;

pub use commands::{format_admin_list, handle_command, Command};
pub use members::handle_member_update;

/// Build the dispatcher tree. Handlers expect a [`BotContext`](crate::state::BotContext)
/// dependency.
pub fn schema() -> UpdateHandler<crate::utils::errors::RubotError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_my_chat_member().endpoint(handle_member_update))
        .branch(Update::filter_chat_member().endpoint(handle_member_update))
}
