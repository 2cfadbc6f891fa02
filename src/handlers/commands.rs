//! Command handlers
//!
//! Commands only act inside owned chats; everywhere else they are ignored.

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};
use crate::models::{AdminRecord, AdminStatus};
use crate::state::BotContext;
use crate::utils::errors::Result;
use crate::utils::logging::{log_admin_action, log_api_error};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "rubot commands")]
pub enum Command {
    #[command(description = "Show this help")]
    Help,
    #[command(description = "List the chat administrators")]
    Admins,
    #[command(description = "Reload the administrator list (admins only)")]
    Refresh,
}

/// Handle bot commands
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, ctx: BotContext) -> Result<()> {
    let chat_id = msg.chat.id;

    if cmd == Command::Help {
        bot.send_message(chat_id, Command::descriptions().to_string()).await?;
        return Ok(());
    }

    if !ctx.is_owned_chat(chat_id) {
        debug!(chat_id = chat_id.0, command = ?cmd, "Ignoring command outside owned chats");
        return Ok(());
    }

    let chat = ctx.get_chat(chat_id);

    match cmd {
        Command::Help => {}
        Command::Admins => {
            let admins = chat.get_admins(false).await;
            bot.send_message(chat_id, format_admin_list(&admins)).await?;
        }
        Command::Refresh => {
            let Some(user) = msg.from.as_ref() else {
                return Ok(());
            };

            if !chat.is_admin(user.id).await {
                warn!(user_id = user.id.0, chat_id = chat_id.0, "Refresh requested by non-admin");
                chat.delete_message(msg.id).await;
                return Ok(());
            }

            match chat.refresh_admins().await {
                Ok(admins) => {
                    log_admin_action(user.id.0, chat_id.0, "refresh_admins", None);
                    chat.delete_message(msg.id).await;
                    info!(chat_id = chat_id.0, admin_count = admins.len(), "Admin list refreshed on request");
                    bot.send_message(
                        chat_id,
                        format!("Admin list refreshed: {} administrators.", admins.len()),
                    )
                    .await?;
                }
                Err(e) => {
                    log_api_error("getChatAdministrators", &e.to_string(), Some("refresh command"));
                    bot.send_message(chat_id, "Could not reload the admin list, try again later.")
                        .await?;
                }
            }
        }
    }

    Ok(())
}

/// Human-readable roster, owners first, bots last
pub fn format_admin_list(admins: &[AdminRecord]) -> String {
    let mut listed: Vec<&AdminRecord> = admins.iter().filter(|a| a.is_privileged()).collect();
    if listed.is_empty() {
        return "No administrators known for this chat.".to_string();
    }

    listed.sort_by_key(|a| (a.status != AdminStatus::Owner, a.is_bot));

    let lines: Vec<String> = listed
        .iter()
        .map(|admin| {
            let mut line = format!("• {}", admin.mention());
            if admin.status == AdminStatus::Owner {
                line.push_str(" (owner)");
            }
            if admin.is_bot {
                line.push_str(" (bot)");
            }
            line
        })
        .collect();

    format!("Administrators:\n{}", lines.join("\n"))
}
