//! rubot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use futures::future::join_all;
use teloxide::prelude::*;
use tracing::{error, info, warn};

use rubot::{
    config::{load_chatlist, ChatlistEntry, Settings},
    handlers,
    state::{BotContext, BotIdentity, GroupRegistry},
    utils::{errors::ChatlistError, logging},
    RubotError,
};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => fatal(&format!("Failed to load configuration: {}", e)),
    };
    if let Err(e) = settings.validate() {
        fatal(&e.to_string());
    }

    // Initialize logging
    let _log_guard = match logging::init_logging(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => fatal(&e.to_string()),
    };

    // The chatlist is read before anything touches the network
    let chatlist = match load_chatlist(&settings.chatlist.path) {
        Ok(entries) => entries,
        Err(e) => {
            if let ChatlistError::Missing { .. } = e {
                error!("Maybe you forgot to create the chatlist file?");
            }
            error!(error = %e, "Cannot start without a valid chatlist");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(settings, chatlist).await {
        error!(error = ?e, "rubot stopped with an error");
        std::process::exit(1);
    }
}

async fn run(settings: Settings, chatlist: Vec<ChatlistEntry>) -> anyhow::Result<()> {
    info!("Starting {}...", rubot::info());

    let bot = Bot::new(&settings.bot.token);

    let me = bot.get_me().await.context("getMe failed; check the bot token")?;
    let identity = BotIdentity::from(&me);
    info!(bot_id = identity.user_id.0, username = ?identity.username, "Bot identity resolved");

    let registry = Arc::new(GroupRegistry::new(
        Arc::new(bot.clone()),
        identity.user_id,
        settings.bot.admin_cache_ttl(),
    ));
    let ctx = BotContext::new(
        Arc::clone(&registry),
        identity,
        settings.bot.private_channel_id.map(ChatId),
    );

    if let Some(channel) = ctx.private_channel() {
        if !channel.can_post_messages().await {
            return Err(RubotError::PermissionDenied(format!(
                "bot should be admin and able to post messages in private channel {}",
                channel.id().0
            ))
            .into());
        }
        info!(chat_id = channel.id().0, "Private channel is writable");
    }

    let owned = registry.register_owned(chatlist);
    let rosters = join_all(owned.iter().map(|chat| chat.get_admins(false))).await;
    for (chat, admins) in owned.iter().zip(&rosters) {
        if admins.is_empty() {
            warn!(chat_id = chat.id().0, "No administrators known after warm-up");
        }
    }
    info!(count = owned.len(), "Owned chats registered");

    let mut dispatcher = Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![ctx, me])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Start polling...");
    dispatcher.dispatch().await;

    info!("rubot has been shut down.");
    Ok(())
}

/// Report a startup failure before logging exists and exit non-zero
fn fatal(message: &str) -> ! {
    eprintln!("ERROR: {}", message);
    std::process::exit(1);
}
