//! Groups module
//!
//! Channels and chats the bot administers. Both are views over a shared
//! [`GroupEntity`] that owns the admin roster cache; the extra methods of
//! each kind live on [`Channel`] and [`Chat`].

pub mod api;
pub mod channel;
pub mod chat;
pub mod entity;

pub use api::GroupApi;
pub use channel::Channel;
pub use chat::Chat;
pub use entity::GroupEntity;
