//! Test helpers module
//!
//! This module provides utilities and helpers for testing rubot against a
//! mocked Telegram Bot API.

pub mod telegram_mock;

pub use telegram_mock::*;
