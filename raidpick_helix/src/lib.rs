//! A [`Directory`](raidpick_core::Directory) backed by Twitch's Helix API

mod oauth;
pub use oauth::OAuth;

mod client;
pub use client::{HelixClient, HelixError};

mod directory;

pub mod config;
pub mod data;

mod serde;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod testing;
