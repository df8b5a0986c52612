//! Command implementations for Jetsong CLI

pub mod config;
pub mod helpers;
pub mod info;
pub mod install;
pub mod list;
pub mod search;
