//! chatshell - a terminal client for a remote dialogue service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod dialogue;
pub mod error;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod transcript;
pub mod ui;
pub mod widgets;
