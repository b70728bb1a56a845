//! Terminal client for the news bias classification service.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod orchestrator;
pub mod ui;
