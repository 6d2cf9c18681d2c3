//! Command handlers.

pub mod completions;
pub mod new_site;
pub mod update_plugin;
