//! Terminal front end for the question browser.
mod app;
pub mod commands;
pub mod config;
mod effects;
pub mod logging;
pub mod render;

pub use app::{run_app, App};
pub use effects::{map_event, to_params, EffectRunner};
