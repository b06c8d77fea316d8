//! Console library components for the VetEMR clinic client.

pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
