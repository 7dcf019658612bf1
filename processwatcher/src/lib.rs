//! processwatcher: inspect and manage processes and aggregate resource usage.

pub mod config;
pub mod controller;
pub mod history;
pub mod inspector;
pub mod lister;
pub mod monitor;
pub mod resource_log;
pub mod ui;
