//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-facing integrations (SQLite, config files,
//! clocks, key-value storage) and the demo dataset.

pub mod app_config;
pub mod clock;
pub mod db;
pub mod kv;
pub mod seed;
