pub mod config;
pub mod date_utils;
pub mod error;
pub mod locale;
pub mod models;
pub mod money;
pub mod report;
pub mod serde_utils;
pub mod services;
