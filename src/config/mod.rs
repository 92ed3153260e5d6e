//! config/mod.rs
pub mod crm_config;
