pub mod auth;
pub mod config;
pub mod config_store;
pub mod contact;
pub mod identity;
pub mod projects;
pub mod session;
pub mod validation;
pub mod webhook;
