pub mod contact;
pub mod identity_config;
pub mod project;
pub mod site_config;
