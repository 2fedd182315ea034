pub mod animation;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod host;
pub mod icons;
pub mod modal;
pub mod view_store;
