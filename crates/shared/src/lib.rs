pub mod error;
pub mod geo;
pub mod i18n;
pub mod models;
pub mod offline;
pub mod panel;
pub mod render;
pub mod route;
pub mod settings;
