pub mod app;
pub mod autocomplete;
pub mod config;
pub mod debouncer;
pub mod detail;
pub mod error;
pub mod html;
pub mod input;
pub mod layout;
pub mod logging;
pub mod matcher;
pub mod sanitize;
pub mod source;
pub mod widgets;
