pub mod app;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod layout;
pub mod overlay;
pub mod suggest;
pub mod widgets;
pub mod wordlist;
