//! YATE - yet another text editor
//!
//! A small egui editor with a file menu, emoji insertion and a remembered
//! last-used directory. The file logic lives in [`controller`] and talks to
//! the window only through the [`shell::Shell`] trait.

pub mod app;
pub mod command;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod document;
pub mod logging;
pub mod shell;

pub use app::YateApp;
pub use config::Config;
