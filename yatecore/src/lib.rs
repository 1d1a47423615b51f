//! yatecore — shared library for the YATE editor

pub mod storage;
pub mod theme;
pub mod widgets;

pub use storage::Preferences;
pub use theme::YateTheme;
