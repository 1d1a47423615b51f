//! YATE - yet another text editor
//!
//! A small desktop editor with a file menu, emoji insertion and a
//! remembered last-used directory.

use eframe::NativeOptions;
use yate::config::{MIN_HEIGHT, MIN_WIDTH};
use yate::shell::window_title;
use yate::{Config, YateApp};

fn main() -> eframe::Result<()> {
    yate::logging::init();
    let config = Config::from_env();
    tracing::info!("assets directory: {}", config.assets_dir.display());

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([MIN_WIDTH, MIN_HEIGHT])
            .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT])
            .with_title(window_title(None)),
        ..Default::default()
    };

    eframe::run_native(
        "YATE",
        options,
        Box::new(move |cc| {
            yatecore::YateTheme::default().apply(&cc.egui_ctx);
            Box::new(YateApp::new(cc, config))
        }),
    )
}
