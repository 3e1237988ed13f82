mod app;
mod config;

use anyhow::Context;
use app::LifeApp;
use config::AppConfig;
use eframe::egui;
use eframe::run_native;
use life_core::Grid;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::default();
    let grid = Grid::new(config.board_width, config.board_height)
        .context("create board")?;
    log::info!(
        "starting with a {}x{} board",
        config.board_width,
        config.board_height
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Game of Life")
            .with_inner_size(config.window_size()),
        ..Default::default()
    };

    run_native(
        "Game of Life",
        options,
        Box::new(|cc| Ok(Box::new(LifeApp::new(cc, grid, config)))),
    )
    .map_err(|err| anyhow::anyhow!("run native app: {err}"))
}
