// main.rs - Desktop front end for Conway's Game of Life

use anyhow::Context;
use conway::LifeGame;
use eframe::egui;

mod ui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Drives the generation ticker; must outlive the window.
    let runtime = tokio::runtime::Runtime::new().context("failed to start the tick runtime")?;
    let handle = runtime.handle().clone();
    let game = LifeGame::new(handle.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(ui::WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(ui::LifeApp::new(cc, game, &handle))),
    )
    .map_err(|err| anyhow::anyhow!("window failed: {err}"))
}
