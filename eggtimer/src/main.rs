//! Egg Timer - a desktop egg timer
//!
//! Type the boil time in seconds, press start, and watch the egg cook.

mod app;

use app::EggTimerApp;
use eframe::NativeOptions;
use eggcore::{EggTheme, EggTimerConfig, TimerError, Ticker};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

fn run(config: EggTimerConfig) -> Result<(), AppError> {
    config.validate()?;
    let ticker = Ticker::start(config.tick_hz)?;
    tracing::info!(tick_hz = config.tick_hz, interval = ?ticker.interval(), "ticker running");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(config.resizable)
            .with_title(config.title.as_str()),
        ..Default::default()
    };

    let tick_hz = config.tick_hz;
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| {
            EggTheme::default().apply(&cc.egui_ctx);
            Box::new(EggTimerApp::new(cc, ticker, tick_hz))
        }),
    )?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    if let Err(err) = run(EggTimerConfig::default()) {
        tracing::error!(%err, "egg timer exited with an error");
        std::process::exit(1);
    }
    tracing::info!("window closed");
}
