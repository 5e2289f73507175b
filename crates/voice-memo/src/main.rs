//! Voice Memo: record, list, replay and export audio clips from the terminal.

mod app;
mod app_command;
mod config;
mod error;
mod input_handler;
mod platform;
mod renderer;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    input_handler::InputHandler,
    renderer::Renderer,
};

use crate::config::Config;

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use voice_memo_core::ScreenController;

/// Application entry point.
fn main() {
    // Logs go to stderr; stdout is the screen.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("voice_memo=debug,voice_memo_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.ensure_directories() {
        error!("Failed to prepare storage directories: {:?}", e);
        std::process::exit(1);
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let controller = ScreenController::new(
            platform::desktop_capabilities(&config),
            config.controller_options(),
        );

        let (command_tx, command_rx) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let renderer = Renderer::new(controller.subscribe());
        let input_handler = InputHandler::new(command_tx);

        println!("{}", input_handler::HELP);

        let app = App {
            controller,
            command_rx,
            shutdown_tx,
        };

        let renderer_shutdown = shutdown_rx.clone();

        tokio::join!(
            async {
                if let Err(e) = input_handler.run(shutdown_rx).await {
                    error!(error = ?e, "Input handler error");
                }
            },
            async {
                if let Err(e) = renderer.run(renderer_shutdown).await {
                    error!(error = ?e, "Renderer error");
                }
            },
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "App error");
                }
            }
        );
    });

    // Stdin reads cannot be cancelled; don't wait on them forever.
    rt.shutdown_timeout(Duration::from_secs(1));
    info!("Exited");
}
