use crate::{AppCommand, AppResult};

use tokio::sync::{mpsc, watch};
use tracing::{error, info, instrument};
use voice_memo_core::{ScreenController, ScreenIntent};

/// Main application state.
///
/// Owns the screen controller and applies commands strictly one at a time,
/// so each intent settles before the next one starts.
pub struct App {
    pub(crate) controller: ScreenController,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Voice Memo starting");

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    if cmd == AppCommand::Shutdown {
                        info!("Shutdown requested");
                        break;
                    }
                    if let Err(e) = self.handle_command(cmd).await {
                        error!(command = ?cmd, error = ?e, "Command failed");
                    }
                }

                _ = &mut ctrl_c => {
                    info!("Interrupted, shutting down");
                    break;
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        if let Err(e) = self.controller.finalize_on_teardown().await {
            error!(error = ?e, "Failed to finalize recording at shutdown");
        }

        let _ = self.shutdown_tx.send(true);
        info!("Voice Memo shut down successfully");

        Ok(())
    }

    /// Map a command onto a screen intent and run it.
    #[instrument(skip(self))]
    pub(crate) async fn handle_command(&mut self, cmd: AppCommand) -> AppResult<()> {
        match cmd {
            AppCommand::ToggleRecording => self.controller.toggle().await?,
            AppCommand::Play { index } => {
                self.controller
                    .dispatch(ScreenIntent::Play(index))
                    .await?
            }
            AppCommand::Share { index } => {
                self.controller
                    .dispatch(ScreenIntent::Share(index))
                    .await?
            }
            AppCommand::Shutdown => {}
        }

        Ok(())
    }
}
