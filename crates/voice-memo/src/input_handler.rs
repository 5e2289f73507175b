//! Terminal input handler.
//!
//! Reads one command per line from stdin and forwards it to the main
//! application over an async channel.

use crate::{AppCommand, AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::{mpsc, watch},
};
use tracing::{debug, info, instrument, warn};

/// Help text listing the accepted commands.
pub const HELP: &str = "commands: r (or Enter) = start/stop, p N = play, s N = save, q = quit";

/// Parse one line of user input.
///
/// Row numbers are 1-based as displayed; the returned index is 0-based.
/// Returns `None` for anything unrecognised.
pub fn parse_command(line: &str) -> Option<AppCommand> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or("r");
    let arg = parts.next();

    if parts.next().is_some() {
        return None;
    }

    let row = || {
        arg.and_then(|a| a.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
    };

    match (verb.to_ascii_lowercase().as_str(), arg) {
        ("r" | "rec" | "record", None) => Some(AppCommand::ToggleRecording),
        ("q" | "quit" | "exit", None) => Some(AppCommand::Shutdown),
        ("p" | "play", Some(_)) => row().map(|index| AppCommand::Play { index }),
        ("s" | "save" | "share", Some(_)) => row().map(|index| AppCommand::Share { index }),
        _ => None,
    }
}

/// Stdin reader feeding [`AppCommand`]s to the app.
pub struct InputHandler {
    command_tx: mpsc::Sender<AppCommand>,
}

impl InputHandler {
    /// Create a handler sending on `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Read stdin until shutdown or end of input.
    ///
    /// End of input is treated as a quit command.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Input handler shutting down");
                    break;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(line) => self.handle_line(&line).await?,
                        None => {
                            debug!("Input closed");
                            self.send(AppCommand::Shutdown).await?;
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_line(&self, line: &str) -> AppResult<()> {
        match parse_command(line) {
            Some(command) => self.send(command).await,
            None => {
                warn!(input = line, "Unrecognised command");
                println!("{}", HELP);
                Ok(())
            }
        }
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", command, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
