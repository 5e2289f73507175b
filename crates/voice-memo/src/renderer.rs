//! Terminal renderer for the recordings screen.

use std::io::{self, Write};

use tokio::sync::watch;
use tracing::{debug, info, instrument};
use voice_memo_core::{ScreenView, UiState};

/// Redraws the screen on stdout whenever a new [`UiState`] is published.
pub struct Renderer {
    state_rx: watch::Receiver<UiState>,
}

impl Renderer {
    /// Render snapshots from `state_rx`.
    pub fn new(state_rx: watch::Receiver<UiState>) -> Self {
        Self { state_rx }
    }

    /// Draw the current snapshot.
    pub fn render(&mut self) -> io::Result<()> {
        let view = ScreenView::from(&*self.state_rx.borrow_and_update());

        let mut out = io::stdout().lock();
        writeln!(out)?;
        write!(out, "{}", view)?;
        out.flush()
    }

    /// Draw once, then redraw on every change until shutdown or until the
    /// controller is dropped.
    #[instrument(skip(self))]
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) -> io::Result<()> {
        self.render()?;

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Renderer shutting down");
                    break;
                }
                changed = self.state_rx.changed() => {
                    if changed.is_err() {
                        debug!("State publisher dropped");
                        break;
                    }
                    self.render()?;
                }
            }
        }

        Ok(())
    }
}
