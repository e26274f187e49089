//! Single-flight timed process used by the demo screen.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

/// Fixed duration of the simulated work.
pub const PROCESS_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessState {
    #[default]
    Idle,
    Processing,
    Completed,
}

impl ProcessState {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "En espera",
            Self::Processing => "Procesando...",
            Self::Completed => "Completado",
        }
    }
}

/// Result of pressing the process button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Idle to processing; the timer is running.
    Started,
    /// Already processing; nothing happened.
    Ignored,
    /// Completed back to idle.
    Reset,
}

/// `idle -> processing -> completed`, with a press from completed going
/// back to idle. A started run cannot be cancelled.
pub struct ProcessSimulator {
    state: Arc<watch::Sender<ProcessState>>,
    delay: Duration,
}

impl ProcessSimulator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(PROCESS_DELAY)
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        let (state, _) = watch::channel(ProcessState::Idle);
        Self {
            state: Arc::new(state),
            delay,
        }
    }

    #[must_use]
    pub fn state(&self) -> ProcessState {
        *self.state.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ProcessState> {
        self.state.subscribe()
    }

    /// Handles a button press. Must run inside a tokio runtime.
    pub fn press(&self) -> PressOutcome {
        let mut outcome = PressOutcome::Ignored;
        self.state.send_if_modified(|state| match *state {
            ProcessState::Idle => {
                *state = ProcessState::Processing;
                outcome = PressOutcome::Started;
                true
            }
            ProcessState::Processing => false,
            ProcessState::Completed => {
                *state = ProcessState::Idle;
                outcome = PressOutcome::Reset;
                true
            }
        });

        match outcome {
            PressOutcome::Started => self.spawn_timer(),
            PressOutcome::Ignored => debug!("Press ignored while processing"),
            PressOutcome::Reset => debug!("Process reset"),
        }
        outcome
    }

    fn spawn_timer(&self) {
        let state = Arc::clone(&self.state);
        let delay = self.delay;
        info!(delay_ms = delay.as_millis(), "Process started");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.send_if_modified(|state| {
                if *state == ProcessState::Processing {
                    *state = ProcessState::Completed;
                    true
                } else {
                    false
                }
            });
            info!("Process completed");
        });
    }
}

impl Default for ProcessSimulator {
    fn default() -> Self {
        Self::new()
    }
}
