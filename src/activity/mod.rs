//! User idle detection.
//!
//! Activity signals stamp a last-seen instant; a background poll flips the
//! session to idle once the configured window passes without one. Both
//! transitions are edge-triggered, so the optional callbacks fire once per
//! state change and never per event or per tick.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

pub const POLL_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(4000);

pub type ActivityCallback = Box<dyn Fn() + Send + Sync + 'static>;

/// Construction options for [`ActivityMonitor`].
pub struct ActivityOptions {
    pub timeout: Duration,
    on_idle: Option<ActivityCallback>,
    on_active: Option<ActivityCallback>,
}

impl Default for ActivityOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_IDLE_TIMEOUT,
            on_idle: None,
            on_active: None,
        }
    }
}

impl ActivityOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    pub fn with_on_idle(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_idle = Some(Box::new(callback));
        self
    }

    pub fn with_on_active(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_active = Some(Box::new(callback));
        self
    }
}

#[derive(Debug, Clone)]
pub struct ActivityState {
    pub idle: bool,
    pub last_activity: Instant,
}

struct Shared {
    state: Mutex<ActivityState>,
    on_idle: Option<ActivityCallback>,
    on_active: Option<ActivityCallback>,
}

/// Idle/active state machine with a free-running poll task.
///
/// The poll task holds a clone of the shared state, so the monitor must be
/// shut down (or dropped) when the owning session view is torn down.
pub struct ActivityMonitor {
    shared: Arc<Shared>,
    poll: JoinHandle<()>,
}

impl ActivityMonitor {
    pub fn spawn(options: ActivityOptions) -> Self {
        let shared = Arc::new(Shared {
            state: Mutex::new(ActivityState {
                idle: false,
                last_activity: Instant::now(),
            }),
            on_idle: options.on_idle,
            on_active: options.on_active,
        });

        let timeout = options.timeout;
        let poll_shared = Arc::clone(&shared);
        let poll = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            loop {
                ticker.tick().await;
                let mut state = poll_shared.state.lock().await;
                if !state.idle && state.last_activity.elapsed() >= timeout {
                    state.idle = true;
                    drop(state);
                    debug!("No input for {:?}, session idle", timeout);
                    if let Some(callback) = &poll_shared.on_idle {
                        callback();
                    }
                }
            }
        });

        Self { shared, poll }
    }

    /// Record a user input signal. Wakes the session from idle, firing
    /// `on_active` once per transition.
    pub async fn record_activity(&self) {
        let mut state = self.shared.state.lock().await;
        state.last_activity = Instant::now();
        if state.idle {
            state.idle = false;
            drop(state);
            debug!("Input received, session active");
            if let Some(callback) = &self.shared.on_active {
                callback();
            }
        }
    }

    /// Force the active state without treating it as user input. Does not
    /// fire `on_active`.
    pub async fn reset_idle(&self) {
        let mut state = self.shared.state.lock().await;
        state.last_activity = Instant::now();
        state.idle = false;
    }

    pub async fn is_idle(&self) -> bool {
        self.shared.state.lock().await.idle
    }

    pub async fn state(&self) -> ActivityState {
        self.shared.state.lock().await.clone()
    }

    /// Stop the poll task. Required at session teardown so no tick fires
    /// against stale state.
    pub fn shutdown(&self) {
        self.poll.abort();
    }
}

impl Drop for ActivityMonitor {
    fn drop(&mut self) {
        self.poll.abort();
    }
}
