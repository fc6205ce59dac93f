//! Scoped scroll/resize listener registration.
//!
//! # Responsibility
//! - Own the registration returned by a `ListenerHost` for one page lifetime.
//! - Detach exactly once, on explicit dispose or on drop.
//!
//! # Invariants
//! - A live `ScrollSubscription` always holds exactly one registration.
//! - Dropping the subscription (including during unwinding) detaches it.

use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Attaches and detaches the page's viewport listeners.
pub trait ListenerHost {
    /// Opaque handle needed to undo one `attach`.
    type Registration;

    /// Installs scroll and resize listeners.
    fn attach(&mut self) -> Result<Self::Registration, ListenerError>;

    /// Removes everything installed by the matching `attach`.
    fn detach(&mut self, registration: Self::Registration);
}

/// Listener registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// No event target (e.g. no `window`) is available.
    HostUnavailable,
    AttachFailed { event: String, message: String },
}

impl Display for ListenerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HostUnavailable => write!(f, "listener host is unavailable"),
            Self::AttachFailed { event, message } => {
                write!(f, "failed to attach `{event}` listener: {message}")
            }
        }
    }
}

impl Error for ListenerError {}

/// Live listener registration bound to its host.
pub struct ScrollSubscription<H: ListenerHost> {
    host: H,
    registration: Option<H::Registration>,
}

impl<H: ListenerHost> ScrollSubscription<H> {
    /// Attaches listeners through `host`.
    ///
    /// # Errors
    /// - Propagates host attach failures; nothing is left attached.
    pub fn attach(mut host: H) -> Result<Self, ListenerError> {
        let registration = host.attach().map_err(|err| {
            warn!("event=listener_attach module=page status=error error={err}");
            err
        })?;
        debug!("event=listener_attach module=page status=ok");
        Ok(Self {
            host,
            registration: Some(registration),
        })
    }

    pub fn is_active(&self) -> bool {
        self.registration.is_some()
    }

    /// Detaches now instead of at drop.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.host.detach(registration);
            debug!("event=listener_detach module=page status=ok");
        }
    }
}

impl<H: ListenerHost> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}
