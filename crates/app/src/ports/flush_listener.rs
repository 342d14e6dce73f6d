//! Flush listener port — hooks the persistence layer invokes while flushing.

use std::sync::Arc;

use onair_domain::error::OnAirError;

use super::UnitOfWork;

/// Points in the flush lifecycle at which listeners run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Before change sets are computed.
    PreFlush,
    /// After change sets are computed, before anything is written.
    OnFlush,
    /// After the commit has been written.
    PostFlush,
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreFlush => f.write_str("pre_flush"),
            Self::OnFlush => f.write_str("on_flush"),
            Self::PostFlush => f.write_str("post_flush"),
        }
    }
}

/// A hook that reacts to flush lifecycle events.
///
/// Listeners run synchronously inside the commit. An error aborts the
/// commit.
pub trait FlushListener: Send + Sync {
    /// Stable name, used in logs.
    fn name(&self) -> &'static str;

    /// Lifecycle events this listener wants to receive.
    fn subscribed_events(&self) -> &'static [LifecycleEvent];

    /// React to `event` for the commit held by `uow`.
    ///
    /// # Errors
    ///
    /// Any error aborts the commit.
    fn handle(&self, event: LifecycleEvent, uow: &mut dyn UnitOfWork) -> Result<(), OnAirError>;

    /// Whether this listener receives `event`.
    fn is_subscribed(&self, event: LifecycleEvent) -> bool {
        self.subscribed_events().contains(&event)
    }
}

impl<T: FlushListener + ?Sized> FlushListener for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn subscribed_events(&self) -> &'static [LifecycleEvent] {
        (**self).subscribed_events()
    }

    fn handle(&self, event: LifecycleEvent, uow: &mut dyn UnitOfWork) -> Result<(), OnAirError> {
        (**self).handle(event, uow)
    }
}
