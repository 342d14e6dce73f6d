//! In-process registry of flush listeners.

use std::fmt;

use onair_domain::error::OnAirError;

use crate::ports::{FlushListener, LifecycleEvent, UnitOfWork};

/// Ordered set of [`FlushListener`]s the persistence layer notifies.
///
/// Listeners run in registration order. The first error stops dispatch and
/// is returned, so the caller can abort the commit.
#[derive(Default)]
pub struct FlushHooks {
    listeners: Vec<Box<dyn FlushListener>>,
}

impl FlushHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener.
    pub fn register(&mut self, listener: impl FlushListener + 'static) {
        tracing::debug!(listener = listener.name(), "registering flush listener");
        self.listeners.push(Box::new(listener));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Names of the registered listeners, in order.
    pub fn listener_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.listeners.iter().map(|listener| listener.name())
    }

    /// Notify every listener subscribed to `event`.
    ///
    /// Returns how many listeners ran.
    ///
    /// # Errors
    ///
    /// Returns the first listener error; later listeners do not run.
    #[tracing::instrument(skip(self, uow), fields(listeners = self.listeners.len()))]
    pub fn dispatch(
        &self,
        event: LifecycleEvent,
        uow: &mut dyn UnitOfWork,
    ) -> Result<usize, OnAirError> {
        let mut invoked = 0;
        for listener in self
            .listeners
            .iter()
            .filter(|listener| listener.is_subscribed(event))
        {
            tracing::trace!(listener = listener.name(), "invoking flush listener");
            listener.handle(event, uow)?;
            invoked += 1;
        }
        Ok(invoked)
    }
}

impl fmt::Debug for FlushHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.listener_names()).finish()
    }
}
