use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::error::RuntimeError;
use crate::event::mutations::merge_update;
use crate::server::Server;
use crate::transport::Outbound;
use crate::types;

/// Single-use result token for one event.
///
/// Clones share state, so the typed contexts handed to different handlers of
/// the same event all see the same resolution. The first transition wins and
/// sends the event's only `EventResult`.
#[derive(Clone)]
pub struct Acknowledgement {
    inner: Arc<AckInner>,
}

struct AckInner {
    event_id: String,
    outbound: Outbound,
    resolved: AtomicBool,
    staged: Mutex<Option<types::EventResultUpdate>>,
}

impl Acknowledgement {
    pub(crate) fn new(event_id: impl Into<String>, outbound: Outbound) -> Self {
        Self {
            inner: Arc::new(AckInner {
                event_id: event_id.into(),
                outbound,
                resolved: AtomicBool::new(false),
                staged: Mutex::new(None),
            }),
        }
    }

    pub fn event_id(&self) -> &str {
        &self.inner.event_id
    }

    pub fn is_resolved(&self) -> bool {
        self.inner.resolved.load(Ordering::Acquire)
    }

    fn staged(&self) -> MutexGuard<'_, Option<types::EventResultUpdate>> {
        // A panicking handler can poison the lock; the staged value is still usable.
        self.inner
            .staged
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn claim(&self) -> bool {
        self.inner
            .resolved
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn resolve(
        &self,
        cancel: Option<bool>,
        update: Option<types::EventResultUpdate>,
    ) -> Result<(), RuntimeError> {
        if !self.claim() {
            warn!(
                event_id = %self.inner.event_id,
                "event already resolved; ignoring second response"
            );
            return Err(RuntimeError::AlreadyResolved {
                event_id: self.inner.event_id.clone(),
            });
        }
        self.emit(cancel, update)
    }

    fn emit(
        &self,
        cancel: Option<bool>,
        update: Option<types::EventResultUpdate>,
    ) -> Result<(), RuntimeError> {
        let result = types::EventResult {
            event_id: self.inner.event_id.clone(),
            cancel,
            update,
        };
        self.inner
            .outbound
            .send(types::PluginPayload::EventResult(result))
    }

    fn stage(&self, update: types::EventResultUpdate) {
        if self.is_resolved() {
            warn!(
                event_id = %self.inner.event_id,
                "mutation staged after the event was resolved; it will not be sent"
            );
            return;
        }
        let mut staged = self.staged();
        let merged = merge_update(staged.take(), update);
        *staged = Some(merged);
    }

    /// Resolves an event nobody answered: the staged mutation if present,
    /// a passthrough ack otherwise. No-op once resolved.
    pub fn settle(&self) -> Result<(), RuntimeError> {
        if !self.claim() {
            return Ok(());
        }
        let staged = self.staged().take();
        if staged.is_some() {
            debug!(event_id = %self.inner.event_id, "sending staged mutation");
        }
        self.emit(None, staged)
    }
}

/// A smart wrapper for a server event.
///
/// Gives handlers the event payload, a [`Server`] handle for actions, and
/// the operations that produce the event's single result.
pub struct EventContext<T> {
    pub data: T,
    server: Server,
    ack: Acknowledgement,
}

impl<T> EventContext<T> {
    pub(crate) fn new(data: T, server: Server, ack: Acknowledgement) -> Self {
        Self { data, server, ack }
    }

    /// A context for the same event carrying a different view of its payload.
    pub(crate) fn narrow<U>(&self, data: U) -> EventContext<U> {
        EventContext {
            data,
            server: self.server.clone(),
            ack: self.ack.clone(),
        }
    }

    pub fn event_id(&self) -> &str {
        self.ack.event_id()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn is_resolved(&self) -> bool {
        self.ack.is_resolved()
    }

    /// Lets the event through unchanged.
    pub fn ack(&mut self) -> Result<(), RuntimeError> {
        self.ack.resolve(None, None)
    }

    /// Cancels the event, stopping default server behavior.
    pub fn cancel(&mut self) -> Result<(), RuntimeError> {
        if self.ack.staged().take().is_some() {
            debug!(event_id = %self.event_id(), "cancel discards staged mutation");
        }
        self.ack.resolve(Some(true), None)
    }

    /// Resolves the event with `update`, merged over anything already staged.
    pub fn mutate(&mut self, update: types::EventResultUpdate) -> Result<(), RuntimeError> {
        if self.ack.is_resolved() {
            return self.ack.resolve(None, None);
        }
        let update = merge_update(self.ack.staged().take(), update);
        self.ack.resolve(None, Some(update))
    }

    /// Sends the staged mutation, or a plain ack when nothing was staged.
    pub fn send(&mut self) -> Result<(), RuntimeError> {
        if self.ack.is_resolved() {
            return self.ack.resolve(None, None);
        }
        let staged = self.ack.staged().take();
        self.ack.resolve(None, staged)
    }

    pub(crate) fn set_mutation(&mut self, update: types::EventResultUpdate) {
        self.ack.stage(update);
    }
}
