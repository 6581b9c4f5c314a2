//! Core event types and dispatch for the plugin runtime.
//!
//! Most plugin authors will work with:
//! - [`EventContext`], which wraps each incoming event and lets you cancel
//!   or mutate it before the host processes it.
//! - [`HandlerRegistry`], where handlers are bound per event kind, either
//!   one by one or through a `#[listener]` impl block.
//!
//! The concrete event structs (`ChatEvent`, `PlayerJoinEvent`, …) live in
//! [`crate::types`], generated from the protobuf definitions.

pub mod context;
pub mod handler;
pub mod mutations;

pub use context::*;
pub use handler::*;

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{debug, error, warn};

use crate::server::Server;
use crate::types;

/// Runs every handler bound to the envelope's kind, in order, then makes
/// sure the event got exactly one result.
///
/// Handler errors and panics are logged and do not stop the chain.
pub async fn dispatch_event(
    registry: &HandlerRegistry,
    server: &Server,
    envelope: types::EventEnvelope,
) {
    let kind = envelope_kind(&envelope);
    let event_id = envelope.event_id.clone();
    let ack = Acknowledgement::new(event_id.clone(), server.outbound().clone());
    let mut ctx = EventContext::new(envelope, server.clone(), ack.clone());

    let handlers = registry.handlers(kind);
    if handlers.is_empty() {
        debug!(%event_id, kind = kind.as_str_name(), "no handlers bound");
    }

    for (index, handler) in handlers.iter().enumerate() {
        match AssertUnwindSafe(handler.handle(&mut ctx)).catch_unwind().await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                warn!(
                    %event_id,
                    kind = kind.as_str_name(),
                    handler = index,
                    error = %err,
                    "handler failed"
                );
            }
            Err(panic) => {
                error!(
                    %event_id,
                    kind = kind.as_str_name(),
                    handler = index,
                    panic = panic_message(panic.as_ref()),
                    "handler panicked"
                );
            }
        }
    }

    if let Err(err) = ack.settle() {
        warn!(%event_id, error = %err, "could not send event result");
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(msg) = panic.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}
