use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::debug;

use crate::error::HandlerResult;
use crate::event::EventContext;
use crate::types::{self, EventType};

/// Untyped event handler. Sees the raw envelope.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn handle(&self, ctx: &mut EventContext<types::EventEnvelope>) -> HandlerResult;
}

/// An event payload type, tied to the [`EventType`] it is delivered under.
pub trait Payload: Clone + Send + Sync + 'static {
    const KIND: EventType;

    fn extract(payload: &types::EventPayload) -> Option<&Self>;
}

macro_rules! payload_kinds {
    ($($variant:ident => $ty:ident),* $(,)?) => {
        $(
            impl Payload for types::$ty {
                const KIND: EventType = EventType::$variant;

                fn extract(payload: &types::EventPayload) -> Option<&Self> {
                    match payload {
                        types::EventPayload::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*

        /// The kind a payload variant is delivered under.
        pub fn payload_kind(payload: &types::EventPayload) -> EventType {
            match payload {
                $(types::EventPayload::$variant(_) => EventType::$variant,)*
            }
        }
    };
}

payload_kinds! {
    PlayerJoin => PlayerJoinEvent,
    PlayerQuit => PlayerQuitEvent,
    PlayerMove => PlayerMoveEvent,
    Chat => ChatEvent,
    Command => CommandEvent,
    BlockBreak => BlockBreakEvent,
    BlockPlace => BlockPlaceEvent,
    WorldClose => WorldCloseEvent,
}

/// Resolves the kind of an envelope: the declared type, or the payload
/// variant when the type is missing or unknown.
pub fn envelope_kind(envelope: &types::EventEnvelope) -> EventType {
    EventType::try_from(envelope.r#type)
        .ok()
        .filter(|kind| *kind != EventType::Unspecified)
        .or_else(|| envelope.payload.as_ref().map(payload_kind))
        .unwrap_or(EventType::Unspecified)
}

type TypedFn<T> =
    dyn for<'a> Fn(&'a mut EventContext<T>) -> BoxFuture<'a, HandlerResult> + Send + Sync;

struct Typed<T> {
    f: Box<TypedFn<T>>,
}

#[async_trait]
impl<T: Payload> Handler for Typed<T> {
    async fn handle(&self, ctx: &mut EventContext<types::EventEnvelope>) -> HandlerResult {
        let Some(data) = ctx.data.payload.as_ref().and_then(T::extract).cloned() else {
            debug!(
                event_id = %ctx.event_id(),
                kind = T::KIND.as_str_name(),
                "payload does not match handler type; skipping"
            );
            return Ok(());
        };
        let mut typed = ctx.narrow(data);
        (self.f)(&mut typed).await
    }
}

/// Something that registers its own handlers, usually generated by
/// `#[listener]`.
pub trait Listener: Send + Sync + 'static {
    fn bind(self: Arc<Self>, registry: &mut HandlerRegistry);
}

/// Event kind to handlers, in registration order.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventType, Vec<Arc<dyn Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EventType, handler: Arc<dyn Handler>) -> &mut Self {
        self.handlers.entry(kind).or_default().push(handler);
        self
    }

    /// Registers a typed handler. The kind comes from `T`.
    ///
    /// ```ignore
    /// registry.on::<types::ChatEvent, _>(|ctx| Box::pin(async move {
    ///     ctx.set_message(ctx.data.message.to_uppercase());
    ///     Ok(())
    /// }));
    /// ```
    pub fn on<T, F>(&mut self, f: F) -> &mut Self
    where
        T: Payload,
        F: for<'a> Fn(&'a mut EventContext<T>) -> BoxFuture<'a, HandlerResult>
            + Send
            + Sync
            + 'static,
    {
        self.register(T::KIND, Arc::new(Typed { f: Box::new(f) }))
    }

    pub fn listen<L: Listener>(&mut self, listener: Arc<L>) -> &mut Self {
        listener.bind(self);
        self
    }

    pub fn handlers(&self, kind: EventType) -> &[Arc<dyn Handler>] {
        self.handlers.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every kind with at least one handler.
    pub fn kinds(&self) -> BTreeSet<EventType> {
        self.handlers
            .iter()
            .filter(|(_, handlers)| !handlers.is_empty())
            .map(|(kind, _)| *kind)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }
}
