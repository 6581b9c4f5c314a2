//! Session driver: builds the handler table, performs the handshake and runs
//! the single read loop until the host or the user ends the session.

use std::collections::BTreeSet;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use futures::future::{self, BoxFuture};
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, error, info, warn};

use crate::command::{command_name, normalize_command};
use crate::error::{HandlerResult, RuntimeError};
use crate::event::{dispatch_event, EventContext, Handler, HandlerRegistry, Listener, Payload};
use crate::handshake::{Handshake, HostIdentity};
use crate::server::Server;
use crate::subscription::{resolve_subscription, subscribe_payload};
use crate::transport::{self, Address, Outbound, OutboundStream};
use crate::types::{self, EventType};
use crate::{Plugin, PluginIdentity};

/// How long `connect` waits for queued frames to reach the transport after
/// the session ends.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

/// Why a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The host ended its side of the stream.
    HostClosed,
    /// The host sent a shutdown message.
    Shutdown { reason: String },
    /// The local shutdown signal fired.
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub host: Option<HostIdentity>,
    pub events_dispatched: u64,
    pub exit: ExitReason,
}

/// Everything a plugin sets up before it connects.
///
/// Registration happens here, during initialisation. Once [`start`] runs,
/// the identity, handler table and subscription are fixed.
///
/// [`start`]: PluginRuntime::start
pub struct PluginRuntime {
    identity: PluginIdentity,
    registry: HandlerRegistry,
    explicit: BTreeSet<EventType>,
    plugin: Option<Arc<dyn Plugin>>,
}

impl PluginRuntime {
    pub fn new(identity: PluginIdentity) -> Self {
        Self {
            identity,
            registry: HandlerRegistry::new(),
            explicit: BTreeSet::new(),
            plugin: None,
        }
    }

    /// Takes identity and lifecycle hooks from `plugin`, and binds its
    /// listener methods.
    pub fn from_plugin<P>(plugin: P) -> Self
    where
        P: Plugin + Listener,
    {
        let plugin = Arc::new(plugin);
        let mut runtime = Self::new(plugin.identity());
        runtime.registry.listen(Arc::clone(&plugin));
        runtime.plugin = Some(plugin);
        runtime
    }

    /// Attaches lifecycle hooks without binding any handlers.
    pub fn with_plugin(&mut self, plugin: Arc<dyn Plugin>) -> &mut Self {
        self.plugin = Some(plugin);
        self
    }

    pub fn identity(&self) -> &PluginIdentity {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut PluginIdentity {
        &mut self.identity
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Pins the subscription. Without this, every kind with a handler is
    /// subscribed.
    pub fn subscribe(&mut self, kinds: impl IntoIterator<Item = EventType>) -> &mut Self {
        self.explicit.extend(kinds);
        self
    }

    pub fn on<T, F>(&mut self, f: F) -> &mut Self
    where
        T: Payload,
        F: for<'a> Fn(&'a mut EventContext<T>) -> BoxFuture<'a, HandlerResult>
            + Send
            + Sync
            + 'static,
    {
        self.registry.on::<T, F>(f);
        self
    }

    pub fn register(&mut self, kind: EventType, handler: Arc<dyn Handler>) -> &mut Self {
        self.registry.register(kind, handler);
        self
    }

    pub fn listen<L: Listener>(&mut self, listener: Arc<L>) -> &mut Self {
        self.registry.listen(listener);
        self
    }

    /// Announces a command in the hello and binds `f` to it.
    ///
    /// Matching is on the name or any alias, case-insensitive, with a leading
    /// `/` ignored. A matching event is cancelled before `f` runs so the host
    /// does not also report it as unknown.
    pub fn command<F>(&mut self, spec: types::CommandSpec, f: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut EventContext<types::CommandEvent>) -> BoxFuture<'a, HandlerResult>
            + Send
            + Sync
            + 'static,
    {
        let names: Vec<String> = std::iter::once(&spec.name)
            .chain(spec.aliases.iter())
            .map(|name| normalize_command(name))
            .collect();
        self.identity.commands.push(spec);

        self.on::<types::CommandEvent, _>(move |ctx| {
            let invoked = command_name(&ctx.data);
            if !names.iter().any(|name| *name == invoked) {
                return Box::pin(future::ready(Ok(())));
            }
            if !ctx.is_resolved() {
                if let Err(err) = ctx.cancel() {
                    return Box::pin(future::ready(Err(err.into())));
                }
            }
            f(ctx)
        })
    }

    /// The kinds that will be sent in the subscribe frame.
    pub fn subscription(&self) -> BTreeSet<EventType> {
        resolve_subscription(&self.explicit, &self.registry.kinds())
    }

    /// Connects to `address`, runs the session and returns once it ends and
    /// the outbound stream has handed its last frame to the transport.
    /// Ctrl-C closes the stream cleanly.
    pub async fn connect(self, address: &str) -> Result<SessionReport, RuntimeError> {
        let address: Address = address.parse()?;
        info!(plugin = %self.identity.id, %address, "connecting to host");
        let channel = transport::connect(&address).await?;

        let (session, mut outbound) = self.start()?;
        let flushed = outbound.finished();
        let inbound = match transport::open(channel, outbound).await {
            Ok(inbound) => inbound,
            Err(err) => {
                session.teardown();
                return Err(err);
            }
        };

        let report = session.drive(inbound, interrupt()).await;
        if tokio::time::timeout(FLUSH_TIMEOUT, flushed).await.is_err() {
            warn!(timeout = ?FLUSH_TIMEOUT, "outbound stream not drained before disconnect");
        }
        report
    }

    /// Queues the hello and subscribe frames, runs `on_enable`, and hands
    /// back the session plus the outbound stream to attach to a transport.
    pub fn start(self) -> Result<(Session, OutboundStream), RuntimeError> {
        let subscription = self.subscription();
        let (outbound, stream) = Outbound::channel(self.identity.id.as_str());
        let server = Server::new(outbound);
        let handshake = Handshake::new(self.identity);

        server.outbound().send(handshake.hello())?;
        server.outbound().send(subscribe_payload(&subscription))?;
        info!(
            plugin = %server.plugin_id(),
            events = ?subscription.iter().map(|k| k.as_str_name()).collect::<Vec<_>>(),
            "subscribed"
        );

        if let Some(plugin) = &self.plugin {
            plugin.on_enable(&server);
        }

        let session = Session {
            handshake,
            registry: self.registry,
            server,
            plugin: self.plugin,
            events_dispatched: 0,
        };
        Ok((session, stream))
    }
}

async fn interrupt() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "could not listen for ctrl-c");
        future::pending::<()>().await;
    }
    info!("interrupt received; closing stream");
}

/// A started session, ready to read from the host.
pub struct Session {
    handshake: Handshake,
    registry: HandlerRegistry,
    server: Server,
    plugin: Option<Arc<dyn Plugin>>,
    events_dispatched: u64,
}

impl Session {
    pub fn server(&self) -> &Server {
        &self.server
    }

    /// Reads and dispatches host messages one at a time until the stream
    /// ends, the host shuts the plugin down, or `shutdown` completes.
    ///
    /// `shutdown` is only checked between messages; a handler chain that is
    /// running always finishes and gets its result sent first. Long-running
    /// handlers therefore delay everything behind them.
    pub async fn drive<S, F>(
        mut self,
        inbound: S,
        shutdown: F,
    ) -> Result<SessionReport, RuntimeError>
    where
        S: Stream<Item = Result<types::HostToPlugin, tonic::Status>>,
        F: Future<Output = ()>,
    {
        tokio::pin!(inbound);
        tokio::pin!(shutdown);

        let outcome = loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break Ok(ExitReason::Interrupted),
                next = inbound.next() => match next {
                    None => break Ok(ExitReason::HostClosed),
                    Some(Err(status)) => break Err(RuntimeError::Stream(status)),
                    Some(Ok(msg)) => {
                        if let Some(exit) = self.handle(msg).await {
                            break Ok(exit);
                        }
                    }
                },
            }
        };

        self.teardown();
        match &outcome {
            Ok(exit) => info!(plugin = %self.server.plugin_id(), ?exit, "session ended"),
            Err(err) => error!(plugin = %self.server.plugin_id(), error = %err, "session failed"),
        }

        let exit = outcome?;
        Ok(SessionReport {
            host: self.handshake.into_host(),
            events_dispatched: self.events_dispatched,
            exit,
        })
    }

    async fn handle(&mut self, msg: types::HostToPlugin) -> Option<ExitReason> {
        match msg.payload {
            Some(types::HostPayload::Hello(hello)) => {
                self.handshake.accept(&hello);
                None
            }
            Some(types::HostPayload::Event(envelope)) => {
                if self.handshake.host().is_none() {
                    debug!(event_id = %envelope.event_id, "event arrived before host hello");
                }
                dispatch_event(&self.registry, &self.server, envelope).await;
                self.events_dispatched += 1;
                None
            }
            Some(types::HostPayload::Shutdown(shutdown)) => {
                info!(reason = %shutdown.reason, "host requested shutdown");
                Some(ExitReason::Shutdown {
                    reason: shutdown.reason,
                })
            }
            None => {
                debug!("host message without payload; ignoring");
                None
            }
        }
    }

    /// Runs `on_disable`, then closes the outbound side after every frame
    /// already queued.
    fn teardown(&self) {
        if let Some(plugin) = &self.plugin {
            let server = &self.server;
            if catch_unwind(AssertUnwindSafe(|| plugin.on_disable(server))).is_err() {
                error!(plugin = %server.plugin_id(), "on_disable panicked");
            }
        }
        self.server.outbound().close();
    }
}
