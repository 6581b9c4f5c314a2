//! Plugin-side runtime for the Dragonfly plugin host.
//!
//! A plugin process connects to the host over one bidirectional gRPC stream,
//! introduces itself, subscribes to event kinds, and answers every event it
//! receives with exactly one result. This crate owns that stream.
//!
//! ```ignore
//! use df_plugin_runtime::{listener, EventContext, Plugin, PluginRunner, types};
//!
//! #[derive(Plugin)]
//! #[plugin(id = "shout", name = "Shout", version = "1.0.0", api = "v1")]
//! struct Shout;
//!
//! #[listener]
//! impl Shout {
//!     fn on_chat(&self, event: &types::ChatEvent, ctx: &mut EventContext<types::ChatEvent>) {
//!         if let Some(rest) = event.message.strip_prefix("!shout ") {
//!             ctx.set_message(rest.to_uppercase());
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     PluginRunner::run_from_env(Shout).await?;
//!     Ok(())
//! }
//! ```

#[allow(clippy::all)]
#[path = "generated/df.plugin.rs"]
mod df_plugin;

pub mod types {
    pub use super::df_plugin::plugin_client::PluginClient;
    pub use super::df_plugin::*;
    pub use super::df_plugin::{
        action::Kind as ActionKind, event_envelope::Payload as EventPayload,
        event_result::Update as EventResultUpdate, host_to_plugin::Payload as HostPayload,
        plugin_to_host::Payload as PluginPayload,
    };
}

pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod handshake;
pub mod runtime;
#[path = "server/server.rs"]
pub mod server;
pub mod subscription;
pub mod transport;

// main usage stuff for plugin devs:
pub use async_trait::async_trait;
pub use config::RuntimeConfig;
pub use df_plugin_runtime_macro::{listener, Plugin};
pub use error::{HandlerError, HandlerResult, IntoHandlerResult, RuntimeError};
pub use event::{EventContext, Handler, HandlerRegistry, Listener, Payload};
pub use handshake::HostIdentity;
pub use runtime::{ExitReason, PluginRuntime, Session, SessionReport};
pub use server::{ActionBatchBuilder, Server};

/// Protocol version this crate speaks.
pub const API_VERSION: &str = "v1";

/// Who the plugin says it is in its hello.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginIdentity {
    pub id: String,
    pub name: String,
    pub version: String,
    pub api_version: String,
    pub commands: Vec<types::CommandSpec>,
}

impl PluginIdentity {
    pub fn new(id: &str, name: &str, version: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            version: version.to_owned(),
            api_version: API_VERSION.to_owned(),
            commands: Vec::new(),
        }
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_owned();
        self
    }

    pub fn with_command(mut self, command: types::CommandSpec) -> Self {
        self.commands.push(command);
        self
    }
}

/// A plugin's identity and lifecycle hooks.
///
/// Usually derived with `#[derive(Plugin)]`; handlers are bound separately
/// through [`Listener`].
pub trait Plugin: Send + Sync + 'static {
    fn identity(&self) -> PluginIdentity;

    /// Called once the hello and subscribe frames are queued.
    fn on_enable(&self, _server: &Server) {}

    /// Called when the session ends, before the stream is closed.
    fn on_disable(&self, _server: &Server) {}
}

/// One-call bootstrap for a plugin.
pub struct PluginRunner;

impl PluginRunner {
    /// Connects `plugin` to the host at `address` and runs until the session
    /// ends.
    pub async fn run<P>(plugin: P, address: &str) -> Result<SessionReport, RuntimeError>
    where
        P: Plugin + Listener,
    {
        PluginRuntime::from_plugin(plugin).connect(address).await
    }

    /// Like [`PluginRunner::run`], with the address and id override read from
    /// `DF_PLUGIN_SERVER_ADDRESS` and `DF_PLUGIN_ID`.
    pub async fn run_from_env<P>(plugin: P) -> Result<SessionReport, RuntimeError>
    where
        P: Plugin + Listener,
    {
        let config = RuntimeConfig::from_env();
        let mut runtime = PluginRuntime::from_plugin(plugin);
        config.apply(runtime.identity_mut());
        runtime.connect(&config.server_address).await
    }
}
