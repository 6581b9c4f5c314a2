//! Hello exchange with the host.

use tracing::{info, warn};

use crate::types;
use crate::PluginIdentity;

/// What the host told us about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub api_version: String,
    /// False when the host speaks a different API version than the plugin.
    pub compatible: bool,
}

#[derive(Debug)]
pub struct Handshake {
    identity: PluginIdentity,
    host: Option<HostIdentity>,
}

impl Handshake {
    pub fn new(identity: PluginIdentity) -> Self {
        Self {
            identity,
            host: None,
        }
    }

    pub fn identity(&self) -> &PluginIdentity {
        &self.identity
    }

    /// The first frame of every session.
    pub fn hello(&self) -> types::PluginPayload {
        types::PluginPayload::Hello(types::PluginHello {
            name: self.identity.name.clone(),
            version: self.identity.version.clone(),
            api_version: self.identity.api_version.clone(),
            commands: self.identity.commands.clone(),
        })
    }

    /// Records the host hello. A version mismatch is logged, never fatal.
    pub fn accept(&mut self, hello: &types::HostHello) -> &HostIdentity {
        let compatible = hello.api_version == self.identity.api_version;
        if compatible {
            info!(
                plugin = %self.identity.id,
                api_version = %hello.api_version,
                "host hello received"
            );
        } else {
            warn!(
                plugin = %self.identity.id,
                host_api = %hello.api_version,
                plugin_api = %self.identity.api_version,
                "host API version differs from plugin; continuing"
            );
        }
        self.host.insert(HostIdentity {
            api_version: hello.api_version.clone(),
            compatible,
        })
    }

    pub fn host(&self) -> Option<&HostIdentity> {
        self.host.as_ref()
    }

    pub(crate) fn into_host(self) -> Option<HostIdentity> {
        self.host
    }
}
