//! Lightweight handle for sending actions and logs to the host.
//!
//! Plugin authors reach a [`Server`] through every event context and the
//! lifecycle hooks. It can be cloned freely and used to send actions like
//! `send_chat`, `teleport`, or `world_set_block` back to the Dragonfly host.
//!
//! Sends never wait: frames go onto the runtime's outbound queue and are
//! written in the order they were queued.

use crate::error::RuntimeError;
use crate::transport::Outbound;
use crate::types;

#[derive(Debug, Clone)]
pub struct Server {
    outbound: Outbound,
}

impl Server {
    pub fn new(outbound: Outbound) -> Self {
        Self { outbound }
    }

    pub fn plugin_id(&self) -> &str {
        self.outbound.plugin_id()
    }

    pub(crate) fn outbound(&self) -> &Outbound {
        &self.outbound
    }

    /// Helper to build and send a single action.
    pub fn send_action(&self, kind: types::ActionKind) -> Result<(), RuntimeError> {
        self.send_actions(vec![types::Action {
            correlation_id: None,
            kind: Some(kind),
        }])
    }

    /// Like [`Server::send_action`], tagged so host-side logs can be traced
    /// back to the request.
    pub fn send_action_correlated(
        &self,
        correlation_id: impl Into<String>,
        kind: types::ActionKind,
    ) -> Result<(), RuntimeError> {
        self.send_actions(vec![types::Action {
            correlation_id: Some(correlation_id.into()),
            kind: Some(kind),
        }])
    }

    /// Helper to send a batch of actions as one frame.
    pub fn send_actions(&self, actions: Vec<types::Action>) -> Result<(), RuntimeError> {
        if actions.is_empty() {
            return Ok(());
        }
        self.outbound
            .send(types::PluginPayload::Actions(types::ActionBatch { actions }))
    }

    /// Starts an ordered batch that is sent as a single frame.
    pub fn batch(&self) -> ActionBatchBuilder<'_> {
        ActionBatchBuilder {
            server: self,
            actions: Vec::new(),
        }
    }

    /// Forwards a line to the host's log.
    pub fn log(&self, level: &str, message: impl Into<String>) -> Result<(), RuntimeError> {
        self.outbound.send(types::PluginPayload::Log(types::LogMessage {
            level: level.to_owned(),
            message: message.into(),
        }))
    }
}

#[must_use = "a batch does nothing until `send` is called"]
pub struct ActionBatchBuilder<'a> {
    server: &'a Server,
    actions: Vec<types::Action>,
}

impl<'a> ActionBatchBuilder<'a> {
    pub fn push(mut self, kind: types::ActionKind) -> Self {
        self.actions.push(types::Action {
            correlation_id: None,
            kind: Some(kind),
        });
        self
    }

    pub fn push_correlated(
        mut self,
        correlation_id: impl Into<String>,
        kind: types::ActionKind,
    ) -> Self {
        self.actions.push(types::Action {
            correlation_id: Some(correlation_id.into()),
            kind: Some(kind),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn send(self) -> Result<(), RuntimeError> {
        self.server.send_actions(self.actions)
    }
}

mod helpers;
