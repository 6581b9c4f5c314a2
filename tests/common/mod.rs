#![allow(dead_code)]

use df_plugin_runtime::transport::{Outbound, OutboundStream};
use df_plugin_runtime::{types, Server};
use tokio_stream::StreamExt;

pub const PLUGIN_ID: &str = "plugin-id";

/// An in-memory outbound side: a `Server` plus the frames it produced.
pub struct Wire {
    pub outbound: Outbound,
    pub stream: OutboundStream,
    pub server: Server,
}

impl Wire {
    pub fn new() -> Self {
        let (outbound, stream) = Outbound::channel(PLUGIN_ID);
        let server = Server::new(outbound.clone());
        Self {
            outbound,
            stream,
            server,
        }
    }

    /// Closes the outbound side and returns every frame written so far.
    pub async fn frames(self) -> Vec<types::PluginToHost> {
        self.outbound.close();
        self.stream.collect().await
    }
}

pub fn chat(player: &str, message: &str) -> types::ChatEvent {
    types::ChatEvent {
        player_uuid: player.to_string(),
        name: "Player".to_string(),
        message: message.to_string(),
    }
}

pub fn envelope(event_id: &str, payload: types::EventPayload) -> types::EventEnvelope {
    types::EventEnvelope {
        event_id: event_id.to_string(),
        r#type: df_plugin_runtime::event::payload_kind(&payload) as i32,
        expects_response: true,
        payload: Some(payload),
    }
}

pub fn chat_envelope(event_id: &str, message: &str) -> types::EventEnvelope {
    envelope(event_id, types::EventPayload::Chat(chat("player-uuid", message)))
}

pub fn host(payload: types::HostPayload) -> Result<types::HostToPlugin, tonic::Status> {
    Ok(types::HostToPlugin {
        plugin_id: PLUGIN_ID.to_string(),
        payload: Some(payload),
    })
}

pub fn host_hello(api_version: &str) -> Result<types::HostToPlugin, tonic::Status> {
    host(types::HostPayload::Hello(types::HostHello {
        api_version: api_version.to_string(),
    }))
}

pub fn host_event(envelope: types::EventEnvelope) -> Result<types::HostToPlugin, tonic::Status> {
    host(types::HostPayload::Event(envelope))
}

pub fn host_shutdown(reason: &str) -> Result<types::HostToPlugin, tonic::Status> {
    host(types::HostPayload::Shutdown(types::HostShutdown {
        reason: reason.to_string(),
    }))
}

pub fn event_result(msg: &types::PluginToHost) -> &types::EventResult {
    match msg.payload.as_ref().expect("missing payload") {
        types::PluginPayload::EventResult(result) => result,
        other => panic!("expected event result, got {:?}", other),
    }
}

pub fn event_results(frames: &[types::PluginToHost]) -> Vec<&types::EventResult> {
    frames
        .iter()
        .filter_map(|msg| match msg.payload.as_ref() {
            Some(types::PluginPayload::EventResult(result)) => Some(result),
            _ => None,
        })
        .collect()
}

pub fn chat_update(result: &types::EventResult) -> Option<&str> {
    match result.update.as_ref()? {
        types::EventResultUpdate::Chat(mutation) => mutation.message.as_deref(),
        other => panic!("unexpected update variant: {:?}", other),
    }
}
