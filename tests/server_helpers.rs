mod common;

use common::{Wire, PLUGIN_ID};
use df_plugin_runtime::{types, RuntimeError};

fn single_batch(frames: &[types::PluginToHost]) -> &types::ActionBatch {
    assert_eq!(frames.len(), 1, "expected exactly one frame");
    match frames[0].payload.as_ref().expect("missing payload") {
        types::PluginPayload::Actions(batch) => batch,
        other => panic!("unexpected payload: {:?}", other),
    }
}

fn chat_kind(target: &str, message: &str) -> types::ActionKind {
    types::ActionKind::SendChat(types::SendChatAction {
        target_uuid: target.to_string(),
        message: message.to_string(),
    })
}

#[tokio::test]
async fn send_action_wraps_single_action_in_batch() {
    let wire = Wire::new();

    wire.server
        .send_action(chat_kind("player-uuid", "hello"))
        .expect("send_action failed");

    let frames = wire.frames().await;
    assert_eq!(frames[0].plugin_id, PLUGIN_ID);
    let batch = single_batch(&frames);
    assert_eq!(batch.actions.len(), 1);
    let action = &batch.actions[0];
    assert!(action.correlation_id.is_none());
    match action.kind.as_ref().expect("missing action kind") {
        types::ActionKind::SendChat(chat) => {
            assert_eq!(chat.target_uuid, "player-uuid");
            assert_eq!(chat.message, "hello");
        }
        other => panic!("unexpected action kind: {:?}", other),
    }
}

#[tokio::test]
async fn broadcast_uses_empty_target() {
    let wire = Wire::new();

    wire.server.broadcast("hi all").expect("broadcast failed");

    let frames = wire.frames().await;
    match single_batch(&frames).actions[0].kind.as_ref() {
        Some(types::ActionKind::SendChat(chat)) => {
            assert!(chat.target_uuid.is_empty());
            assert_eq!(chat.message, "hi all");
        }
        other => panic!("unexpected action kind: {:?}", other),
    }
}

#[tokio::test]
async fn typed_helpers_build_expected_actions() {
    let wire = Wire::new();
    let server = &wire.server;

    server
        .teleport("p", types::Vec3 { x: 1.0, y: 64.0, z: -2.0 }, None)
        .unwrap();
    server.kick("p", "bye").unwrap();
    server.set_game_mode("p", types::GameMode::Creative).unwrap();
    server
        .give_item(
            "p",
            types::ItemStack {
                name: "minecraft:diamond".into(),
                meta: 0,
                count: 3,
            },
        )
        .unwrap();
    server
        .world_set_block(None, types::BlockPos { x: 1, y: 2, z: 3 }, None)
        .unwrap();
    server.send_popup("p", "careful").unwrap();

    let kinds: Vec<_> = wire
        .frames()
        .await
        .into_iter()
        .map(|msg| match msg.payload {
            Some(types::PluginPayload::Actions(mut batch)) => {
                batch.actions.remove(0).kind.expect("missing kind")
            }
            other => panic!("unexpected payload: {:?}", other),
        })
        .collect();

    assert_eq!(kinds.len(), 6);
    assert!(matches!(
        &kinds[0],
        types::ActionKind::Teleport(t) if t.position.map(|p| p.z) == Some(-2.0)
    ));
    assert!(matches!(&kinds[1], types::ActionKind::Kick(k) if k.reason == "bye"));
    assert!(matches!(
        &kinds[2],
        types::ActionKind::SetGameMode(g) if g.game_mode == types::GameMode::Creative as i32
    ));
    assert!(matches!(
        &kinds[3],
        types::ActionKind::GiveItem(g) if g.item.as_ref().map(|i| i.count) == Some(3)
    ));
    assert!(matches!(
        &kinds[4],
        types::ActionKind::WorldSetBlock(w)
            if w.position == Some(types::BlockPos { x: 1, y: 2, z: 3 })
    ));
    assert!(matches!(&kinds[5], types::ActionKind::SendPopup(p) if p.message == "careful"));
}

#[tokio::test]
async fn batch_preserves_order_in_one_frame() {
    let wire = Wire::new();

    let batch = wire
        .server
        .batch()
        .push(chat_kind("p", "a1"))
        .push_correlated("req-2", chat_kind("p", "a2"))
        .push(chat_kind("p", "a3"));
    assert_eq!(batch.len(), 3);
    batch.send().expect("batch send failed");

    let frames = wire.frames().await;
    let batch = single_batch(&frames);
    let messages: Vec<_> = batch
        .actions
        .iter()
        .map(|action| match action.kind.as_ref() {
            Some(types::ActionKind::SendChat(chat)) => chat.message.as_str(),
            other => panic!("unexpected action kind: {:?}", other),
        })
        .collect();
    assert_eq!(messages, ["a1", "a2", "a3"]);
    assert_eq!(batch.actions[1].correlation_id.as_deref(), Some("req-2"));
}

#[tokio::test]
async fn empty_batch_sends_nothing() {
    let wire = Wire::new();

    let batch = wire.server.batch();
    assert!(batch.is_empty());
    batch.send().unwrap();

    assert!(wire.frames().await.is_empty());
}

#[tokio::test]
async fn log_is_forwarded() {
    let wire = Wire::new();

    wire.server.log("warn", "disk almost full").unwrap();

    let frames = wire.frames().await;
    match frames[0].payload.as_ref() {
        Some(types::PluginPayload::Log(log)) => {
            assert_eq!(log.level, "warn");
            assert_eq!(log.message, "disk almost full");
        }
        other => panic!("unexpected payload: {:?}", other),
    }
}

#[tokio::test]
async fn send_after_close_fails() {
    let wire = Wire::new();
    wire.outbound.close();

    let err = wire
        .server
        .send_chat("p", "too late")
        .expect_err("send after close should fail");
    assert!(matches!(err, RuntimeError::Closed));
    assert!(wire.frames().await.is_empty());
}
