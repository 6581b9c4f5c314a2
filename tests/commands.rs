mod common;

use std::sync::Arc;

use common::{envelope, event_result, event_results, host_event};
use df_plugin_runtime::command::{self, parse_required_arg};
use df_plugin_runtime::{types, PluginIdentity, PluginRuntime};
use futures::future;
use tokio::sync::Mutex;
use tokio_stream::StreamExt;

fn command_event(event_id: &str, raw: &str, command: &str) -> types::EventEnvelope {
    envelope(
        event_id,
        types::EventPayload::Command(types::CommandEvent {
            player_uuid: "player-uuid".into(),
            name: "Player".into(),
            raw: raw.into(),
            command: command.into(),
            args: Vec::new(),
        }),
    )
}

fn wall_runtime(calls: Arc<Mutex<Vec<Vec<String>>>>) -> PluginRuntime {
    let mut runtime = PluginRuntime::new(PluginIdentity::new("area", "Area", "0.1.0"));
    runtime.command(
        command::spec("/wall", "Toggle walls", &["w"]),
        move |ctx| {
            let calls = calls.clone();
            Box::pin(async move {
                let args = ctx.args();
                let height: u32 = parse_required_arg(&args, 0, "height")?;
                ctx.reply(format!("wall height {height}"))?;
                calls.lock().await.push(args);
                Ok(())
            })
        },
    );
    runtime
}

#[tokio::test]
async fn command_is_announced_in_hello() {
    let runtime = wall_runtime(Arc::default());
    assert_eq!(
        runtime.subscription().into_iter().collect::<Vec<_>>(),
        vec![types::EventType::Command]
    );

    let (session, stream) = runtime.start().unwrap();
    drop(session);
    let frames: Vec<_> = stream.collect().await;
    match frames[0].payload.as_ref() {
        Some(types::PluginPayload::Hello(hello)) => {
            assert_eq!(hello.commands.len(), 1);
            assert_eq!(hello.commands[0].name, "wall");
            assert_eq!(hello.commands[0].aliases, vec!["w".to_string()]);
        }
        other => panic!("expected hello, got {:?}", other),
    }
}

#[tokio::test]
async fn matching_command_is_cancelled_and_handled() {
    let calls: Arc<Mutex<Vec<Vec<String>>>> = Arc::default();
    let (session, stream) = wall_runtime(calls.clone()).start().unwrap();

    let inbound = tokio_stream::iter(vec![
        host_event(command_event("c1", "/WALL 3", "")),
        host_event(command_event("c2", "/w 4", "w")),
        host_event(command_event("c3", "/tp 1 2 3", "tp")),
    ]);
    let report = session.drive(inbound, future::pending()).await.unwrap();
    assert_eq!(report.events_dispatched, 3);

    assert_eq!(
        calls.lock().await.as_slice(),
        &[vec!["3".to_string()], vec!["4".to_string()]]
    );

    let frames: Vec<_> = stream.collect().await;
    let results = event_results(&frames);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].cancel, Some(true));
    assert_eq!(results[1].cancel, Some(true));
    // Not ours: passed through.
    assert_eq!(results[2].event_id, "c3");
    assert!(results[2].cancel.is_none());
}

#[tokio::test]
async fn parse_error_still_leaves_event_cancelled() {
    let (session, stream) = wall_runtime(Arc::default()).start().unwrap();

    let inbound = tokio_stream::iter(vec![host_event(command_event("c1", "/wall tall", "wall"))]);
    session.drive(inbound, future::pending()).await.unwrap();

    let frames: Vec<_> = stream.collect().await;
    // hello, subscribe, result
    assert_eq!(frames.len(), 3);
    let result = event_result(&frames[2]);
    assert_eq!(result.event_id, "c1");
    assert_eq!(result.cancel, Some(true));
}
