//! A small plugin that keeps players inside a fenced area.
//!
//! - joining players are teleported to spawn and greeted
//! - walking past the edge shows a popup and raises a glass wall beside them
//! - `!shout <text>` in chat is rewritten to upper case
//! - `/wall` toggles the glass wall for the player who runs it

use std::collections::{HashMap, HashSet};

use df_plugin_runtime::{
    command, listener, types, EventContext, Plugin, PluginRuntime, RuntimeConfig, Server,
};
use tokio::sync::Mutex;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const AREA_EDGE: f64 = 5.0;
const SPAWN: types::Vec3 = types::Vec3 {
    x: 0.0,
    y: 64.0,
    z: 0.0,
};

type Block = (i32, i32, i32);

#[derive(Plugin)]
#[plugin(id = "area", name = "Area", version = "0.3.0", api = "v1", hooks)]
struct AreaPlugin {
    /// Wall blocks currently placed for each player.
    walls: Mutex<HashMap<String, HashSet<Block>>>,
    /// Players who turned their wall off with `/wall`.
    wall_off: Mutex<HashSet<String>>,
}

impl AreaPlugin {
    fn new() -> Self {
        Self {
            walls: Mutex::new(HashMap::new()),
            wall_off: Mutex::new(HashSet::new()),
        }
    }

    fn on_enable(&self, server: &Server) {
        let _ = server.log("info", "area plugin enabled");
    }

    fn on_disable(&self, _server: &Server) {
        info!("area plugin disabled");
    }

    /// Blocks of a 3x3 wall just outside the edge, centred on the player.
    fn wall_for(position: &types::Vec3) -> HashSet<Block> {
        let x = AREA_EDGE as i32 + 1;
        let (y, z) = (position.y.floor() as i32, position.z.floor() as i32);
        (y..y + 3)
            .flat_map(|by| (z - 1..=z + 1).map(move |bz| (x, by, bz)))
            .collect()
    }
}

fn set_block(block: Block, name: &str) -> types::ActionKind {
    types::ActionKind::WorldSetBlock(types::WorldSetBlockAction {
        world: None,
        position: Some(types::BlockPos {
            x: block.0,
            y: block.1,
            z: block.2,
        }),
        block: Some(types::BlockState {
            name: name.to_owned(),
            properties: HashMap::new(),
        }),
    })
}

#[listener]
impl AreaPlugin {
    fn on_join(
        &self,
        event: &types::PlayerJoinEvent,
        ctx: &mut EventContext<types::PlayerJoinEvent>,
    ) -> anyhow::Result<()> {
        let server = ctx.server();
        server.teleport(&event.player_uuid, SPAWN, None)?;
        server.send_chat(
            &event.player_uuid,
            format!("Welcome {}! Stay within {AREA_EDGE} blocks.", event.name),
        )?;
        Ok(())
    }

    async fn on_move(
        &self,
        event: &types::PlayerMoveEvent,
        ctx: &mut EventContext<types::PlayerMoveEvent>,
    ) -> anyhow::Result<()> {
        let Some(position) = event.position else {
            return Ok(());
        };
        let outside = position.x > AREA_EDGE;
        if outside {
            ctx.server()
                .send_popup(&event.player_uuid, "You are leaving the area")?;
        }

        let wanted = if outside && !self.wall_off.lock().await.contains(&event.player_uuid) {
            Self::wall_for(&position)
        } else {
            HashSet::new()
        };

        let mut walls = self.walls.lock().await;
        let placed = walls.entry(event.player_uuid.clone()).or_default();
        if *placed == wanted {
            return Ok(());
        }

        let mut batch = ctx.server().batch();
        for block in placed.difference(&wanted) {
            batch = batch.push(set_block(*block, "minecraft:air"));
        }
        for block in wanted.difference(placed) {
            batch = batch.push(set_block(*block, "minecraft:glass"));
        }
        batch.send()?;
        *placed = wanted;
        Ok(())
    }

    async fn on_quit(&self, event: &types::PlayerQuitEvent) {
        self.walls.lock().await.remove(&event.player_uuid);
        self.wall_off.lock().await.remove(&event.player_uuid);
    }

    fn on_chat(&self, event: &types::ChatEvent, ctx: &mut EventContext<types::ChatEvent>) {
        if let Some(rest) = event.message.strip_prefix("!shout ") {
            ctx.set_message(rest.to_uppercase());
        }
    }

    async fn toggle_wall(&self, player_uuid: &str) -> bool {
        let mut off = self.wall_off.lock().await;
        if off.remove(player_uuid) {
            true
        } else {
            off.insert(player_uuid.to_owned());
            false
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_file(false).with_line_number(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = RuntimeConfig::from_env();
    let plugin = std::sync::Arc::new(AreaPlugin::new());

    let mut runtime = PluginRuntime::new(plugin.identity());
    config.apply(runtime.identity_mut());
    runtime.with_plugin(plugin.clone());
    runtime.listen(plugin.clone());

    let toggler = plugin.clone();
    runtime.command(
        command::spec("wall", "Toggle your area wall", &["w"]),
        move |ctx| {
            let toggler = toggler.clone();
            Box::pin(async move {
                let on = toggler.toggle_wall(&ctx.data.player_uuid).await;
                ctx.reply(if on { "Wall enabled." } else { "Wall disabled." })?;
                Ok(())
            })
        },
    );

    let report = runtime.connect(&config.server_address).await?;
    info!(
        events = report.events_dispatched,
        exit = ?report.exit,
        "area plugin stopped"
    );
    Ok(())
}
