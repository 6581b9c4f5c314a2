use crate::error::RuntimeError;
use crate::{types, Server};

impl Server {
    ///Sends a `SendChat` action to one player.
    pub fn send_chat(
        &self,
        target_uuid: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<(), RuntimeError> {
        self.send_action(types::ActionKind::SendChat(types::SendChatAction {
            target_uuid: target_uuid.into(),
            message: message.into(),
        }))
    }
    ///Sends a `SendChat` action to every online player.
    pub fn broadcast(&self, message: impl Into<String>) -> Result<(), RuntimeError> {
        self.send_chat(String::new(), message)
    }
    ///Sends a `Teleport` action to the server.
    pub fn teleport(
        &self,
        player_uuid: impl Into<String>,
        position: types::Vec3,
        rotation: Option<types::Vec3>,
    ) -> Result<(), RuntimeError> {
        self.send_action(types::ActionKind::Teleport(types::TeleportAction {
            player_uuid: player_uuid.into(),
            position: Some(position),
            rotation,
        }))
    }
    ///Sends a `Kick` action to the server.
    pub fn kick(
        &self,
        player_uuid: impl Into<String>,
        reason: impl Into<String>,
    ) -> Result<(), RuntimeError> {
        self.send_action(types::ActionKind::Kick(types::KickAction {
            player_uuid: player_uuid.into(),
            reason: reason.into(),
        }))
    }
    ///Sends a `SetGameMode` action to the server.
    pub fn set_game_mode(
        &self,
        player_uuid: impl Into<String>,
        game_mode: types::GameMode,
    ) -> Result<(), RuntimeError> {
        self.send_action(types::ActionKind::SetGameMode(types::SetGameModeAction {
            player_uuid: player_uuid.into(),
            game_mode: game_mode.into(),
        }))
    }
    ///Sends a `GiveItem` action to the server.
    pub fn give_item(
        &self,
        player_uuid: impl Into<String>,
        item: types::ItemStack,
    ) -> Result<(), RuntimeError> {
        self.send_action(types::ActionKind::GiveItem(types::GiveItemAction {
            player_uuid: player_uuid.into(),
            item: Some(item),
        }))
    }
    ///Sends a `WorldSetBlock` action to the server.
    pub fn world_set_block(
        &self,
        world: Option<types::WorldRef>,
        position: types::BlockPos,
        block: Option<types::BlockState>,
    ) -> Result<(), RuntimeError> {
        self.send_action(types::ActionKind::WorldSetBlock(types::WorldSetBlockAction {
            world,
            position: Some(position),
            block,
        }))
    }
    ///Sends a `SendPopup` action to the server.
    pub fn send_popup(
        &self,
        player_uuid: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<(), RuntimeError> {
        self.send_action(types::ActionKind::SendPopup(types::SendPopupAction {
            player_uuid: player_uuid.into(),
            message: message.into(),
        }))
    }
}
