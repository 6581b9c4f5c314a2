use crate::event::EventContext;
use crate::types;

impl EventContext<types::ChatEvent> {
    ///Sets the `message` for this event.
    pub fn set_message(&mut self, message: impl Into<String>) {
        let mutation = types::ChatMutation {
            message: Some(message.into()),
        };
        self.set_mutation(types::EventResultUpdate::Chat(mutation));
    }
}

impl EventContext<types::BlockBreakEvent> {
    ///Sets the `drops` for this event.
    pub fn set_drops(&mut self, drops: Vec<types::ItemStack>) {
        let mutation = types::BlockBreakMutation {
            drops: Some(types::ItemStackList { items: drops }),
            ..Default::default()
        };
        self.set_mutation(types::EventResultUpdate::BlockBreak(mutation));
    }
    ///Sets the `xp` for this event.
    pub fn set_xp(&mut self, xp: i32) {
        let mutation = types::BlockBreakMutation {
            xp: Some(xp),
            ..Default::default()
        };
        self.set_mutation(types::EventResultUpdate::BlockBreak(mutation));
    }
}

/// Field-wise merge of two updates for the same event. Fields set in `next`
/// win; a different kind replaces `staged` outright.
pub(crate) fn merge_update(
    staged: Option<types::EventResultUpdate>,
    next: types::EventResultUpdate,
) -> types::EventResultUpdate {
    use types::EventResultUpdate as U;

    match (staged, next) {
        (Some(U::Chat(prev)), U::Chat(next)) => U::Chat(types::ChatMutation {
            message: next.message.or(prev.message),
        }),
        (Some(U::BlockBreak(prev)), U::BlockBreak(next)) => {
            U::BlockBreak(types::BlockBreakMutation {
                drops: next.drops.or(prev.drops),
                xp: next.xp.or(prev.xp),
            })
        }
        (_, next) => next,
    }
}
