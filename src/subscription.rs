//! Which event kinds the plugin asks the host for.

use std::collections::BTreeSet;

use crate::types::{self, EventType};

/// The explicit set when one was given, otherwise every kind with a handler.
pub fn resolve_subscription(
    explicit: &BTreeSet<EventType>,
    registered: &BTreeSet<EventType>,
) -> BTreeSet<EventType> {
    if explicit.is_empty() {
        registered.clone()
    } else {
        explicit.clone()
    }
}

/// The second frame of every session, sent even when empty.
pub fn subscribe_payload(events: &BTreeSet<EventType>) -> types::PluginPayload {
    types::PluginPayload::Subscribe(types::EventSubscribe {
        events: events.iter().map(|kind| i32::from(*kind)).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(kinds: &[EventType]) -> BTreeSet<EventType> {
        kinds.iter().copied().collect()
    }

    #[test]
    fn explicit_wins_verbatim() {
        let resolved = resolve_subscription(
            &set(&[EventType::Chat]),
            &set(&[EventType::Chat, EventType::PlayerJoin]),
        );
        assert_eq!(resolved, set(&[EventType::Chat]));
    }

    #[test]
    fn falls_back_to_registered() {
        let resolved = resolve_subscription(&set(&[]), &set(&[EventType::BlockBreak]));
        assert_eq!(resolved, set(&[EventType::BlockBreak]));
    }

    #[test]
    fn both_empty_is_empty() {
        let resolved = resolve_subscription(&set(&[]), &set(&[]));
        assert!(resolved.is_empty());

        let types::PluginPayload::Subscribe(sub) = subscribe_payload(&resolved) else {
            panic!("expected subscribe payload");
        };
        assert!(sub.events.is_empty());
    }
}
