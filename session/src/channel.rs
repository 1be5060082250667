use crate::{Payload, Session, Update};

/// Injected messaging bridge. The session never touches the transport
/// directly: the surrounding app publishes through this capability and
/// folds whatever comes back out of the ordered stream with
/// [`Session::apply`].
///
/// `description` is the human-readable notification text shown next to
/// the update ("Alice joined the game", and so on).
pub trait UpdateChannel {
    fn publish(&mut self, payload: Payload, description: &str);
}

/// In-process channel keeping one totally ordered update log, numbered
/// from 1. Stands in for the host transport in tests: every subscriber
/// replaying the log sees the same updates in the same order.
#[derive(Clone, Debug, Default)]
pub struct LoopbackChannel {
    updates: Vec<Update>,
}

impl LoopbackChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    /// Folds the whole log into `session`, skipping the serial-0 echo
    /// the way real clients do.
    pub fn replay(&self, session: &mut Session) {
        for update in &self.updates {
            if update.serial == 0 {
                continue;
            }
            session.apply(&update.payload);
        }
    }
}

impl UpdateChannel for LoopbackChannel {
    fn publish(&mut self, payload: Payload, description: &str) {
        let serial = self.updates.len() as u64 + 1;
        log::trace!("update {serial}: {description}");
        self.updates.push(Update { serial, payload });
    }
}
