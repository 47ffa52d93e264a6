use tictactoe_common::{GameBroadcaster, GameEvent};

use crate::state::SharedState;

/// Feeds session events straight into the window's shared view.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast(&self, event: GameEvent) {
        self.shared_state.apply_event(event);
    }
}
