use tictactoe_common::engine::session::{TicTacToeSession, TicTacToeSessionSettings};
use tictactoe_common::{SessionCommand, log};
use tokio::sync::mpsc;

use crate::config::TicTacToeConfig;
use crate::state::SharedState;

use super::LocalBroadcaster;

/// Runs the game until the window drops its command sender.
pub async fn local_game_task(
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    config: TicTacToeConfig,
) {
    let settings = TicTacToeSessionSettings {
        ai_move_delay: config.ai_move_delay(),
    };
    log!("Starting local game, AI delay {:?}", settings.ai_move_delay);

    let broadcaster = LocalBroadcaster::new(shared_state);
    let final_state = TicTacToeSession::run(settings, command_rx, broadcaster).await;

    let score = final_state.score();
    log!("Local game closed, final score X {} : O {}", score.x, score.o);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::{Board, Mark};

    #[tokio::test]
    async fn test_window_clicks_drive_the_view() {
        let shared_state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let config = TicTacToeConfig {
            ai_move_delay_ms: 0,
        };

        command_tx
            .send(SessionCommand::HumanMove { index: 4 })
            .unwrap();
        drop(command_tx);
        local_game_task(shared_state.clone(), command_rx, config).await;

        let view = shared_state.get_view();
        let expected = Board::from_symbols(["O", "", "", "", "X", "", "", "", ""]).unwrap();
        assert_eq!(view.board, expected);
        assert_eq!(view.status.current_mark, Mark::X);
        assert!(view.accepts_clicks());
    }
}
