use std::time::Duration;

use tokio::sync::mpsc;

use crate::engine::session::{GameBroadcaster, GameEvent, SessionCommand};
use crate::engine::tictactoe::{
    AI_MARK, BotInput, Mark, MoveError, MoveOutcome, TicTacToeGameState, calculate_minimax_move,
};
use crate::log;

pub const HUMAN_MARK: Mark = Mark::X;

pub const DEFAULT_AI_MOVE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct TicTacToeSessionSettings {
    /// Pause between the human's move and the AI's reply.
    pub ai_move_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            ai_move_delay: DEFAULT_AI_MOVE_DELAY,
        }
    }
}

enum BotTurn {
    Play,
    Cancelled,
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives one human-vs-AI session until the command channel closes.
    ///
    /// Commands are handled one at a time by this task only, so the game state
    /// needs no locking. The returned state carries the final board and score.
    pub async fn run(
        settings: TicTacToeSessionSettings,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> TicTacToeGameState {
        let mut game_state = TicTacToeGameState::new();

        log!(
            "Session started, AI replies after {} ms",
            settings.ai_move_delay.as_millis()
        );
        broadcast_board_and_status(&game_state, &broadcaster).await;

        while let Some(command) = command_rx.recv().await {
            match command {
                SessionCommand::HumanMove { index } => {
                    handle_human_move(
                        &mut game_state,
                        index,
                        &settings,
                        &mut command_rx,
                        &broadcaster,
                    )
                    .await;
                }
                SessionCommand::Reset => reset_game(&mut game_state, &broadcaster).await,
            }
        }

        log!(
            "Session closed, score X {} : O {}",
            game_state.score().x,
            game_state.score().o
        );
        game_state
    }
}

async fn handle_human_move(
    game_state: &mut TicTacToeGameState,
    index: usize,
    settings: &TicTacToeSessionSettings,
    command_rx: &mut mpsc::UnboundedReceiver<SessionCommand>,
    broadcaster: &impl GameBroadcaster,
) {
    if let Err(e) = apply_and_broadcast(game_state, index, HUMAN_MARK, broadcaster).await {
        log!("Rejected human move at cell {}: {}", index, e);
        return;
    }

    if !game_state.is_active() || game_state.current_mark() != AI_MARK {
        return;
    }

    match wait_for_bot_turn(settings.ai_move_delay, command_rx).await {
        BotTurn::Play => play_bot_turn(game_state, broadcaster).await,
        BotTurn::Cancelled => reset_game(game_state, broadcaster).await,
    }
}

/// Waits out the AI delay. A reset arriving meanwhile cancels the AI move;
/// human moves are refused because it is not their turn.
async fn wait_for_bot_turn(
    delay: Duration,
    command_rx: &mut mpsc::UnboundedReceiver<SessionCommand>,
) -> BotTurn {
    if delay.is_zero() {
        return BotTurn::Play;
    }

    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            biased;
            _ = &mut sleep => return BotTurn::Play,
            command = command_rx.recv() => match command {
                Some(SessionCommand::Reset) => return BotTurn::Cancelled,
                Some(SessionCommand::HumanMove { index }) => {
                    log!("Ignoring move at cell {}: {}", index, MoveError::NotYourTurn {
                        expected: AI_MARK,
                        got: HUMAN_MARK,
                    });
                }
                None => {
                    (&mut sleep).await;
                    return BotTurn::Play;
                }
            },
        }
    }
}

async fn play_bot_turn(game_state: &mut TicTacToeGameState, broadcaster: &impl GameBroadcaster) {
    let bot_input = BotInput::from_game_state(game_state);

    let calculated_move =
        tokio::task::spawn_blocking(move || calculate_minimax_move(&bot_input)).await;

    match calculated_move {
        Ok(Some(index)) => apply_bot_move(game_state, index, broadcaster).await,
        Ok(None) => log!("AI found no move on\n{}", game_state.board()),
        Err(e) => log!("AI move task failed: {}", e),
    }
}

/// A rejected AI move leaves the game untouched and emits nothing.
async fn apply_bot_move(
    game_state: &mut TicTacToeGameState,
    index: usize,
    broadcaster: &impl GameBroadcaster,
) {
    match apply_and_broadcast(game_state, index, AI_MARK, broadcaster).await {
        Ok(_) => log!("AI played cell {}", index),
        Err(e) => log!(
            "AI move at cell {} was rejected: {}\n{}",
            index,
            e,
            game_state.board()
        ),
    }
}

async fn apply_and_broadcast(
    game_state: &mut TicTacToeGameState,
    index: usize,
    mark: Mark,
    broadcaster: &impl GameBroadcaster,
) -> Result<MoveOutcome, MoveError> {
    let outcome = game_state.apply_move(index, mark)?;

    broadcast_board_and_status(game_state, broadcaster).await;

    match outcome {
        MoveOutcome::Won(line) => {
            log!("{} wins on cells {:?}", line.mark, line.cells);
            broadcaster
                .broadcast(GameEvent::ScoreChanged(game_state.score()))
                .await;
            broadcaster.broadcast(GameEvent::WinHighlight(line)).await;
        }
        MoveOutcome::Draw => log!("Game ended in a draw"),
        MoveOutcome::Continue { .. } => {}
    }

    Ok(outcome)
}

async fn reset_game(game_state: &mut TicTacToeGameState, broadcaster: &impl GameBroadcaster) {
    game_state.reset();
    log!("Board reset");
    broadcast_board_and_status(game_state, broadcaster).await;
}

async fn broadcast_board_and_status(
    game_state: &TicTacToeGameState,
    broadcaster: &impl GameBroadcaster,
) {
    broadcaster
        .broadcast(GameEvent::BoardChanged(*game_state.board()))
        .await;
    broadcaster
        .broadcast(GameEvent::StatusChanged(game_state.status_line()))
        .await;
}
