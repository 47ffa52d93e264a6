use egui::{CentralPanel, Context};
use tictactoe_common::{SessionCommand, log};
use tokio::sync::mpsc;

use crate::game_ui::TicTacToeGameUi;
use crate::state::SharedState;

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    game_ui: TicTacToeGameUi,
}

impl TicTacToeApp {
    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
            game_ui: TicTacToeGameUi::new(),
        }
    }

    fn send_command(&self, command: SessionCommand) {
        if self.command_tx.send(command).is_err() {
            log!("Game task has stopped, dropping {:?}", command);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let view = self.shared_state.get_view();
        let command = CentralPanel::default()
            .show(ctx, |ui| self.game_ui.render(ui, &view))
            .inner;

        if let Some(command) = command {
            self.send_command(command);
        }
    }
}
