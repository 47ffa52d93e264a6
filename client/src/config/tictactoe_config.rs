use std::time::Duration;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::engine::session::DEFAULT_AI_MOVE_DELAY;

const MAX_AI_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub ai_move_delay_ms: u64,
}

impl TicTacToeConfig {
    pub fn ai_move_delay(&self) -> Duration {
        Duration::from_millis(self.ai_move_delay_ms)
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "ai_move_delay_ms must not exceed {} (got {})",
                MAX_AI_MOVE_DELAY_MS, self.ai_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            ai_move_delay_ms: DEFAULT_AI_MOVE_DELAY.as_millis() as u64,
        }
    }
}
