use crate::events::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameView {
    PlayerTask { round: u32 },
    Play { round: u32 },
}

impl Default for GameView {
    fn default() -> Self {
        Self::PlayerTask { round: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameViewEvent {
    Switch(GameState),
    NextRound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameViewEffect {
    None,
    OpenTask { round: u32 },
    CloseTask,
}

impl GameView {
    /// Pure transition function for the host's screen state machine.
    ///
    /// Building or tearing down the task screen is reported via `GameViewEffect` so callers stay
    /// deterministic and easy to test. `last_round` is the number of rounds in the loaded catalog;
    /// `NextRound` never moves past it.
    pub fn handle(self, event: GameViewEvent, last_round: u32) -> (GameView, GameViewEffect) {
        match (self, event) {
            (GameView::PlayerTask { round }, GameViewEvent::Switch(GameState::Play)) => {
                (GameView::Play { round }, GameViewEffect::CloseTask)
            }

            (GameView::Play { round }, GameViewEvent::NextRound) => {
                let round = round.saturating_add(1).min(last_round.max(1));
                (
                    GameView::PlayerTask { round },
                    GameViewEffect::OpenTask { round },
                )
            }
            (GameView::Play { round }, GameViewEvent::Switch(GameState::PlayerTask)) => (
                GameView::PlayerTask { round },
                GameViewEffect::OpenTask { round },
            ),

            // Ignore irrelevant events in the current state.
            (state, _) => (state, GameViewEffect::None),
        }
    }

    pub fn round(self) -> u32 {
        match self {
            GameView::PlayerTask { round } | GameView::Play { round } => round,
        }
    }
}
