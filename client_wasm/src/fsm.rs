//! Client State Machine
//!
//! Tracks whether the page shows a game in play or the game-over overlay.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Client states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    BallLost,
    Restart,
}

/// Result of a state transition
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
    action: GameAction,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TransitionResult {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn success(&self) -> bool {
        self.success
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn to_state(&self) -> FsmState {
        self.to_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn action(&self) -> GameAction {
        self.action
    }
}

/// Client Finite State Machine
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct ClientFsm {
    state: FsmState,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl ClientFsm {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self {
            state: FsmState::Playing,
        }
    }

    /// Get current state
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Get current state as string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Playing, GameAction::BallLost) => Some(FsmState::GameOver),
            (FsmState::GameOver, GameAction::Restart) => Some(FsmState::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == FsmState::GameOver
    }
}

impl Default for ClientFsm {
    fn default() -> Self {
        Self::new()
    }
}
