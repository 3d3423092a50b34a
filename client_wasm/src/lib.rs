//! DOM client for the two-paddle arcade game
//!
//! The simulation lives in `game_core`; this crate only measures the page,
//! forwards input and writes element styles.

pub mod fsm;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use client::PongClient;
