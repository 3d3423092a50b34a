//! wasm-bindgen handle driven by the page
//!
//! The page owns scheduling: it calls `frame` from `requestAnimationFrame`
//! while it returns `true`, and forwards `keydown` / `mousemove` events.

use game_core::{Config, GameLoop, Renderer, Status, Viewport};
use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::DomRenderer;
use crate::fsm::{ClientFsm, GameAction};
use crate::input::{arena_relative_y, direction_for_key};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// One game bound to the page's elements
#[wasm_bindgen]
pub struct PongClient {
    game: GameLoop,
    fsm: ClientFsm,
    container: HtmlElement,
    renderer: DomRenderer,
}

#[wasm_bindgen]
impl PongClient {
    /// `config_json` may override any subset of the game configuration
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        seed: Option<f64>,
        config_json: Option<String>,
    ) -> Result<PongClient, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;

        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", container_id)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("Game container is not an HtmlElement"))?;

        let config = match config_json {
            Some(json) => serde_json::from_str::<Config>(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?,
            None => Config::default(),
        };

        let renderer = DomRenderer::new(&document)?;
        let viewport = measure(&container);
        let game = GameLoop::new(config, viewport, seed.map_or_else(random_seed, |s| s as u64))
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let mut client = Self {
            game,
            fsm: ClientFsm::new(),
            container,
            renderer,
        };
        client.redraw();
        Ok(client)
    }

    /// Advance one display refresh; returns whether to schedule another
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let viewport = measure(&self.container);
        let status = self.game.tick(now_ms, viewport, &mut self.renderer);

        if status == Status::Ended && self.fsm.is_playing() {
            self.fsm.transition(GameAction::BallLost);
        }
        status.is_running()
    }

    /// Returns `true` when the key moved the paddles
    pub fn key_down(&mut self, key: &str) -> bool {
        match direction_for_key(key) {
            Some(dir) => {
                let viewport = measure(&self.container);
                self.game.key_press(dir, viewport);
                self.redraw();
                true
            }
            None => false,
        }
    }

    pub fn pointer_move(&mut self, client_y: f64) {
        let rect = self.container.get_bounding_client_rect();
        let viewport = Viewport::new(rect.width() as f32, rect.height() as f32);
        self.game
            .pointer_move(arena_relative_y(client_y, rect.top()), viewport);
        self.redraw();
    }

    /// Full re-initialisation, the in-page analogue of reloading
    ///
    /// Returns `true`: the page must schedule `frame` again, because the
    /// previous loop stopped when `frame` returned `false`.
    pub fn restart(&mut self, seed: Option<f64>) -> bool {
        let viewport = measure(&self.container);
        let status = self
            .game
            .restart(viewport, seed.map_or_else(random_seed, |s| s as u64));
        if self.fsm.is_game_over() {
            self.fsm.transition(GameAction::Restart);
        }
        self.renderer.reset();
        self.redraw();
        info!("client restarted");
        status.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.game.status().is_running()
    }

    pub fn state_string(&self) -> String {
        self.fsm.state_string()
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> u32 {
        self.game.snapshot(measure(&self.container)).speed
    }

    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> u32 {
        self.game.state().bounces.get()
    }
}

impl PongClient {
    fn redraw(&mut self) {
        let snapshot = self.game.snapshot(measure(&self.container));
        self.renderer.draw(&snapshot);
    }
}

fn measure(container: &HtmlElement) -> Viewport {
    let rect = container.get_bounding_client_rect();
    Viewport::new(rect.width() as f32, rect.height() as f32)
}

fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (high << 32) | low
}
