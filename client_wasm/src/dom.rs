//! DOM display surface: element styles mirror each snapshot

use game_core::{PaddleView, Renderer, Snapshot, Status};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub const BALL_ID: &str = "ball";
pub const LEFT_PADDLE_ID: &str = "line-left";
pub const RIGHT_PADDLE_ID: &str = "line-right";
pub const OVERLAY_ID: &str = "gameOverOverlay";
pub const SPEED_ID: &str = "speedValue";
pub const BOUNCES_ID: &str = "bounceCount";

/// Elements the game writes to
pub struct DomRenderer {
    ball: HtmlElement,
    left_paddle: HtmlElement,
    right_paddle: HtmlElement,
    overlay: Element,
    speed: Element,
    bounces: Element,
}

impl DomRenderer {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            ball: html_element(document, BALL_ID)?,
            left_paddle: html_element(document, LEFT_PADDLE_ID)?,
            right_paddle: html_element(document, RIGHT_PADDLE_ID)?,
            overlay: element(document, OVERLAY_ID)?,
            speed: element(document, SPEED_ID)?,
            bounces: element(document, BOUNCES_ID)?,
        })
    }

    /// Undo the game-over presentation before a new game
    pub fn reset(&self) {
        set(&self.ball, "display", "block");
        if let Err(e) = self.overlay.class_list().remove_1("show") {
            warn!("failed to hide overlay: {:?}", e);
        }
    }

    fn draw_paddle(element: &HtmlElement, paddle: &PaddleView) {
        set(element, "left", &px(paddle.left));
        set(element, "top", &px(paddle.top));
        set(element, "width", &px(paddle.width));
        set(element, "height", &px(paddle.height));
    }
}

impl Renderer for DomRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        let ball = &snapshot.ball;
        set(&self.ball, "left", &px(ball.left));
        set(&self.ball, "top", &px(ball.top));
        set(&self.ball, "width", &px(ball.diameter));
        set(&self.ball, "height", &px(ball.diameter));
        set(&self.ball, "border-radius", &px(ball.radius));

        Self::draw_paddle(&self.left_paddle, &snapshot.left_paddle);
        Self::draw_paddle(&self.right_paddle, &snapshot.right_paddle);

        self.speed.set_text_content(Some(&snapshot.speed.to_string()));
        self.bounces
            .set_text_content(Some(&snapshot.bounces.to_string()));

        if snapshot.status == Status::Ended {
            set(&self.ball, "display", "none");
            if let Err(e) = self.overlay.class_list().add_1("show") {
                warn!("failed to show overlay: {:?}", e);
            }
        }
    }
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} is not an HtmlElement", id)))
}

fn set(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        warn!("failed to set {} on #{}: {:?}", property, element.id(), e);
    }
}

fn px(value: f32) -> String {
    format!("{}px", value)
}
