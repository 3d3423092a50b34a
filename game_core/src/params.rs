/// Game tuning parameters, expressed at the reference resolution
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Reference layout (all sizes below are scaled by width / REF_WIDTH)
    pub const REF_WIDTH: f32 = 800.0;
    pub const REF_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_OFFSET: f32 = 10.0; // distance from the side walls
    pub const PADDLE_INITIAL_TOP: f32 = 260.0; // at REF_HEIGHT
    pub const KEY_STEP: f32 = 10.0; // px per key press, not scaled

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 150.0; // px per second

    // Speed ramp
    pub const WALL_SPEED_INCREMENT: f32 = 10.0;
    pub const PADDLE_SPEED_INCREMENT: f32 = 25.0;

    // Rebound angle: MIN + U[0, 1) * SPAN, in degrees
    pub const REBOUND_MIN_DEG: f32 = 1.0;
    pub const REBOUND_SPAN_DEG: f32 = 188.0;
}
