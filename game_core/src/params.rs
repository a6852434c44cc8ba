/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (used when no canvas size is known)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between paddle and side edge

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 6.0; // Pixels per frame
    pub const BALL_SPEED_Y: f32 = 3.0;
    pub const SPIN_FACTOR: f32 = 3.0; // vy added per unit of off-center impact

    // AI
    pub const AI_STEP: f32 = 4.0; // Pixels per frame
    pub const AI_DEADZONE: f32 = 10.0;

    // Net
    pub const NET_WIDTH: f32 = 4.0;
    pub const NET_SEGMENT: f32 = 20.0;
    pub const NET_GAP: f32 = 15.0;

    // Colors
    pub const PLAYER_COLOR: &'static str = "#fff";
    pub const AI_COLOR: &'static str = "#f00";
    pub const BALL_COLOR: &'static str = "#0ff";
    pub const NET_COLOR: &'static str = "#888";
}
