use serde::Deserialize;

use crate::Params;

/// Rejected configuration values
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number greater than zero - got `{value}`")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must be a finite number, zero or greater - got `{value}`")]
    Negative { field: &'static str, value: f32 },

    #[error("`{field}` must be within {min}..={max} - got `{value}`")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Game configuration
///
/// Every field has a default taken from [`Params`], so a JSON override only
/// needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ref_width: f32,
    pub paddle_height: f32,
    pub paddle_width: f32,
    pub paddle_offset: f32,
    pub initial_paddle_ratio: f32,
    pub key_step: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub wall_speed_increment: f32,
    pub paddle_speed_increment: f32,
    pub rebound_min_deg: f32,
    pub rebound_span_deg: f32,
    /// Upper bound on a single frame's elapsed time, in milliseconds.
    pub max_frame_ms: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ref_width: Params::REF_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_offset: Params::PADDLE_OFFSET,
            initial_paddle_ratio: Params::PADDLE_INITIAL_TOP / Params::REF_HEIGHT,
            key_step: Params::KEY_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            wall_speed_increment: Params::WALL_SPEED_INCREMENT,
            paddle_speed_increment: Params::PADDLE_SPEED_INCREMENT,
            rebound_min_deg: Params::REBOUND_MIN_DEG,
            rebound_span_deg: Params::REBOUND_SPAN_DEG,
            max_frame_ms: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every value can drive the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("ref_width", self.ref_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed_initial", self.ball_speed_initial)?;
        non_negative("paddle_offset", self.paddle_offset)?;
        non_negative("key_step", self.key_step)?;
        non_negative("wall_speed_increment", self.wall_speed_increment)?;
        non_negative("paddle_speed_increment", self.paddle_speed_increment)?;
        non_negative("rebound_min_deg", self.rebound_min_deg)?;
        in_range("rebound_span_deg", self.rebound_span_deg, 0.0, 360.0)?;
        if self.rebound_span_deg == 0.0 {
            return Err(ConfigError::NotPositive {
                field: "rebound_span_deg",
                value: self.rebound_span_deg,
            });
        }
        in_range("initial_paddle_ratio", self.initial_paddle_ratio, 0.0, 1.0)?;
        if let Some(max) = self.max_frame_ms {
            positive("max_frame_ms", max)?;
        }
        Ok(())
    }

    /// Degrees added to the rebound angle for the given side
    pub fn rebound_base_deg(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Right => self.rebound_min_deg,
            crate::Side::Left => self.rebound_min_deg + 180.0,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
