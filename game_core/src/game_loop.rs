//! Frame driver: turns display-refresh timestamps into simulation steps

use log::{info, warn};

use crate::{
    step, Config, ConfigError, Direction, Events, GameRng, GameState, Renderer, Snapshot, Status,
    Time, Viewport,
};

/// Owns one game and advances it once per display refresh
pub struct GameLoop {
    state: GameState,
    config: Config,
    rng: GameRng,
    events: Events,
    last_ms: Option<f64>,
}

impl GameLoop {
    pub fn new(config: Config, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let state = GameState::new(viewport, &config, &mut rng);
        info!("game started (seed {seed}), speed {:.0}", state.ball().speed);

        Ok(Self {
            state,
            config,
            rng,
            events: Events::new(),
            last_ms: None,
        })
    }

    /// Run one frame at `now_ms` and draw it
    ///
    /// The first tick sees no elapsed time. After the game ends nothing is
    /// stepped or drawn and `Status::Ended` is returned.
    pub fn tick(&mut self, now_ms: f64, viewport: Viewport, renderer: &mut impl Renderer) -> Status {
        if !self.state.status.is_running() {
            return Status::Ended;
        }

        let mut dt_ms = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        if let Some(max) = self.config.max_frame_ms {
            if dt_ms > max {
                warn!("frame took {dt_ms:.0}ms, capped to {max:.0}ms");
                dt_ms = max;
            }
        }

        let time = Time::new(dt_ms);
        let snapshot = step(
            &mut self.state,
            viewport,
            &time,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );
        renderer.draw(&snapshot);

        if self.events.ball_lost {
            info!(
                "game over after {} paddle hits, final speed {}",
                snapshot.bounces, snapshot.speed
            );
        }
        snapshot.status
    }

    /// Throw the current game away and start a new one
    ///
    /// The returned status is always `Running`; the host must start calling
    /// `tick` again, since it stopped when the previous game ended.
    pub fn restart(&mut self, viewport: Viewport, seed: u64) -> Status {
        self.rng = GameRng::new(seed);
        self.state = GameState::new(viewport, &self.config, &mut self.rng);
        self.events.clear();
        self.last_ms = None;
        info!("game restarted (seed {seed})");
        self.state.status
    }

    pub fn key_press(&mut self, dir: Direction, viewport: Viewport) {
        self.state.press(dir, viewport, &self.config);
    }

    pub fn pointer_move(&mut self, y: f32, viewport: Viewport) {
        self.state.point_at(y, viewport, &self.config);
    }

    /// Current state without stepping
    pub fn snapshot(&self, viewport: Viewport) -> Snapshot {
        self.state.snapshot(&self.state.geometry(viewport, &self.config))
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Snapshot>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, snapshot: &Snapshot) {
            self.frames.push(*snapshot);
        }
    }

    const VIEW: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_first_tick_does_not_move_ball() {
        let mut game = GameLoop::new(Config::new(), VIEW, 1).unwrap();
        let mut recorder = Recorder::default();

        game.tick(5_000.0, VIEW, &mut recorder);

        let ball = recorder.frames[0].ball;
        assert_eq!((ball.left, ball.top), (390.0, 290.0));
    }

    #[test]
    fn test_tick_uses_timestamp_delta() {
        let mut game = GameLoop::new(Config::new(), VIEW, 1).unwrap();
        game.state_mut()
            .place_ball(Vec2::new(400.0, 300.0), Vec2::new(150.0, 0.0));
        let mut recorder = Recorder::default();

        game.tick(1_000.0, VIEW, &mut recorder);
        game.tick(2_000.0, VIEW, &mut recorder);

        assert!((game.state().ball().pos.x - 550.0).abs() < 1e-3);
    }

    #[test]
    fn test_frame_cap_limits_distance() {
        let config = Config {
            max_frame_ms: Some(100.0),
            ..Config::new()
        };
        let mut game = GameLoop::new(config, VIEW, 1).unwrap();
        game.state_mut()
            .place_ball(Vec2::new(400.0, 300.0), Vec2::new(150.0, 0.0));
        let mut recorder = Recorder::default();

        game.tick(0.0, VIEW, &mut recorder);
        game.tick(10_000.0, VIEW, &mut recorder);

        assert!((game.state().ball().pos.x - 415.0).abs() < 1e-3);
        assert_eq!(game.status(), Status::Running);
    }

    #[test]
    fn test_no_frames_after_game_over() {
        let mut game = GameLoop::new(Config::new(), VIEW, 1).unwrap();
        game.state_mut()
            .place_ball(Vec2::new(400.0, 300.0), Vec2::new(-1_000.0, 0.0));
        let mut recorder = Recorder::default();

        game.tick(0.0, VIEW, &mut recorder);
        assert_eq!(game.tick(1_000.0, VIEW, &mut recorder), Status::Ended);
        assert!(game.events().ball_lost);
        let drawn = recorder.frames.len();
        assert!(!recorder.frames[drawn - 1].ball.visible);

        assert_eq!(game.tick(2_000.0, VIEW, &mut recorder), Status::Ended);
        assert_eq!(recorder.frames.len(), drawn, "Ended game draws nothing");
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = GameLoop::new(Config::new(), VIEW, 1).unwrap();
        game.state_mut().bounces.increment();
        game.key_press(Direction::Down, VIEW);
        game.state_mut()
            .place_ball(Vec2::new(400.0, 300.0), Vec2::new(-1_000.0, 0.0));
        let mut recorder = Recorder::default();
        game.tick(0.0, VIEW, &mut recorder);
        game.tick(1_000.0, VIEW, &mut recorder);
        assert_eq!(game.status(), Status::Ended);

        assert_eq!(game.restart(VIEW, 2), Status::Running);

        assert_eq!(game.status(), Status::Running);
        assert_eq!(game.state().bounces.get(), 0);
        assert!((game.state().track.ratio - Config::new().initial_paddle_ratio).abs() < 1e-6);
        let ball = game.state().ball();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.speed, 150.0);
    }

    #[test]
    fn test_ticks_resume_after_restart() {
        let mut game = GameLoop::new(Config::new(), VIEW, 1).unwrap();
        game.state_mut()
            .place_ball(Vec2::new(400.0, 300.0), Vec2::new(-1_000.0, 0.0));
        let mut recorder = Recorder::default();
        game.tick(0.0, VIEW, &mut recorder);
        game.tick(1_000.0, VIEW, &mut recorder);
        assert_eq!(game.tick(2_000.0, VIEW, &mut recorder), Status::Ended);

        assert!(game.restart(VIEW, 3).is_running());
        game.state_mut()
            .place_ball(Vec2::new(400.0, 300.0), Vec2::new(150.0, 0.0));
        let drawn = recorder.frames.len();

        // Old timestamps must not leak into the new game's first delta
        assert_eq!(game.tick(50_000.0, VIEW, &mut recorder), Status::Running);
        assert_eq!(game.tick(51_000.0, VIEW, &mut recorder), Status::Running);

        assert_eq!(recorder.frames.len(), drawn + 2);
        assert!((game.state().ball().pos.x - 550.0).abs() < 1e-3);
    }

    #[test]
    fn test_same_seed_same_heading() {
        let a = GameLoop::new(Config::new(), VIEW, 99).unwrap();
        let b = GameLoop::new(Config::new(), VIEW, 99).unwrap();
        assert_eq!(a.state().ball().vel, b.state().ball().vel);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = Config {
            ball_radius: -1.0,
            ..Config::new()
        };
        assert!(GameLoop::new(config, VIEW, 1).is_err());
    }

    #[test]
    fn test_pointer_moves_paddles() {
        let mut game = GameLoop::new(Config::new(), VIEW, 1).unwrap();
        game.pointer_move(100.0, VIEW);
        let snapshot = game.snapshot(VIEW);
        assert!((snapshot.left_paddle.top - 60.0).abs() < 1e-3);
        assert_eq!(snapshot.left_paddle.top, snapshot.right_paddle.top);
    }
}
