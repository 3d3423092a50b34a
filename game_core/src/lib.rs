pub mod components;
pub mod config;
pub mod game_loop;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game_loop::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// All mutable simulation state for one game
pub struct GameState {
    world: World,
    ball: Entity,
    pub track: PaddleTrack,
    pub bounces: BounceCounter,
    pub status: Status,
}

impl GameState {
    /// Fresh game: ball centred with a random heading, paddles at their start ratio
    pub fn new(viewport: Viewport, config: &Config, rng: &mut impl RandomSource) -> Self {
        let mut track = PaddleTrack::new(config.initial_paddle_ratio);
        let geometry = Geometry::compute(viewport, config, track.ratio);
        track.clamp_to(&geometry);
        let launched = Ball::launch(geometry.center(), config.ball_speed_initial, rng);

        let mut world = World::new();
        create_paddles(&mut world);
        let ball = world.spawn((launched,));

        Self {
            world,
            ball,
            track,
            bounces: BounceCounter::new(),
            status: Status::Running,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn ball(&self) -> Ball {
        *self
            .world
            .get::<&Ball>(self.ball)
            .expect("ball entity lives as long as the state")
    }

    /// Overwrite the ball's position and velocity
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            *ball = Ball::new(pos, vel);
        }
    }

    /// Keyboard step for both paddles
    pub fn press(&mut self, dir: Direction, viewport: Viewport, config: &Config) {
        let geometry = self.geometry(viewport, config);
        self.track.nudge(dir, &geometry, config.key_step);
    }

    /// Pointer y relative to the arena's top edge
    pub fn point_at(&mut self, y: f32, viewport: Viewport, config: &Config) {
        let geometry = self.geometry(viewport, config);
        self.track.point_at(y, &geometry);
    }

    pub fn geometry(&self, viewport: Viewport, config: &Config) -> Geometry {
        Geometry::compute(viewport, config, self.track.ratio)
    }

    pub fn snapshot(&self, geometry: &Geometry) -> Snapshot {
        Snapshot::capture(&self.ball(), geometry, self.bounces.get(), self.status)
    }
}

/// Advance the simulation by one frame and describe the result
///
/// Once the ball has been lost the state is frozen; further calls only
/// report it.
pub fn step(
    state: &mut GameState,
    viewport: Viewport,
    time: &Time,
    config: &Config,
    events: &mut Events,
    rng: &mut impl RandomSource,
) -> Snapshot {
    // Clear events at start of frame
    events.clear();

    // 1. Geometry for the current container size
    let geometry = state.geometry(viewport, config);
    if !state.status.is_running() {
        return state.snapshot(&geometry);
    }

    // 2. Move ball
    move_ball(&mut state.world, time);

    // 3. Ball left the arena sideways: game over
    if check_ball_lost(&state.world, &geometry, events) {
        state.status = Status::Ended;
        return state.snapshot(&geometry);
    }

    // 4. Top/bottom walls
    check_wall_bounce(&mut state.world, &geometry, config, events);

    // 5. Paddles
    check_paddle_hits(
        &mut state.world,
        &geometry,
        config,
        &mut state.bounces,
        events,
        rng,
    );

    state.snapshot(&geometry)
}

/// Helper to create both paddle entities
pub fn create_paddles(world: &mut World) -> [Entity; 2] {
    Side::BOTH.map(|side| world.spawn((Paddle::new(side),)))
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> Entity {
    world.spawn((Ball::new(pos, vel),))
}
