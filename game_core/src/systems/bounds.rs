use crate::{Ball, Events, Geometry};
use hecs::World;

/// Flag the ball as lost once any part of it leaves `[0, width]`
pub fn check_ball_lost(world: &World, geometry: &Geometry, events: &mut Events) -> bool {
    let radius = geometry.ball_radius;
    let lost = world
        .query::<&Ball>()
        .iter()
        .any(|(_e, ball)| ball.pos.x - radius < 0.0 || ball.pos.x + radius > geometry.width);

    if lost {
        events.ball_lost = true;
    }
    lost
}
