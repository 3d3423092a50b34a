use crate::{Aabb, Ball, BounceCounter, Config, Events, Geometry, Paddle, RandomSource, Side};
use hecs::World;
use log::debug;

/// Reflect the ball off the top and bottom walls
pub fn check_wall_bounce(
    world: &mut World,
    geometry: &Geometry,
    config: &Config,
    events: &mut Events,
) {
    let radius = geometry.ball_radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - radius <= 0.0 {
            ball.pos.y = radius;
            ball.vel.y = ball.vel.y.abs();
        } else if ball.pos.y + radius >= geometry.height {
            ball.pos.y = geometry.height - radius;
            ball.vel.y = -ball.vel.y.abs();
        } else {
            continue;
        }

        ball.increase_speed(config.wall_speed_increment);
        events.wall_bounce = true;
        debug!("wall bounce at y={:.1}, speed now {:.1}", ball.pos.y, ball.speed);
    }
}

/// Random outgoing heading for a paddle hit, in degrees
///
/// Right paddle: `[min, min + span)`. Left paddle: the same range turned by 180°.
pub fn rebound_angle(side: Side, rng: &mut impl RandomSource, config: &Config) -> f32 {
    config.rebound_base_deg(side) + rng.unit() * config.rebound_span_deg
}

/// Check the ball against both paddles
///
/// Sides are tested left then right, each against the ball as the previous
/// test left it, so a frame that overlaps both paddles scores two hits.
pub fn check_paddle_hits(
    world: &mut World,
    geometry: &Geometry,
    config: &Config,
    counter: &mut BounceCounter,
    events: &mut Events,
    rng: &mut impl RandomSource,
) {
    let sides: Vec<Side> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.side)
        .collect();

    for side in Side::BOTH {
        if !sides.contains(&side) {
            continue;
        }

        let rect = geometry.paddle_rect(side);
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if !rect.overlaps(&Aabb::around_circle(ball.pos, geometry.ball_radius)) {
                continue;
            }

            // Push the ball out past the paddle's inner edge
            ball.pos.x = match side {
                Side::Left => rect.max.x + geometry.ball_radius,
                Side::Right => rect.min.x - geometry.ball_radius,
            };

            let angle = rebound_angle(side, rng, config);
            ball.set_heading_degrees(angle);
            ball.increase_speed(config.paddle_speed_increment);

            counter.increment();
            match side {
                Side::Left => events.left_paddle_hit = true,
                Side::Right => events.right_paddle_hit = true,
            }
            debug!(
                "{:?} paddle hit #{}: heading {:.1}°, speed now {:.1}",
                side,
                counter.get(),
                angle,
                ball.speed
            );
        }
    }
}
