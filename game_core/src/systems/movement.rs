use crate::{Ball, Time};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    let dt = time.dt_secs();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_velocity_times_seconds() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(150.0, -30.0));

        move_ball(&mut world, &Time::new(1000.0));

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!((ball.pos.x - 550.0).abs() < 1e-3);
        assert!((ball.pos.y - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_dt_leaves_ball_in_place() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Vec2::new(10.0, 20.0), Vec2::new(5.0, 5.0));

        move_ball(&mut world, &Time::new(0.0));

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec2::new(10.0, 20.0));
    }
}
