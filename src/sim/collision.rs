//! Collision detection and response
//!
//! Discrete, single-position checks only. A ball fast enough to jump past a
//! paddle in one frame goes through it.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Which wall, if any, the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Top,
    Bottom,
}

/// Reflect the ball off the top or bottom wall
///
/// The ball is clamped exactly onto the wall and its vertical velocity negated.
pub fn collide_walls(ball: &mut Ball, playfield_height: f32) -> Option<WallHit> {
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        Some(WallHit::Top)
    } else if ball.pos.y + ball.radius > playfield_height {
        ball.pos.y = playfield_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        Some(WallHit::Bottom)
    } else {
        None
    }
}

/// Whether the ball's leading edge has crossed the paddle face while its
/// center is within the paddle's vertical span
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let crossed = match paddle.side {
        Side::Player => ball.pos.x - ball.radius < paddle.face_x(),
        Side::Opponent => ball.pos.x + ball.radius > paddle.face_x(),
    };
    crossed && paddle.spans(ball.pos.y)
}

/// Normalized hit offset from the paddle center, -1 at the top edge, 1 at the bottom
pub fn collide_point(ball_y: f32, paddle: &Paddle) -> f32 {
    (ball_y - paddle.center_y()) / (paddle.height / 2.0)
}

/// Spin model: outgoing velocity for a hit at `collide_point`
///
/// The deflection angle grows linearly with the offset up to 45 degrees at the
/// paddle edges. `direction` is the sign of the outgoing horizontal velocity.
pub fn spin_velocity(collide_point: f32, direction: f32, base_speed: f32) -> Vec2 {
    let angle = collide_point * MAX_BOUNCE_ANGLE;
    Vec2::new(
        direction * base_speed * angle.cos(),
        base_speed * angle.sin(),
    )
}

/// Bounce the ball off `paddle` if they touch
///
/// Returns true on a hit. The ball is pushed back onto the paddle face, its
/// horizontal direction flipped, and its velocity rebuilt by [`spin_velocity`].
pub fn collide_paddle(ball: &mut Ball, paddle: &Paddle, base_speed: f32) -> bool {
    if !touches_paddle(ball, paddle) {
        return false;
    }

    ball.pos.x = match paddle.side {
        Side::Player => paddle.face_x() + ball.radius,
        Side::Opponent => paddle.face_x() - ball.radius,
    };
    ball.vel.x = -ball.vel.x;

    let direction = if ball.vel.x > 0.0 { 1.0 } else { -1.0 };
    ball.vel = spin_velocity(collide_point(ball.pos.y, paddle), direction, base_speed);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    const EPS: f32 = 1e-4;

    fn paddles() -> (Paddle, Paddle) {
        let tuning = Tuning::default();
        (
            Paddle::new(Side::Player, &tuning),
            Paddle::new(Side::Opponent, &tuning),
        )
    }

    #[test]
    fn test_top_wall_reflects_and_clamps() {
        let mut ball = Ball::new(Vec2::new(400.0, 5.0), Vec2::new(6.0, -4.5), 12.0);
        assert_eq!(collide_walls(&mut ball, 400.0), Some(WallHit::Top));
        assert_eq!(ball.pos.y, 12.0, "Ball should sit exactly on the wall");
        assert_eq!(ball.vel, Vec2::new(6.0, 4.5));
    }

    #[test]
    fn test_bottom_wall_reflects_and_clamps() {
        let mut ball = Ball::new(Vec2::new(400.0, 395.0), Vec2::new(-6.0, 3.0), 12.0);
        assert_eq!(collide_walls(&mut ball, 400.0), Some(WallHit::Bottom));
        assert_eq!(ball.pos.y, 388.0);
        assert_eq!(ball.vel, Vec2::new(-6.0, -3.0));
    }

    #[test]
    fn test_ball_touching_wall_exactly_does_not_bounce() {
        let mut ball = Ball::new(Vec2::new(400.0, 12.0), Vec2::new(6.0, -2.0), 12.0);
        assert_eq!(collide_walls(&mut ball, 400.0), None);
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_center_hit_returns_flat() {
        let (player, _) = paddles();
        let mut ball = Ball::new(Vec2::new(30.0, 200.0), Vec2::new(-6.0, 0.0), 12.0);

        assert!(collide_paddle(&mut ball, &player, 6.0));
        assert!((ball.vel.x - 6.0).abs() < EPS);
        assert!(ball.vel.y.abs() < EPS);
        assert_eq!(ball.pos.x, 20.0 + 12.0 + 12.0, "Clamped to face + radius");
    }

    #[test]
    fn test_edge_hits_deflect_at_45_degrees() {
        for collide_point in [-1.0_f32, 1.0] {
            let vel = spin_velocity(collide_point, 1.0, 6.0);
            assert!((vel.x.abs() - vel.y.abs()).abs() < EPS);
            assert!((vel.x - 6.0 * std::f32::consts::FRAC_1_SQRT_2).abs() < EPS);
            assert_eq!(vel.y.signum(), collide_point.signum());
        }
    }

    #[test]
    fn test_spin_keeps_base_speed() {
        for i in -10..=10 {
            let vel = spin_velocity(i as f32 / 10.0, -1.0, 6.0);
            assert!((vel.length() - 6.0).abs() < EPS);
            assert!(vel.x < 0.0);
        }
    }

    #[test]
    fn test_top_half_hit_deflects_upward() {
        let (player, _) = paddles();
        let mut ball = Ball::new(Vec2::new(30.0, 170.0), Vec2::new(-6.0, 2.0), 12.0);
        assert!(collide_paddle(&mut ball, &player, 6.0));
        assert!(ball.vel.y < 0.0);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_opponent_paddle_sends_ball_left() {
        let (_, opponent) = paddles();
        let mut ball = Ball::new(Vec2::new(760.0, 230.0), Vec2::new(6.0, -1.0), 12.0);

        assert!(collide_paddle(&mut ball, &opponent, 6.0));
        assert_eq!(ball.pos.x, 768.0 - 12.0);
        assert!(ball.vel.x < 0.0);
        assert!(ball.vel.y > 0.0, "Lower half hit deflects downward");
        assert!((ball.vel.length() - 6.0).abs() < EPS);
    }

    #[test]
    fn test_miss_outside_vertical_span() {
        let (player, _) = paddles();
        let mut ball = Ball::new(Vec2::new(30.0, 100.0), Vec2::new(-6.0, 0.0), 12.0);
        let before = ball;
        assert!(!collide_paddle(&mut ball, &player, 6.0));
        assert_eq!(ball, before);

        // Span check is on the ball center, not its edge
        ball.pos.y = 155.0;
        assert!(!collide_paddle(&mut ball, &player, 6.0));
    }

    #[test]
    fn test_no_hit_before_face_is_crossed() {
        let (player, opponent) = paddles();
        let mut ball = Ball::new(Vec2::new(44.0, 200.0), Vec2::new(-6.0, 0.0), 12.0);
        assert!(!collide_paddle(&mut ball, &player, 6.0));

        let mut ball = Ball::new(Vec2::new(756.0, 200.0), Vec2::new(6.0, 0.0), 12.0);
        assert!(!collide_paddle(&mut ball, &opponent, 6.0));
    }

    #[test]
    fn test_collide_point_range() {
        let (player, _) = paddles();
        assert_eq!(collide_point(200.0, &player), 0.0);
        assert_eq!(collide_point(155.0, &player), -1.0);
        assert_eq!(collide_point(245.0, &player), 1.0);
    }
}
