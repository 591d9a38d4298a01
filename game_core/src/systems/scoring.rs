use crate::{Ball, Config, Score};
use hecs::World;

/// Award a point when the ball reaches a side wall, then send it back.
///
/// The ball is not re-served: its horizontal velocity flips in place.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.rect();

        if rect.left() <= 0.0 {
            // Agent 2 scores
            score.increment_right();
            ball.vel.x = -ball.vel.x;
            tracing::debug!(left = score.left, right = score.right, "right scored");
        }
        if rect.right() >= config.arena_width {
            // Agent 1 scores
            score.increment_left();
            ball.vel.x = -ball.vel.x;
            tracing::debug!(left = score.left, right = score.right, "left scored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config, Score};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Score) {
        (hecs::World::new(), Config::new(), Score::new())
    }

    fn ball(world: &hecs::World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 200.0), Vec2::new(-3.0, 3.0), 10.0);

        check_scoring(&mut world, &config, &mut score);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert_eq!(ball(&world).vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score) = setup_world();
        // right edge = 590 + 10 = arena width
        create_ball(&mut world, Vec2::new(590.0, 200.0), Vec2::new(3.0, -3.0), 10.0);

        check_scoring(&mut world, &config, &mut score);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert_eq!(ball(&world).vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_ball_keeps_position_after_scoring() {
        let (mut world, config, mut score) = setup_world();
        create_ball(&mut world, Vec2::new(-2.0, 50.0), Vec2::new(-3.0, 3.0), 10.0);

        check_scoring(&mut world, &config, &mut score);

        assert_eq!(ball(&world).pos, Vec2::new(-2.0, 50.0));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score) = setup_world();
        create_ball(&mut world, Vec2::new(295.0, 195.0), Vec2::new(3.0, 3.0), 10.0);

        check_scoring(&mut world, &config, &mut score);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert_eq!(ball(&world).vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score) = setup_world();
        create_ball(&mut world, Vec2::new(595.0, 200.0), Vec2::new(3.0, 0.0), 10.0);

        // Still past the wall on the next check: scores again
        check_scoring(&mut world, &config, &mut score);
        check_scoring(&mut world, &config, &mut score);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
