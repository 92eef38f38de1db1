//! Axis-aligned rectangles and collision detection.

use super::state::{Obstacle, PlayerBody};
use crate::constants::{FLOOR_Y, OBSTACLE_WIDTH, PLAYER_HITBOX, SCREEN_HEIGHT};

/// An axis-aligned rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect,
    /// and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The player's hitbox at its current position.
pub fn player_rect(player: &PlayerBody) -> Rect {
    Rect::new(player.x, player.y, PLAYER_HITBOX, PLAYER_HITBOX)
}

/// Top and bottom pylon rectangles for an obstacle.
pub fn obstacle_rects(obstacle: &Obstacle, gap: f64) -> (Rect, Rect) {
    let gap_bottom = obstacle.top_height + gap;
    let top = Rect::new(obstacle.x, 0.0, OBSTACLE_WIDTH, obstacle.top_height);
    let bottom = Rect::new(
        obstacle.x,
        gap_bottom,
        OBSTACLE_WIDTH,
        SCREEN_HEIGHT - gap_bottom,
    );
    (top, bottom)
}

/// True when the player left the playable band (above the ceiling or past the floor).
pub fn out_of_bounds(player: &PlayerBody) -> bool {
    player.y < 0.0 || player.y > FLOOR_Y
}

/// Checks the player against the screen bounds and every obstacle.
pub fn check_collision(player: &PlayerBody, obstacles: &[Obstacle], gap: f64) -> bool {
    if out_of_bounds(player) {
        return true;
    }

    let hitbox = player_rect(player);
    obstacles.iter().any(|obstacle| {
        let (top, bottom) = obstacle_rects(obstacle, gap);
        hitbox.intersects(&top) || hitbox.intersects(&bottom)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(y: f64) -> PlayerBody {
        PlayerBody {
            y,
            ..PlayerBody::default()
        }
    }

    fn obstacle_at(x: f64, top_height: f64) -> Obstacle {
        Obstacle {
            x,
            top_height,
            passed: false,
        }
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flat = Rect::new(2.0, 2.0, 5.0, 0.0);
        assert!(!a.intersects(&flat));
    }

    #[test]
    fn test_ceiling_boundary() {
        assert!(check_collision(&player_at(-1.0), &[], 200.0));
        assert!(!check_collision(&player_at(0.0), &[], 200.0));
    }

    #[test]
    fn test_floor_boundary() {
        assert!(!check_collision(&player_at(560.0), &[], 200.0));
        assert!(check_collision(&player_at(560.5), &[], 200.0));
    }

    #[test]
    fn test_obstacle_rects_span_screen() {
        let (top, bottom) = obstacle_rects(&obstacle_at(300.0, 150.0), 200.0);
        assert_eq!(top, Rect::new(300.0, 0.0, 100.0, 150.0));
        assert_eq!(bottom, Rect::new(300.0, 350.0, 100.0, 250.0));
    }

    #[test]
    fn test_hit_top_pylon() {
        // Player spans y 100..160, top pylon ends at 150.
        let obstacle = obstacle_at(180.0, 150.0);
        assert!(check_collision(&player_at(100.0), &[obstacle], 200.0));
    }

    #[test]
    fn test_hit_bottom_pylon() {
        // Gap is 150..350, player spans 300..360.
        let obstacle = obstacle_at(180.0, 150.0);
        assert!(check_collision(&player_at(300.0), &[obstacle], 200.0));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let obstacle = obstacle_at(180.0, 150.0);
        assert!(!check_collision(&player_at(150.0), &[obstacle], 200.0));
        assert!(!check_collision(&player_at(290.0), &[obstacle], 200.0));
    }

    #[test]
    fn test_touching_obstacle_horizontally_is_safe() {
        // Player spans x 200..260; obstacle starts exactly at 260.
        let obstacle = obstacle_at(260.0, 400.0);
        assert!(!check_collision(&player_at(300.0), &[obstacle], 100.0));
        let obstacle = obstacle_at(259.0, 400.0);
        assert!(check_collision(&player_at(300.0), &[obstacle], 100.0));
    }

    #[test]
    fn test_obstacle_behind_player_is_safe() {
        // Obstacle spans x 100..200, player starts at 200.
        let obstacle = obstacle_at(100.0, 400.0);
        assert!(!check_collision(&player_at(300.0), &[obstacle], 100.0));
    }
}
