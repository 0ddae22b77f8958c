use crate::Direction;

/// Drag distance below which a pointer gesture is ignored, in pixels.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 30;

/// Maps a drag-end delta to a slide direction.
///
/// Returns `None` when both components stay under `threshold`. Otherwise
/// the dominant axis wins and the sign picks the variant; exact diagonals
/// resolve vertically.
pub fn swipe_direction(dx: i32, dy: i32, threshold: i32) -> Option<Direction> {
    if dx.abs() < threshold && dy.abs() < threshold {
        return None;
    }
    let direction = if dx.abs() > dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i32 = DEFAULT_SWIPE_THRESHOLD;

    #[test]
    fn short_drags_are_ignored() {
        assert_eq!(swipe_direction(0, 0, T), None);
        assert_eq!(swipe_direction(T - 1, T - 1, T), None);
        assert_eq!(swipe_direction(-(T - 1), T - 1, T), None);
    }

    #[test]
    fn one_long_axis_is_enough() {
        assert_eq!(swipe_direction(T, 0, T), Some(Direction::Right));
        assert_eq!(swipe_direction(0, T, T), Some(Direction::Down));
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(swipe_direction(100, 40, T), Some(Direction::Right));
        assert_eq!(swipe_direction(-100, 40, T), Some(Direction::Left));
        assert_eq!(swipe_direction(40, 100, T), Some(Direction::Down));
        assert_eq!(swipe_direction(40, -100, T), Some(Direction::Up));
    }

    #[test]
    fn exact_diagonals_resolve_vertically() {
        assert_eq!(swipe_direction(50, 50, T), Some(Direction::Down));
        assert_eq!(swipe_direction(50, -50, T), Some(Direction::Up));
    }
}
