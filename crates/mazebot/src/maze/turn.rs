use super::types::{Node, TurnClass};

/// Classify the move `current -> neighbor` relative to the heading that
/// brought the bot from `prev` to `current`.
///
/// Vectors are taken in (column-delta, row-delta) form with the row axis
/// flipped so "up" is positive, compensating for rows growing downward on
/// the grid. The 2-D cross product then gives the turn sense and the dot
/// product separates straight-on from doubling back:
///
/// cross > 0 → Left, cross < 0 → Right,
/// cross = 0 and dot > 0 → Straight, otherwise → Back.
///
/// At the start of a run there is no heading, so every candidate counts as
/// Straight and ranking falls back to declaration order.
///
/// Only axis-aligned moves are classified meaningfully; maze tracks are
/// declared with horizontal and vertical segments.
pub fn classify(prev: Option<Node>, current: Node, neighbor: Node) -> TurnClass {
    let Some(prev) = prev else {
        return TurnClass::Straight;
    };

    let vx = current.col - prev.col;
    let vy = prev.row - current.row;
    let nx = neighbor.col - current.col;
    let ny = current.row - neighbor.row;

    let cross = vx * ny - vy * nx;
    let dot = vx * nx + vy * ny;

    if cross > 0 {
        TurnClass::Left
    } else if cross < 0 {
        TurnClass::Right
    } else if dot > 0 {
        TurnClass::Straight
    } else {
        TurnClass::Back
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn n(row: i32, col: i32) -> Node {
        Node::new(row, col)
    }

    /// Every (heading, move) combination against the expected class.
    #[test]
    fn turn_table_all_headings() {
        // (prev, current, [up, down, left-col, right-col] expectations)
        // Facing east: up is Left, down is Right.
        let cur = n(5, 5);
        let cases = [
            // prev, neighbor, expected
            // heading east (from (5,4))
            (n(5, 4), n(4, 5), TurnClass::Left),
            (n(5, 4), n(6, 5), TurnClass::Right),
            (n(5, 4), n(5, 6), TurnClass::Straight),
            (n(5, 4), n(5, 4), TurnClass::Back),
            // heading west (from (5,6))
            (n(5, 6), n(6, 5), TurnClass::Left),
            (n(5, 6), n(4, 5), TurnClass::Right),
            (n(5, 6), n(5, 4), TurnClass::Straight),
            (n(5, 6), n(5, 6), TurnClass::Back),
            // heading south (from (4,5)): east is Left, west is Right
            (n(4, 5), n(5, 6), TurnClass::Left),
            (n(4, 5), n(5, 4), TurnClass::Right),
            (n(4, 5), n(6, 5), TurnClass::Straight),
            (n(4, 5), n(4, 5), TurnClass::Back),
            // heading north (from (6,5)): west is Left, east is Right
            (n(6, 5), n(5, 4), TurnClass::Left),
            (n(6, 5), n(5, 6), TurnClass::Right),
            (n(6, 5), n(4, 5), TurnClass::Straight),
            (n(6, 5), n(6, 5), TurnClass::Back),
        ];

        for (prev, neighbor, expected) in cases {
            assert_eq!(
                classify(Some(prev), cur, neighbor),
                expected,
                "prev {prev}, neighbor {neighbor}"
            );
        }
    }

    #[test]
    fn no_heading_is_always_straight() {
        let cur = n(2, 2);
        for neighbor in [n(1, 2), n(3, 2), n(2, 1), n(2, 3)] {
            assert_eq!(classify(None, cur, neighbor), TurnClass::Straight);
        }
    }

    #[test]
    fn longer_segments_classify_like_unit_steps() {
        // Segments spanning more than one cell keep the same sense.
        assert_eq!(
            classify(Some(n(1, 1)), n(1, 3), n(1, 5)),
            TurnClass::Straight
        );
        assert_eq!(classify(Some(n(1, 1)), n(1, 3), n(3, 3)), TurnClass::Right);
        assert_eq!(classify(Some(n(3, 3)), n(1, 3), n(1, 1)), TurnClass::Left);
    }
}
