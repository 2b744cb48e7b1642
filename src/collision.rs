/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// AABB overlap test.
///
/// Two rectangles intersect unless one is entirely above, below, left of, or
/// right of the other. Edges that merely touch still count as overlap.
pub fn intersects(a: Rect, b: Rect) -> bool {
    !(a.y + a.height < b.y || a.y > b.y + b.height || a.x + a.width < b.x || a.x > b.x + b.width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(intersects(a, b));
    }

    #[test]
    fn test_contained_rect_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(intersects(outer, inner));
        assert!(intersects(inner, outer));
    }

    #[test]
    fn test_separated_horizontally_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!intersects(a, b));
    }

    #[test]
    fn test_separated_vertically_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 30.0, 10.0, 10.0);
        assert!(!intersects(a, b));
    }

    #[test]
    fn test_edge_touching_counts_as_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(intersects(a, b));

        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(intersects(a, below));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_rect() -> impl Strategy<Value = Rect> {
            (
                -100.0f32..100.0,
                -100.0f32..100.0,
                0.0f32..50.0,
                0.0f32..50.0,
            )
                .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
        }

        proptest! {
            #[test]
            fn test_intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
                prop_assert_eq!(intersects(a, b), intersects(b, a));
            }

            #[test]
            fn test_fully_separated_rects_never_collide(a in arb_rect(), b in arb_rect()) {
                let separated = a.x + a.width < b.x
                    || b.x + b.width < a.x
                    || a.y + a.height < b.y
                    || b.y + b.height < a.y;
                if separated {
                    prop_assert!(!intersects(a, b));
                }
            }
        }
    }
}
