use raylib::prelude::*;

use crate::constants::*;
use crate::rotator::NavLinks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Select(usize),
    Prev,
    Next,
}

/// Generated marker row and prev/next controls. Layout is computed once
/// at startup; with zero slides nothing is generated and every hit test
/// misses.
pub struct NavUi {
    dots: Vec<Rectangle>,
    prev: Option<Rectangle>,
    next: Option<Rectangle>,
}

impl NavUi {
    pub fn new(slide_count: usize, show_nav: bool, show_prev_next: bool) -> Self {
        let mut dots = Vec::new();
        if show_nav && slide_count > 0 {
            let row_width = NAV_DOT_SPACING * slide_count as f32;
            let left = (WINDOW_WIDTH as f32 - row_width) * 0.5;
            for i in 0..slide_count {
                dots.push(Rectangle::new(
                    left + NAV_DOT_SPACING * i as f32,
                    NAV_ROW_Y - NAV_DOT_SPACING * 0.5,
                    NAV_DOT_SPACING,
                    NAV_DOT_SPACING,
                ));
            }
        }

        let (prev, next) = if show_prev_next && slide_count > 0 {
            let arrow_y = (VIEWPORT_Y as f32 + VIEWPORT_HEIGHT as f32 - ARROW_SIZE) * 0.5;
            (
                Some(Rectangle::new(ARROW_MARGIN, arrow_y, ARROW_SIZE, ARROW_SIZE)),
                Some(Rectangle::new(
                    WINDOW_WIDTH as f32 - ARROW_MARGIN - ARROW_SIZE,
                    arrow_y,
                    ARROW_SIZE,
                    ARROW_SIZE,
                )),
            )
        } else {
            (None, None)
        };

        Self { dots, prev, next }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<NavAction> {
        if let Some(index) = self.dots.iter().position(|dot| contains(dot, point)) {
            return Some(NavAction::Select(index));
        }
        if self.prev.as_ref().is_some_and(|zone| contains(zone, point)) {
            return Some(NavAction::Prev);
        }
        if self.next.as_ref().is_some_and(|zone| contains(zone, point)) {
            return Some(NavAction::Next);
        }
        None
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, nav: &NavLinks) {
        for (i, dot) in self.dots.iter().enumerate() {
            let center = Vector2::new(dot.x + dot.width * 0.5, dot.y + dot.height * 0.5);
            if nav.is_active(i) {
                d.draw_circle_v(center, NAV_DOT_RADIUS, Color::RAYWHITE);
            } else {
                d.draw_circle_lines(center.x as i32, center.y as i32, NAV_DOT_RADIUS, Color::GRAY);
            }
        }

        if let Some(zone) = &self.prev {
            d.draw_triangle(
                Vector2::new(zone.x, zone.y + zone.height * 0.5),
                Vector2::new(zone.x + zone.width, zone.y + zone.height),
                Vector2::new(zone.x + zone.width, zone.y),
                Color::RAYWHITE,
            );
        }
        if let Some(zone) = &self.next {
            d.draw_triangle(
                Vector2::new(zone.x + zone.width, zone.y + zone.height * 0.5),
                Vector2::new(zone.x, zone.y),
                Vector2::new(zone.x, zone.y + zone.height),
                Color::RAYWHITE,
            );
        }
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot_center(nav: &NavUi, index: usize) -> Vector2 {
        let dot = &nav.dots[index];
        Vector2::new(dot.x + dot.width * 0.5, dot.y + dot.height * 0.5)
    }

    #[test]
    fn generates_one_marker_per_slide() {
        let nav = NavUi::new(4, true, false);
        assert_eq!(nav.dots.len(), 4);
        assert!(nav.prev.is_none());
        assert!(nav.next.is_none());
    }

    #[test]
    fn clicking_a_marker_selects_its_slide() {
        let nav = NavUi::new(4, true, false);
        for i in 0..4 {
            assert_eq!(nav.hit_test(dot_center(&nav, i)), Some(NavAction::Select(i)));
        }
    }

    #[test]
    fn misses_outside_all_zones() {
        let nav = NavUi::new(4, true, true);
        assert_eq!(nav.hit_test(Vector2::new(-10.0, -10.0)), None);
        assert_eq!(nav.hit_test(Vector2::new(WINDOW_WIDTH as f32 / 2.0, 100.0)), None);
    }

    #[test]
    fn prev_next_zones_at_viewport_edges() {
        let nav = NavUi::new(2, false, true);
        assert!(nav.dots.is_empty());
        let mid = (VIEWPORT_Y as f32 + VIEWPORT_HEIGHT as f32) * 0.5;
        assert_eq!(
            nav.hit_test(Vector2::new(ARROW_MARGIN + 1.0, mid)),
            Some(NavAction::Prev)
        );
        assert_eq!(
            nav.hit_test(Vector2::new(WINDOW_WIDTH as f32 - ARROW_MARGIN - 1.0, mid)),
            Some(NavAction::Next)
        );
    }

    #[test]
    fn zero_slides_generates_nothing() {
        let nav = NavUi::new(0, true, true);
        assert!(nav.dots.is_empty());
        assert!(nav.prev.is_none());
        assert!(nav.next.is_none());
        assert_eq!(nav.hit_test(Vector2::new(0.0, 0.0)), None);
    }
}
