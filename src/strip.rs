use raylib::prelude::*;

use crate::config::Effect;
use crate::constants::*;
use crate::slide::Slide;

/// The slide container. Slides sit side by side along the configured
/// axis; the strip scrolls its offset to `-(extent * index)` whenever a
/// new slide becomes active.
pub struct Strip {
    slides: Vec<Slide>,
    effect: Effect,
    offset: f32,
    start_offset: f32,
    target_index: usize,
    animation_timer: f32,
    is_animating: bool,
}

impl Strip {
    pub fn new(slides: Vec<Slide>, effect: Effect) -> Self {
        Self {
            slides,
            effect,
            offset: 0.0,
            start_offset: 0.0,
            target_index: 0,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    fn extent(&self) -> f32 {
        match self.effect {
            Effect::Horizontal => VIEWPORT_WIDTH as f32,
            Effect::Vertical => VIEWPORT_HEIGHT as f32,
        }
    }

    /// Starts scrolling toward the given slide. Retargeting while an
    /// animation is in flight restarts from the current offset.
    pub fn scroll_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        self.start_offset = self.offset;
        self.target_index = index;
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / SCROLL_DURATION).min(1.0);
        let target = -(self.extent() * self.target_index as f32);
        self.offset = raylib::core::math::lerp(self.start_offset, target, t);
        if self.animation_timer >= SCROLL_DURATION {
            self.is_animating = false;
            self.offset = target;
        }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        for (i, slide) in self.slides.iter().enumerate() {
            let origin = match self.effect {
                Effect::Horizontal => Vector2::new(
                    VIEWPORT_X as f32 + self.offset + self.extent() * i as f32,
                    VIEWPORT_Y as f32,
                ),
                Effect::Vertical => Vector2::new(
                    VIEWPORT_X as f32,
                    VIEWPORT_Y as f32 + self.offset + self.extent() * i as f32,
                ),
            };
            slide.draw(d, origin);
        }
    }
}
