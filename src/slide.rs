use raylib::prelude::*;

use crate::constants::*;

pub struct Slide {
    texture: Texture2D,
    scale: f32,
}

impl Slide {
    pub fn new(texture: Texture2D) -> Self {
        // Fit inside the viewport cell, never upscale
        let fit_x = VIEWPORT_WIDTH as f32 / texture.width() as f32;
        let fit_y = VIEWPORT_HEIGHT as f32 / texture.height() as f32;
        let scale = fit_x.min(fit_y).min(1.0);
        Self { texture, scale }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, origin: Vector2) {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let scaled_width = tex_width * self.scale;
        let scaled_height = tex_height * self.scale;

        // Centered in the cell
        let dest = Rectangle::new(
            origin.x + (VIEWPORT_WIDTH as f32 - scaled_width) * 0.5,
            origin.y + (VIEWPORT_HEIGHT as f32 - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
}
