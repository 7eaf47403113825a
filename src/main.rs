use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use rand::seq::SliceRandom;
use raylib::prelude::*;

mod config;
mod constants;
mod nav;
mod rotator;
mod slide;
mod strip;
mod texture_loader;
mod timer;

use crate::config::{Effect, RotatorConfig};
use crate::constants::*;
use crate::nav::{NavAction, NavUi};
use crate::rotator::Rotator;
use crate::slide::Slide;
use crate::strip::Strip;
use crate::texture_loader::{load_slide_texture, scan_image_paths};

#[derive(Parser)]
#[command(name = "rotator", about = "Cycles a directory of images as a banner rotator")]
struct Args {
    /// Directory containing the slide images
    dir: PathBuf,

    /// Milliseconds between automatic advances
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Disable timer-driven advance
    #[arg(long)]
    no_autoplay: bool,

    /// Keep the timer running while the pointer hovers the slides
    #[arg(long)]
    no_autopause: bool,

    /// Do not generate the navigation markers
    #[arg(long)]
    no_nav: bool,

    /// Show previous/next arrow controls
    #[arg(long)]
    prev_next: bool,

    /// Animation axis
    #[arg(long, value_enum, default_value_t = Effect::Horizontal)]
    effect: Effect,

    /// Randomize slide order at startup
    #[arg(long)]
    shuffle: bool,
}

impl Args {
    fn rotator_config(&self) -> RotatorConfig {
        RotatorConfig {
            autoplay: !self.no_autoplay,
            autopause: !self.no_autopause,
            show_nav: !self.no_nav,
            show_prev_next: self.prev_next,
            interval_ms: self.interval,
            effect: self.effect,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.rotator_config();

    let mut image_paths = scan_image_paths(&args.dir)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Banner Rotator")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides: Vec<Slide> = Vec::new();
    for path in &image_paths {
        match load_slide_texture(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping {}: {:#}", path.display(), e),
        }
    }
    // Absent slides disable the rotator rather than failing
    let mut rotator = Rotator::new(config.clone(), slides.len());
    rotator.set_on_advance(Box::new(|index| info!("advanced to slide {}", index)));
    info!(
        "rotator ready with {} slides from {}",
        rotator.slide_count(),
        args.dir.display()
    );

    let nav_ui = NavUi::new(rotator.nav().len(), config.show_nav, config.show_prev_next);
    let mut strip = Strip::new(slides, config.effect);

    let viewport = Rectangle::new(
        VIEWPORT_X as f32,
        VIEWPORT_Y as f32,
        VIEWPORT_WIDTH as f32,
        VIEWPORT_HEIGHT as f32,
    );
    let mut hovering = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let mouse = rl.get_mouse_position();

        // Pointer enter/leave over the slide viewport
        let over = viewport.check_collision_point_rec(mouse);
        if over != hovering {
            hovering = over;
            if hovering {
                rotator.pointer_enter();
            } else {
                rotator.pointer_leave();
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match nav_ui.hit_test(mouse) {
                Some(NavAction::Select(index)) => rotator.select(index),
                Some(NavAction::Prev) => rotator.retreat(),
                Some(NavAction::Next) => rotator.advance(),
                None => {}
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            rotator.advance();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            rotator.retreat();
        }

        rotator.tick(dt);

        // Retarget the strip whenever the authoritative index moved
        if !strip.is_empty() && strip.target_index() != rotator.active_index() {
            strip.scroll_to(rotator.active_index());
        }
        strip.update(dt);

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        if strip.is_empty() {
            d.draw_text("No slides found", 20, 20, 20, Color::GRAY);
        } else {
            {
                let mut sd = d.begin_scissor_mode(
                    VIEWPORT_X,
                    VIEWPORT_Y,
                    VIEWPORT_WIDTH,
                    VIEWPORT_HEIGHT,
                );
                strip.draw(&mut sd);
            }
            nav_ui.draw(&mut d, rotator.nav());
        }
    }

    Ok(())
}
