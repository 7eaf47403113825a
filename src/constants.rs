pub const WINDOW_WIDTH: i32 = 960;            // Window width
pub const WINDOW_HEIGHT: i32 = 600;           // Window height (viewport + nav row)
pub const FPS: u32 = 60;                      // Frames per second

pub const VIEWPORT_X: i32 = 0;                // Slide viewport origin
pub const VIEWPORT_Y: i32 = 0;
pub const VIEWPORT_WIDTH: i32 = 960;          // Slide viewport size
pub const VIEWPORT_HEIGHT: i32 = 540;

pub const SCROLL_DURATION: f32 = 0.5;         // Strip scroll animation (seconds)

pub const DEFAULT_INTERVAL_MS: u64 = 5000;    // Time between automatic advances

pub const NAV_DOT_RADIUS: f32 = 6.0;          // Nav marker radius
pub const NAV_DOT_SPACING: f32 = 24.0;        // Center-to-center marker spacing
pub const NAV_ROW_Y: f32 = 570.0;             // Vertical center of the marker row

pub const ARROW_SIZE: f32 = 28.0;             // Prev/next control size
pub const ARROW_MARGIN: f32 = 12.0;           // Gap between controls and window edge
