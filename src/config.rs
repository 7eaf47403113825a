use clap::ValueEnum;

use crate::constants::DEFAULT_INTERVAL_MS;

/// Animation axis for the slide strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Effect {
    Horizontal,
    Vertical,
}

/// Rotator options. `interval_ms` is validated at the CLI boundary and
/// is always > 0 here.
#[derive(Debug, Clone)]
pub struct RotatorConfig {
    pub autoplay: bool,
    pub autopause: bool,
    pub show_nav: bool,
    pub show_prev_next: bool,
    pub interval_ms: u64,
    pub effect: Effect,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autopause: true,
            show_nav: true,
            show_prev_next: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            effect: Effect::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RotatorConfig::default();
        assert!(config.autoplay);
        assert!(config.autopause);
        assert!(config.show_nav);
        assert!(!config.show_prev_next);
        assert_eq!(config.interval_ms, 5000);
        assert_eq!(config.effect, Effect::Horizontal);
    }
}
