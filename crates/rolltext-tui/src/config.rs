//! Frame timing derived from the animation settings

use std::time::Duration;

pub use rolltext_core::config::AnimationConfig;

/// Extension trait for AnimationConfig with rendering helpers
pub trait AnimationConfigExt {
    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if transitions actually roll
    fn is_smooth(&self) -> bool;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.fps.min(1000) as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.animate_changes && self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let mut config = AnimationConfig::default();
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));

        config.fps = 0;
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));

        config.fps = 10;
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(100));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = AnimationConfig::default();
        assert!(config.is_smooth());

        config.animate_changes = false;
        assert!(!config.is_smooth());

        config.animate_changes = true;
        config.duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
