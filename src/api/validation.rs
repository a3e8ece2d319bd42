use crate::core::hero::HeroTiming;
use crate::error::{ShowroomError, ShowroomResult};

use super::ShowroomEngineConfig;

pub(super) fn validate_hero_timing(timing: HeroTiming) -> ShowroomResult<()> {
    if !timing.advance_interval_s.is_finite() || timing.advance_interval_s <= 0.0 {
        return Err(ShowroomError::InvalidData(
            "hero advance interval must be positive".to_owned(),
        ));
    }
    if !timing.resume_delay_s.is_finite() || timing.resume_delay_s < 0.0 {
        return Err(ShowroomError::InvalidData(
            "hero resume delay must be non-negative".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_config(config: &ShowroomEngineConfig) -> ShowroomResult<()> {
    if !config.viewport.is_valid() {
        return Err(ShowroomError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    if !config.swipe_threshold_px.is_finite() || config.swipe_threshold_px <= 0.0 {
        return Err(ShowroomError::InvalidData(
            "swipe threshold must be positive".to_owned(),
        ));
    }
    if !config.resize_quiet_period_s.is_finite() || config.resize_quiet_period_s <= 0.0 {
        return Err(ShowroomError::InvalidData(
            "resize quiet period must be positive".to_owned(),
        ));
    }
    validate_hero_timing(config.hero_timing)
}
