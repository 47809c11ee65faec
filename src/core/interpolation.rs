//! Pure helpers turning a reveal progress value into bounded draw scales
//! and per-tick increments.

/// Scale increment applied on every tick.
pub const STEP_GAP: f64 = 0.05;

/// Progress divisor used to split a reveal into its two mirror phases.
pub const PHASE_DIVISOR: f64 = 0.51;

/// Number of sub-draws sequenced inside one node reveal (line, then circle).
pub const REVEAL_STAGES: usize = 2;

/// Stage index of the vertical bar.
pub const LINE_STAGE: usize = 0;

/// Stage index of the circle and the connecting segment.
pub const CIRCLE_STAGE: usize = 1;

/// Linear ramp offset by the stage index and floored at zero.
#[must_use]
pub fn clamped_ramp(progress: f64, stage: usize, stages: usize) -> f64 {
    (progress - stage as f64 / stages as f64).max(0.0)
}

/// Portion of stage `stage` covered by `progress`, rescaled to `[0, 1]`.
#[must_use]
pub fn stage_scale(progress: f64, stage: usize, stages: usize) -> f64 {
    let ceiling = 1.0 / stages as f64;
    ceiling.min(clamped_ramp(progress, stage, stages)) * stages as f64
}

/// Integer phase of `progress`; 0 for the first half of a reveal, 1 after.
#[must_use]
pub fn phase(progress: f64) -> f64 {
    (progress / PHASE_DIVISOR).floor()
}

/// Blends the reciprocals of `a` and `b` by the phase of `progress`.
#[must_use]
pub fn mirror_blend(progress: f64, a: f64, b: f64) -> f64 {
    let k = phase(progress);
    (1.0 - k) / a + k / b
}

/// Per-tick scale increment for a state moving in `direction`.
#[must_use]
pub fn step(progress: f64, direction: f64, a: f64, b: f64) -> f64 {
    mirror_blend(progress, a, b) * direction * STEP_GAP
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_stage_finishes_before_circle_stage_starts() {
        assert_relative_eq!(stage_scale(0.25, LINE_STAGE, REVEAL_STAGES), 0.5);
        assert_relative_eq!(stage_scale(0.25, CIRCLE_STAGE, REVEAL_STAGES), 0.0);
        assert_relative_eq!(stage_scale(0.5, LINE_STAGE, REVEAL_STAGES), 1.0);
        assert_relative_eq!(stage_scale(0.75, CIRCLE_STAGE, REVEAL_STAGES), 0.5);
        assert_relative_eq!(stage_scale(1.0, CIRCLE_STAGE, REVEAL_STAGES), 1.0);
    }

    #[test]
    fn negative_progress_draws_nothing() {
        assert_eq!(stage_scale(-0.05, LINE_STAGE, REVEAL_STAGES), 0.0);
        assert_eq!(stage_scale(-0.05, CIRCLE_STAGE, REVEAL_STAGES), 0.0);
    }

    #[test]
    fn phase_switches_just_past_half() {
        assert_eq!(phase(0.5), 0.0);
        assert_eq!(phase(0.51), 1.0);
        assert_eq!(phase(1.0), 1.0);
    }

    #[test]
    fn unit_endpoints_give_constant_step() {
        for progress in [0.0, 0.3, 0.6, 0.99] {
            assert_relative_eq!(step(progress, 1.0, 1.0, 1.0), STEP_GAP);
            assert_relative_eq!(step(progress, -1.0, 1.0, 1.0), -STEP_GAP);
            assert_eq!(step(progress, 0.0, 1.0, 1.0), 0.0);
        }
    }

    #[test]
    fn blend_picks_endpoint_by_phase() {
        assert_relative_eq!(mirror_blend(0.2, 2.0, 4.0), 0.5);
        assert_relative_eq!(mirror_blend(0.8, 2.0, 4.0), 0.25);
    }
}
