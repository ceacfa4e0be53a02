/// Rounds `value` to `decimals` places, half away from zero.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Moves `current` toward `target` by at most `max_step`.
///
/// Returns `target` exactly once it is within reach, so repeated calls settle
/// on the target without overshoot or floating-point chatter.
#[inline]
pub fn rate_limit(current: f64, target: f64, max_step: f64) -> f64 {
    let max_step = max_step.max(0.0);
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(delta)
    }
}

/// Clamps `value` into `[-limit, limit]`.
#[inline]
pub fn clamp_symmetric(value: f64, limit: f64) -> f64 {
    let limit = limit.abs();
    value.clamp(-limit, limit)
}
