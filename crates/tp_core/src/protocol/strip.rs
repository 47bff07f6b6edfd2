//! Serve target-strip rotation
//!
//! A serve series targets one of three strips (T, body, wide). The protocol
//! forbids three consecutive identical choices; any two in a row is fine.
//! Only the last two prior choices matter, so callers pass the strips chosen
//! so far for the active player's serve series, in serve order.

use crate::models::TargetStrip;

pub const STRIPS: [TargetStrip; 3] = [TargetStrip::T, TargetStrip::Body, TargetStrip::Wide];

/// Whether `proposed` may follow `previous`. Pure; no history is kept here.
pub fn is_strip_allowed(previous: &[TargetStrip], proposed: TargetStrip) -> bool {
    if previous.len() < 2 {
        return true;
    }
    let last = previous[previous.len() - 1];
    let second_last = previous[previous.len() - 2];
    !(last == second_last && last == proposed)
}

/// Strips a wizard may offer next. At most one strip is ever blocked, so the
/// result is never empty.
pub fn allowed_strips(previous: &[TargetStrip]) -> Vec<TargetStrip> {
    STRIPS.iter().copied().filter(|&strip| is_strip_allowed(previous, strip)).collect()
}
