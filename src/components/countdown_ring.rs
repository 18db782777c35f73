//! Countdown Ring
//!
//! One-shot SVG progress ring for the move-in countdown: the stroke
//! resets to zero progress, then fills to the computed offset with an
//! eased transition. Re-runs safely every time the rooms page is
//! entered.

use leptos::*;
use std::f64::consts::PI;

/// Total countdown window, days.
pub(crate) const TOTAL_DAYS: i32 = 90;

/// Days-remaining fallback when the label is unparsable.
pub(crate) const DEFAULT_DAYS_REMAINING: i32 = 71;

/// Ring radius in SVG user units.
pub(crate) const RING_RADIUS: f64 = 90.0;

/// Delay before the fill animation starts, so the reset offset has
/// committed to the DOM first.
const FILL_DELAY_MS: u32 = 100;

/// Ring circumference.
pub(crate) fn circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Parse the displayed days-remaining label. Unparsable or zero
/// values fall back to the default, as `parseInt(x) || 71` would.
pub(crate) fn parse_days(text: &str) -> i32 {
    match text.trim().parse::<i32>() {
        Ok(days) if days != 0 => days,
        _ => DEFAULT_DAYS_REMAINING,
    }
}

/// Percentage of the countdown already elapsed.
pub(crate) fn progress_percent(days_remaining: i32) -> f64 {
    let days_passed = TOTAL_DAYS - days_remaining;
    days_passed as f64 / TOTAL_DAYS as f64 * 100.0
}

/// Stroke offset for a days-remaining value: the full circumference
/// is zero progress, a zero offset is a complete ring.
pub(crate) fn ring_offset(days_remaining: i32) -> f64 {
    let circumference = circumference();
    circumference - circumference * progress_percent(days_remaining) / 100.0
}

/// Move-in countdown ring.
#[component]
pub fn CountdownRing(
    /// Displayed days-remaining label, e.g. "71".
    #[prop(into)] days_text: String,
    /// Bumped whenever the fill animation should restart.
    restart: RwSignal<u32>,
) -> impl IntoView {
    let days_remaining = parse_days(&days_text);
    let target_offset = ring_offset(days_remaining);

    let offset = create_rw_signal(circumference());
    let animating = create_rw_signal(false);

    // Reset to zero progress, then start the eased fill once the
    // reset has committed.
    create_effect(move |_| {
        let _ = restart.get();
        animating.set(false);
        offset.set(circumference());
        gloo_timers::callback::Timeout::new(FILL_DELAY_MS, move || {
            animating.set(true);
            offset.set(target_offset);
        })
        .forget();
    });

    view! {
        <div class="countdown">
            <svg class="countdown__ring" viewBox="0 0 220 220">
                <circle class="countdown-progress-track" cx="110" cy="110" r="90" />
                <circle
                    class="countdown-progress-fill"
                    cx="110"
                    cy="110"
                    r="90"
                    stroke-dasharray=format!("{}", circumference())
                    style:stroke-dashoffset=move || format!("{}", offset.get())
                    style:transition=move || {
                        if animating.get() {
                            "stroke-dashoffset 2s ease-out"
                        } else {
                            "none"
                        }
                    }
                />
            </svg>
            <div class="countdown__label">
                <span class="countdown-days">{days_text}</span>
                <span class="countdown__unit">"天"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(left: f64, right: f64) {
        assert!((left - right).abs() < 1e-6, "{} != {}", left, right);
    }

    #[test]
    fn parses_day_labels_with_fallback() {
        assert_eq!(parse_days("71"), 71);
        assert_eq!(parse_days(" 45 "), 45);
        assert_eq!(parse_days("soon"), DEFAULT_DAYS_REMAINING);
        assert_eq!(parse_days(""), DEFAULT_DAYS_REMAINING);
        // parseInt-style: zero is falsy and also falls back.
        assert_eq!(parse_days("0"), DEFAULT_DAYS_REMAINING);
    }

    #[test]
    fn circumference_matches_radius() {
        assert_close(circumference(), 2.0 * PI * 90.0);
        assert!((circumference() - 565.486_677).abs() < 1e-3);
    }

    #[test]
    fn progress_for_seventy_one_days() {
        // 71 of 90 days remaining: 19 passed, about 21.1% elapsed.
        assert_close(progress_percent(71), 19.0 / 90.0 * 100.0);
        assert!((progress_percent(71) - 21.111_111).abs() < 1e-3);
    }

    #[test]
    fn offset_shrinks_as_days_pass() {
        let circumference = circumference();
        assert_close(ring_offset(71), circumference * (1.0 - 19.0 / 90.0));
        assert_close(ring_offset(TOTAL_DAYS), circumference);
        assert_close(ring_offset(0), 0.0);
        assert!(ring_offset(10) < ring_offset(71));
    }
}
