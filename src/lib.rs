#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod cli;
pub mod clock;
pub mod error;
pub mod prelude;

use crate::clock::ClockHand;
use crate::error::ClockError;
use prelude::*;

/// Angle at which the two congruence classes merge into one.
const CLASS_MERGE_TOLERANCE: f64 = 1e-9;

/// An instant at which the two hands sit exactly `separation` degrees apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparationEvent {
    /// Elapsed minutes since the epoch, in `[0, window)`.
    pub minutes: f64,

    /// Minimal angular distance between the hands at that instant, degrees.
    pub separation: f64,
}

/// Finds every instant in a time window at which two constant-rate hands,
/// both at 0° at t = 0, are separated by a target angle.
pub struct AngleSeparationAnalyzer {
    pub rate_a: f64,
    pub rate_b: f64,
    pub target_angle: f64,
    pub window_minutes: f64,
}

impl AngleSeparationAnalyzer {
    pub fn new(
        rate_a: f64,
        rate_b: f64,
        target_angle: f64,
        window_minutes: f64,
    ) -> Result<Self, ClockError> {
        if !rate_a.is_finite() || !rate_b.is_finite() {
            return Err(ClockError::InvalidInput(format!(
                "hand rates must be finite, got {} and {} deg/min",
                rate_a, rate_b
            )));
        }
        if rate_a == rate_b {
            return Err(ClockError::InvalidInput(format!(
                "hands advancing at the same rate ({} deg/min) never reach a fixed separation",
                rate_a
            )));
        }
        if !target_angle.is_finite() || target_angle <= 0.0 || target_angle > 180.0 {
            return Err(ClockError::InvalidInput(format!(
                "target angle must lie in (0, 180] degrees, got {}",
                target_angle
            )));
        }
        if !window_minutes.is_finite() || window_minutes <= 0.0 {
            return Err(ClockError::InvalidInput(format!(
                "window must be a positive number of minutes, got {}",
                window_minutes
            )));
        }
        Ok(AngleSeparationAnalyzer {
            rate_a,
            rate_b,
            target_angle,
            window_minutes,
        })
    }

    /// The standard 12-hour dial: minute and hour hands, 30° apart, over one day.
    pub fn standard_clock() -> Self {
        AngleSeparationAnalyzer {
            rate_a: ClockHand::minute().rate,
            rate_b: ClockHand::hour().rate,
            target_angle: 30.0,
            window_minutes: 1440.0,
        }
    }

    /// Magnitude of the relative angular rate, degrees per minute.
    ///
    /// Solving with the absolute value is sound: negating the relative rate
    /// swaps the two congruence classes (A and 360 − A), and the event set is
    /// their union.
    fn relative_rate(&self) -> f64 {
        (self.rate_a - self.rate_b).abs()
    }

    /// Every event in `[0, window)`, sorted ascending.
    pub fn events(&self) -> Vec<SeparationEvent> {
        let omega = self.relative_rate();

        let mut classes = vec![self.target_angle];
        if (self.target_angle - 180.0).abs() > CLASS_MERGE_TOLERANCE {
            classes.push(360.0 - self.target_angle);
        } else {
            debug!("target is 180 degrees, congruence classes coincide");
        }

        let mut events = Vec::new();
        for class in classes {
            self.collect_class(class, omega, &mut events);
        }
        events.sort_by(|a, b| {
            a.minutes
                .partial_cmp(&b.minutes)
                .unwrap_or(core::cmp::Ordering::Equal)
        });
        debug!(
            "{} events for target {} deg in {} minutes",
            events.len(),
            self.target_angle,
            self.window_minutes
        );
        events
    }

    /// Total number of events in the window.
    pub fn count(&self) -> usize {
        self.events().len()
    }

    /// Solutions of `omega * t = class (mod 360)` with t in `[0, window)`.
    ///
    /// Exact enumeration: t = (class + 360k) / omega for k = 0, 1, 2, ...
    /// until the window boundary. The window is inclusive-start,
    /// exclusive-end; t = 0 never solves since class > 0.
    fn collect_class(&self, class: f64, omega: f64, events: &mut Vec<SeparationEvent>) {
        let mut k = 0u32;
        loop {
            let minutes = (class + 360.0 * f64::from(k)) / omega;
            if minutes >= self.window_minutes {
                break;
            }
            events.push(SeparationEvent {
                minutes,
                separation: self.target_angle,
            });
            k += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_clock_is_valid() {
        let analyzer = AngleSeparationAnalyzer::standard_clock();
        assert!((analyzer.rate_a - 6.0).abs() < 1e-12);
        assert!((analyzer.rate_b - 0.5).abs() < 1e-12);
        assert_eq!(analyzer.count(), 44);
    }

    #[test]
    fn first_event_is_target_over_relative_rate() {
        let analyzer = AngleSeparationAnalyzer::standard_clock();
        let events = analyzer.events();
        let first = events.first().copied();
        assert!(matches!(first, Some(event) if (event.minutes - 30.0 / 5.5).abs() < 1e-12));
    }

    #[test]
    fn epoch_is_never_an_event() {
        let analyzer = AngleSeparationAnalyzer::standard_clock();
        assert!(analyzer.events().iter().all(|event| event.minutes > 0.0));
    }
}
