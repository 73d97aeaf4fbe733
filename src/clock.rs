/// Which pointer on the dial a rate belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Minute,
    Hour,
}

/// A clock pointer advancing at a constant angular rate from 0° at the epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockHand {
    pub hand: Hand,

    /// Degrees per minute.
    pub rate: f64,
}

impl ClockHand {
    /// 360° per 60 minutes.
    pub fn minute() -> ClockHand {
        ClockHand {
            hand: Hand::Minute,
            rate: 6.0,
        }
    }

    /// 360° per 12 hours.
    pub fn hour() -> ClockHand {
        ClockHand {
            hand: Hand::Hour,
            rate: 0.5,
        }
    }

    /// Angular position after `minutes` elapsed, normalized to `[0, 360)`.
    pub fn angle_at(&self, minutes: f64) -> f64 {
        normalize_degrees(self.rate * minutes)
    }
}

pub fn normalize_degrees(value: f64) -> f64 {
    value.rem_euclid(360.0)
}

/// Minimal angular distance between two positions on the dial, in `[0, 180]`.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = normalize_degrees(a - b);
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Elapsed minutes since the epoch rendered as `HH:MM:SS` time of day.
///
/// Rounds to the nearest second and wraps at 24 hours.
pub fn format_time_of_day(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round() as u64 % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds / 60) % 60,
        total_seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_angles_known_time() {
        // 03:15:00 into the day
        let minutes = 195.0;
        assert!((ClockHand::minute().angle_at(minutes) - 90.0).abs() < 1e-9);
        assert!((ClockHand::hour().angle_at(minutes) - 97.5).abs() < 1e-9);
    }

    #[test]
    fn normalize_wraps_negative() {
        assert!((normalize_degrees(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn separation_is_minimal_and_symmetric() {
        assert!((angular_separation(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn formats_time_of_day() {
        assert_eq!(format_time_of_day(0.0), "00:00:00");
        assert_eq!(format_time_of_day(65.0), "01:05:00");
        assert_eq!(format_time_of_day(30.0 / 5.5), "00:05:27");
    }
}
