//! Daily temperature history models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cold-snap threshold in °C: any daily mean below this raises an alert.
pub const COLD_ALERT_THRESHOLD_C: f64 = 5.0;

/// One day of mean-temperature history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTemperature {
    pub date: NaiveDate,
    pub temp_avg: f64,
}

/// True when any daily mean in the window sits below the threshold.
pub fn has_cold_alert(days: &[DailyTemperature], threshold_c: f64) -> bool {
    days.iter().any(|d| d.temp_avg < threshold_c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, temp: f64) -> DailyTemperature {
        DailyTemperature {
            date: date.parse().unwrap(),
            temp_avg: temp,
        }
    }

    #[test]
    fn test_alert_below_threshold() {
        let days = vec![day("2024-01-10", 8.2), day("2024-01-11", 3.9)];
        assert!(has_cold_alert(&days, COLD_ALERT_THRESHOLD_C));
    }

    #[test]
    fn test_no_alert_at_or_above_threshold() {
        let days = vec![day("2024-01-10", 5.0), day("2024-01-11", 12.4)];
        assert!(!has_cold_alert(&days, COLD_ALERT_THRESHOLD_C));
    }

    #[test]
    fn test_empty_window_has_no_alert() {
        assert!(!has_cold_alert(&[], COLD_ALERT_THRESHOLD_C));
    }
}
