//! Irrigation calculation
//!
//! Closed-form estimate of the water a potted plant loses to
//! evapotranspiration over the next 24 hours. Reference evapotranspiration
//! ET₀ (mm) is scaled by the crop coefficient Kc to get the crop-specific
//! ETc, then applied over the pot's surface area. One millimetre of ETc
//! equals one litre per square metre.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Hours of forecast consumed per calculation.
pub const FORECAST_HOURS: usize = 24;

/// Pot diameter assumed by the watering endpoint, in centimetres.
pub const POT_DIAMETER_CM: f64 = 10.0;

/// Result of an irrigation estimate, with every intermediate value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IrrigationEstimate {
    /// Summed reference evapotranspiration over the window (mm).
    pub total_et0_mm: f64,
    /// Crop-adjusted evapotranspiration (mm).
    pub etc_mm: f64,
    /// Pot surface area (m²).
    pub surface_m2: f64,
    /// Water volume before rounding (litres).
    pub required_litres: f64,
    /// Final rounded volume (ml). The only place rounding happens.
    pub required_ml: i64,
}

/// Estimate the water volume for one pot.
///
/// Sums the first [`FORECAST_HOURS`] samples of `hourly_et0_mm`, treating
/// non-finite samples as zero. Intermediate values keep full f64
/// precision; rounding happens once, at the millilitre conversion, with
/// half-away-from-zero semantics.
pub fn estimate_watering(
    hourly_et0_mm: &[f64],
    coefficient: f64,
    pot_diameter_cm: f64,
) -> IrrigationEstimate {
    let total_et0_mm: f64 = hourly_et0_mm
        .iter()
        .take(FORECAST_HOURS)
        .map(|v| if v.is_finite() { *v } else { 0.0 })
        .sum();

    let etc_mm = total_et0_mm * coefficient;

    let radius_m = pot_diameter_cm / 2.0 / 100.0;
    let surface_m2 = PI * radius_m * radius_m;

    // ETc in mm is litres per m² by definition.
    let required_litres = etc_mm * surface_m2;
    let required_ml = (required_litres * 1000.0).round() as i64;

    IrrigationEstimate {
        total_et0_mm,
        etc_mm,
        surface_m2,
        required_litres,
        required_ml,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case() {
        // 24 equal samples of 0.1mm with Kc 1.2 in a 10cm pot.
        let et0 = vec![0.1; 24];
        let estimate = estimate_watering(&et0, 1.2, 10.0);

        assert!((estimate.total_et0_mm - 2.4).abs() < 1e-9);
        assert!((estimate.etc_mm - 2.88).abs() < 1e-9);
        assert!((estimate.surface_m2 - 0.007853981633974483).abs() < 1e-12);
        assert!((estimate.required_litres - 0.022619467105846508).abs() < 1e-12);
        assert_eq!(estimate.required_ml, 23);
    }

    #[test]
    fn test_only_first_day_is_summed() {
        // 48 samples: the second day must not contribute.
        let mut et0 = vec![0.1; 24];
        et0.extend(vec![5.0; 24]);
        let estimate = estimate_watering(&et0, 1.2, 10.0);
        assert!((estimate.total_et0_mm - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_samples_count_as_zero() {
        let et0 = vec![0.1, f64::NAN, 0.1, f64::INFINITY, 0.1];
        let estimate = estimate_watering(&et0, 1.0, 10.0);
        assert!((estimate.total_et0_mm - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_short_series_is_accepted() {
        let estimate = estimate_watering(&[1.0, 1.0], 1.0, 10.0);
        assert!((estimate.total_et0_mm - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_et0_needs_no_water() {
        let estimate = estimate_watering(&[0.0; 24], 1.2, 10.0);
        assert_eq!(estimate.required_ml, 0);
        assert_eq!(estimate.required_litres, 0.0);
    }

    #[test]
    fn test_rounding_happens_at_the_millilitre_step() {
        let surface = std::f64::consts::PI * 0.05 * 0.05;

        // Inputs straddling a rounding boundary: 22.4ml down, 22.6ml up.
        let low = estimate_watering(&[0.0224 / surface], 1.0, 10.0);
        assert_eq!(low.required_ml, 22);

        let high = estimate_watering(&[0.0226 / surface], 1.0, 10.0);
        assert_eq!(high.required_ml, 23);
    }
}
