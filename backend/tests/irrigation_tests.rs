//! Irrigation calculation tests
//!
//! Covers the watering math end to end:
//! - the concrete reference case (24 × 0.1mm, Kc 1.2, 10cm pot → 23ml)
//! - monotonicity in summed evapotranspiration and crop coefficient
//! - plant defaulting for unknown identifiers

use proptest::prelude::*;
use riego_shared::{estimate_watering, plant_or_default, POT_DIAMETER_CM};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// The worked example: 24 equal hourly samples of 0.1mm.
    #[test]
    fn test_reference_calculation() {
        let et0 = vec![0.1; 24];
        let estimate = estimate_watering(&et0, 1.2, 10.0);

        assert!((estimate.total_et0_mm - 2.4).abs() < 1e-9);
        assert!((estimate.etc_mm - 2.88).abs() < 1e-9);
        assert!((estimate.surface_m2 - 0.007854).abs() < 1e-6);
        assert!((estimate.required_litres - 0.02262).abs() < 1e-5);
        assert_eq!(estimate.required_ml, 23);
    }

    /// An unknown plant id must resolve to the default profile's
    /// coefficient, not an error.
    #[test]
    fn test_unknown_plant_uses_default_coefficient() {
        let cactus = plant_or_default("cactus");
        let menta = plant_or_default("menta");
        assert_eq!(cactus.coefficient, menta.coefficient);

        let et0 = vec![0.1; 24];
        let with_cactus = estimate_watering(&et0, cactus.coefficient, POT_DIAMETER_CM);
        let with_menta = estimate_watering(&et0, menta.coefficient, POT_DIAMETER_CM);
        assert_eq!(with_cactus.required_ml, with_menta.required_ml);
        assert_eq!(with_cactus.required_ml, 23);
    }

    /// A drought-resistant plant needs less water than a thirsty one
    /// under the same forecast.
    #[test]
    fn test_romero_needs_less_than_menta() {
        let et0 = vec![0.2; 24];
        let menta = estimate_watering(&et0, plant_or_default("menta").coefficient, 10.0);
        let romero = estimate_watering(&et0, plant_or_default("romero").coefficient, 10.0);
        assert!(romero.required_ml < menta.required_ml);
    }

    /// Doubling the pot diameter quadruples the surface area and the
    /// water volume with it.
    #[test]
    fn test_volume_scales_with_surface_area() {
        let et0 = vec![0.5; 24];
        let small = estimate_watering(&et0, 1.0, 10.0);
        let large = estimate_watering(&et0, 1.0, 20.0);
        assert!((large.surface_m2 - 4.0 * small.surface_m2).abs() < 1e-12);
        assert!((large.required_litres - 4.0 * small.required_litres).abs() < 1e-9);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for plausible hourly ET₀ samples (mm per hour)
    fn et0_series_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.0..1.5f64, 24)
    }

    /// Strategy for crop coefficients
    fn coefficient_strategy() -> impl Strategy<Value = f64> {
        0.1..2.0f64
    }

    /// Strategy for pot diameters in centimeters
    fn diameter_strategy() -> impl Strategy<Value = f64> {
        2.0..60.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Required volume is never negative for positive inputs.
        #[test]
        fn prop_volume_non_negative(
            et0 in et0_series_strategy(),
            kc in coefficient_strategy(),
            diameter in diameter_strategy()
        ) {
            let estimate = estimate_watering(&et0, kc, diameter);
            prop_assert!(estimate.required_ml >= 0);
            prop_assert!(estimate.required_litres >= 0.0);
            prop_assert!(estimate.total_et0_mm >= 0.0);
        }

        /// More evapotranspiration never means less water.
        #[test]
        fn prop_monotone_in_et0(
            et0 in et0_series_strategy(),
            extra in 0.0..1.0f64,
            kc in coefficient_strategy(),
            diameter in diameter_strategy()
        ) {
            let base = estimate_watering(&et0, kc, diameter);

            let mut wetter = et0.clone();
            wetter[0] += extra;
            let more = estimate_watering(&wetter, kc, diameter);

            prop_assert!(more.required_ml >= base.required_ml);
            prop_assert!(more.total_et0_mm >= base.total_et0_mm);
        }

        /// A larger crop coefficient never means less water.
        #[test]
        fn prop_monotone_in_coefficient(
            et0 in et0_series_strategy(),
            kc in coefficient_strategy(),
            bump in 0.0..1.0f64,
            diameter in diameter_strategy()
        ) {
            let base = estimate_watering(&et0, kc, diameter);
            let thirstier = estimate_watering(&et0, kc + bump, diameter);
            prop_assert!(thirstier.required_ml >= base.required_ml);
        }

        /// The rounded millilitres stay within half a unit of the exact
        /// volume, so rounding really happens only once.
        #[test]
        fn prop_single_rounding_step(
            et0 in et0_series_strategy(),
            kc in coefficient_strategy(),
            diameter in diameter_strategy()
        ) {
            let estimate = estimate_watering(&et0, kc, diameter);
            let exact_ml = estimate.required_litres * 1000.0;
            prop_assert!((estimate.required_ml as f64 - exact_ml).abs() <= 0.5);
        }

        /// Samples beyond the 24-hour window never change the result.
        #[test]
        fn prop_window_is_bounded(
            et0 in et0_series_strategy(),
            tail in prop::collection::vec(0.0..5.0f64, 0..48),
            kc in coefficient_strategy(),
            diameter in diameter_strategy()
        ) {
            let mut extended = et0.clone();
            extended.extend(tail);

            let bounded = estimate_watering(&et0, kc, diameter);
            let with_tail = estimate_watering(&extended, kc, diameter);
            prop_assert_eq!(bounded.required_ml, with_tail.required_ml);
        }
    }
}
