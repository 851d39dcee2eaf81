//! Suitability evaluation tests
//!
//! Covers the season mapping, season/soil matching, warning ordering and
//! the unknown-crop terminal result.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;

use farm_advisory_engine::{CropCatalog, SuitabilityService};
use shared::{Season, SeasonCalendar, SoilType};

fn service() -> SuitabilityService {
    SuitabilityService::new(Arc::new(CropCatalog::builtin()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Season Mapping Tests
// ============================================================================

mod season_mapping {
    use super::*;

    #[test]
    fn every_month_maps_to_exactly_one_season() {
        let calendar = SeasonCalendar::northern();
        let expected = [
            (1, Season::Winter),
            (2, Season::Winter),
            (3, Season::Spring),
            (4, Season::Spring),
            (5, Season::Spring),
            (6, Season::Summer),
            (7, Season::Summer),
            (8, Season::Summer),
            (9, Season::Fall),
            (10, Season::Fall),
            (11, Season::Fall),
            (12, Season::Winter),
        ];
        for (month, season) in expected {
            assert_eq!(calendar.season_of_month(month), season, "month {month}");
        }
    }

    #[test]
    fn assessment_reports_the_evaluation_season() {
        let service = service();
        let assessment = service.evaluate("Wheat", SoilType::Loamy, date(2025, 1, 1));
        assert_eq!(assessment.current_season, Season::Winter);

        let assessment = service.evaluate("Wheat", SoilType::Loamy, date(2024, 7, 1));
        assert_eq!(assessment.current_season, Season::Summer);
    }

    #[test]
    fn southern_calendar_flips_the_verdict() {
        let catalog = Arc::new(CropCatalog::builtin());
        let northern = SuitabilityService::new(Arc::clone(&catalog));
        let southern =
            SuitabilityService::with_calendar(Arc::clone(&catalog), SeasonCalendar::southern());

        // July is Summer in the north, Winter in the south; Wheat wants
        // Fall or Winter.
        let july = date(2024, 7, 1);
        assert!(!northern.evaluate("Wheat", SoilType::Loamy, july).suitable);
        assert!(southern.evaluate("Wheat", SoilType::Loamy, july).suitable);
    }
}

// ============================================================================
// Season and Soil Matching Tests
// ============================================================================

mod matching {
    use super::*;

    #[test]
    fn wheat_in_winter_on_loamy_soil_is_suitable() {
        // Scenario: planted 2024-11-01, evaluated 2025-01-01
        let assessment = service().evaluate("Wheat", SoilType::Loamy, date(2025, 1, 1));
        assert!(assessment.suitable);
        assert!(assessment.warnings.is_empty());
    }

    #[test]
    fn rice_on_sandy_soil_in_summer_fails_on_soil_only() {
        let assessment = service().evaluate("Rice", SoilType::Sandy, date(2024, 7, 1));
        assert!(!assessment.suitable);
        assert_eq!(assessment.warnings.len(), 1);
        assert_eq!(
            assessment.warnings[0],
            "Sandy soil may not be optimal. Preferred: Clay"
        );
    }

    #[test]
    fn season_mismatch_names_crop_season_and_ideal_seasons() {
        // Wheat evaluated in July (Summer); soil is fine
        let assessment = service().evaluate("Wheat", SoilType::Clay, date(2024, 7, 15));
        assert!(!assessment.suitable);
        assert_eq!(assessment.warnings.len(), 1);
        assert_eq!(
            assessment.warnings[0],
            "Wheat is not ideal for Summer. Best seasons: Fall, Winter"
        );
    }

    #[test]
    fn double_mismatch_orders_season_warning_first() {
        // Rice in January on sandy soil: wrong season and wrong soil
        let assessment = service().evaluate("Rice", SoilType::Sandy, date(2025, 1, 10));
        assert!(!assessment.suitable);
        assert_eq!(assessment.warnings.len(), 2);
        assert!(assessment.warnings[0].contains("not ideal for Winter"));
        assert!(assessment.warnings[1].contains("soil may not be optimal"));
    }

    #[test]
    fn suitable_requires_both_season_and_soil() {
        let service = service();
        // Corn: Spring/Summer, Loamy/Sandy
        let may = date(2024, 5, 10);
        assert!(service.evaluate("Corn", SoilType::Sandy, may).suitable);
        assert!(!service.evaluate("Corn", SoilType::Clay, may).suitable);
        assert!(!service.evaluate("Corn", SoilType::Sandy, date(2024, 12, 10)).suitable);
    }
}

// ============================================================================
// Unknown Crop Tests
// ============================================================================

mod unknown_crop {
    use super::*;

    #[test]
    fn unknown_crop_is_unsuitable_with_a_single_generic_warning() {
        let assessment = service().evaluate("Unobtainium", SoilType::Loamy, date(2024, 7, 1));
        assert!(!assessment.suitable);
        assert_eq!(assessment.warnings, vec!["Unknown crop type".to_string()]);
        assert_eq!(assessment.current_season, Season::Summer);
    }

    #[test]
    fn crop_match_is_case_sensitive() {
        let assessment = service().evaluate("wheat", SoilType::Loamy, date(2025, 1, 1));
        assert!(!assessment.suitable);
        assert_eq!(assessment.warnings, vec!["Unknown crop type".to_string()]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    fn soil_strategy() -> impl Strategy<Value = SoilType> {
        prop_oneof![
            Just(SoilType::Loamy),
            Just(SoilType::Clay),
            Just(SoilType::Sandy),
        ]
    }

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (2020i32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn known_crop_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("Wheat"),
            Just("Rice"),
            Just("Corn"),
            Just("Sugarcane"),
            Just("Tea"),
            Just("Tomatoes"),
            Just("Mangoes"),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Known crops never produce more than two warnings, and the
        /// verdict is exactly "no warnings"
        #[test]
        fn known_crop_warning_count_matches_verdict(
            crop in known_crop_strategy(),
            soil in soil_strategy(),
            eval_date in date_strategy()
        ) {
            let assessment = service().evaluate(crop, soil, eval_date);
            prop_assert!(assessment.warnings.len() <= 2);
            prop_assert_eq!(assessment.suitable, assessment.warnings.is_empty());
        }

        /// At most one warning of each kind
        #[test]
        fn warnings_are_never_duplicated(
            crop in known_crop_strategy(),
            soil in soil_strategy(),
            eval_date in date_strategy()
        ) {
            let assessment = service().evaluate(crop, soil, eval_date);
            let season_warnings = assessment
                .warnings
                .iter()
                .filter(|w| w.contains("not ideal for"))
                .count();
            let soil_warnings = assessment
                .warnings
                .iter()
                .filter(|w| w.contains("soil may not be optimal"))
                .count();
            prop_assert!(season_warnings <= 1);
            prop_assert!(soil_warnings <= 1);
        }

        /// Evaluation is deterministic for fixed inputs
        #[test]
        fn evaluation_is_deterministic(
            crop in known_crop_strategy(),
            soil in soil_strategy(),
            eval_date in date_strategy()
        ) {
            let service = service();
            let first = service.evaluate(crop, soil, eval_date);
            let second = service.evaluate(crop, soil, eval_date);
            prop_assert_eq!(first, second);
        }
    }
}
