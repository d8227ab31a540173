//! Tests for score types.

use super::*;

// ============================================================================
// HardSoftScore Tests
// ============================================================================

mod hard_soft_score {
    use super::*;

    #[test]
    fn test_creation() {
        let score = HardSoftScore::of(-2, -100);
        assert_eq!(score.hard(), -2);
        assert_eq!(score.soft(), -100);
    }

    #[test]
    fn test_feasibility() {
        assert!(HardSoftScore::of(0, -1000).is_feasible());
        assert!(!HardSoftScore::of(-1, 0).is_feasible());
    }

    #[test]
    fn test_comparison() {
        let infeasible = HardSoftScore::of(-1, 0);
        let feasible = HardSoftScore::of(0, -1000);
        assert!(feasible > infeasible);

        let s1 = HardSoftScore::of(0, -100);
        let s2 = HardSoftScore::of(0, -50);
        assert!(s2.is_better_than(&s1));
        assert!(s1.is_worse_than(&s2));
    }

    #[test]
    fn test_arithmetic() {
        let s1 = HardSoftScore::of(-1, -100);
        let s2 = HardSoftScore::of(-1, -50);

        assert_eq!(s1 + s2, HardSoftScore::of(-2, -150));
        assert_eq!(s1 - s2, HardSoftScore::of(0, -50));
        assert_eq!(-s1, HardSoftScore::of(1, 100));
        assert_eq!(s1.abs(), HardSoftScore::of(1, 100));
    }

    #[test]
    fn test_from_tiers_folds_medium_into_soft() {
        let score = HardSoftScore::from_tiers(-3, -50_000, -50);
        assert_eq!(score, HardSoftScore::of(-3, -50_050));
        assert_eq!(
            HardSoftScore::of_level(ScoreLevel::Medium, -7),
            HardSoftScore::of_soft(-7)
        );
        assert_eq!(
            HardSoftScore::from_tiers(0, i64::MIN, -1),
            HardSoftScore::of(0, i64::MIN)
        );
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(
            HardSoftScore::parse("-1hard/0soft").unwrap(),
            HardSoftScore::of(-1, 0)
        );
        assert_eq!(format!("{}", HardSoftScore::of(-1, -100)), "-1hard/-100soft");
        assert!(HardSoftScore::parse("0hard/0medium/0soft").is_err());
        assert!(HardSoftScore::parse("0hard/xsoft").is_err());
    }

    #[test]
    fn test_level_numbers() {
        let score = HardSoftScore::of(-2, -50);
        assert_eq!(score.to_level_numbers(), vec![-2, -50]);
        assert_eq!(HardSoftScore::from_level_numbers(&[-2, -50]), score);
        assert_eq!(HardSoftScore::level_label(1), ScoreLevel::Soft);
    }
}

// ============================================================================
// HardMediumSoftScore Tests
// ============================================================================

mod hard_medium_soft_score {
    use super::*;

    #[test]
    fn test_creation() {
        let score = HardMediumSoftScore::of(-2, -10, -100);
        assert_eq!(score.hard(), -2);
        assert_eq!(score.medium(), -10);
        assert_eq!(score.soft(), -100);
        assert_eq!(score.level(ScoreLevel::Medium), -10);
    }

    #[test]
    fn test_feasibility() {
        assert!(HardMediumSoftScore::of(0, -100, -1000).is_feasible());
        assert!(!HardMediumSoftScore::of(-1, 0, 0).is_feasible());
    }

    #[test]
    fn test_comparison() {
        // Hard dominates
        let s1 = HardMediumSoftScore::of(-1, 0, 0);
        let s2 = HardMediumSoftScore::of(0, -1000, -1000);
        assert!(s2 > s1);

        // Medium dominates soft
        let s3 = HardMediumSoftScore::of(0, -10, 0);
        let s4 = HardMediumSoftScore::of(0, -5, -1000);
        assert!(s4 > s3);

        // Soft comparison when others equal
        let s5 = HardMediumSoftScore::of(0, 0, -100);
        let s6 = HardMediumSoftScore::of(0, 0, -50);
        assert!(s6 > s5);
        assert!(!s5.is_better_than(&s5) && !s5.is_worse_than(&s5));
    }

    #[test]
    fn test_arithmetic() {
        let s1 = HardMediumSoftScore::of(-1, -10, -100);
        let s2 = HardMediumSoftScore::of(-1, -5, -50);

        assert_eq!(s1 + s2, HardMediumSoftScore::of(-2, -15, -150));
        assert_eq!(s1 - s2, HardMediumSoftScore::of(0, -5, -50));
        assert_eq!(-s1, HardMediumSoftScore::of(1, 10, 100));

        let mut acc = HardMediumSoftScore::ZERO;
        acc += HardMediumSoftScore::ONE_HARD;
        acc += HardMediumSoftScore::ONE_SOFT;
        assert_eq!(acc, HardMediumSoftScore::of(1, 0, 1));

        let total: HardMediumSoftScore = vec![s1, s2].into_iter().sum();
        assert_eq!(total, HardMediumSoftScore::of(-2, -15, -150));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let floor = HardMediumSoftScore::of_medium(-i64::MAX);
        assert_eq!(floor + floor, HardMediumSoftScore::of_medium(i64::MIN));
        assert_eq!(
            floor - HardMediumSoftScore::of_medium(i64::MAX),
            HardMediumSoftScore::of_medium(i64::MIN)
        );
        assert_eq!(
            -HardMediumSoftScore::of_medium(i64::MIN),
            HardMediumSoftScore::of_medium(i64::MAX)
        );
        assert_eq!(
            HardMediumSoftScore::of_medium(i64::MIN).abs(),
            HardMediumSoftScore::of_medium(i64::MAX)
        );

        let total: HardMediumSoftScore = vec![floor, floor, floor].into_iter().sum();
        assert_eq!(total, HardMediumSoftScore::of_medium(i64::MIN));
    }

    #[test]
    fn test_of_level() {
        assert_eq!(
            HardMediumSoftScore::of_level(ScoreLevel::Hard, -4),
            HardMediumSoftScore::of_hard(-4)
        );
        assert_eq!(
            HardMediumSoftScore::of_level(ScoreLevel::Medium, -4),
            HardMediumSoftScore::of_medium(-4)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            HardMediumSoftScore::parse("0hard/-10medium/-100soft").unwrap(),
            HardMediumSoftScore::of(0, -10, -100)
        );
        assert_eq!(
            HardMediumSoftScore::parse(" -1hard / 0medium / 5soft ").unwrap(),
            HardMediumSoftScore::of(-1, 0, 5)
        );
        let err = HardMediumSoftScore::parse("0hard/-10soft").unwrap_err();
        assert!(err.message.contains("expected 3 parts"));
    }

    #[test]
    fn test_display_round_trip() {
        let score = HardMediumSoftScore::of(-1, -10, -100);
        assert_eq!(format!("{}", score), "-1hard/-10medium/-100soft");
        assert_eq!(score.to_string_repr(), "-1hard/-10medium/-100soft");
        assert_eq!(
            HardMediumSoftScore::parse(&score.to_string_repr()).unwrap(),
            score
        );
    }

    #[test]
    #[should_panic(expected = "3 levels")]
    fn test_level_label_out_of_range() {
        HardMediumSoftScore::level_label(3);
    }
}
