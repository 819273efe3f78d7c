use calculator::{EnhancementKind, EnhancementRequest, Gold, RepetitionCount, base_tariff};
use proptest::prelude::*;
use proptest::sample::select;

fn ordinary_kind() -> impl Strategy<Value = EnhancementKind> {
    select(
        EnhancementKind::all()
            .filter(|k| *k != EnhancementKind::AddAttackHex)
            .collect::<Vec<_>>(),
    )
}

fn any_kind() -> impl Strategy<Value = EnhancementKind> {
    select(EnhancementKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn doubling_is_a_step_function(kind in ordinary_kind(), targets in 2u32..10_000) {
        let tariff = base_tariff(kind).unwrap();
        let cost = EnhancementRequest::new(kind).with_target_count(targets).cost().unwrap();
        prop_assert_eq!(cost, tariff * 2);
    }

    #[test]
    fn add_attack_hex_is_floor_division(targets in 1u32..10_000) {
        let cost = EnhancementRequest::new(EnhancementKind::AddAttackHex)
            .with_target_count(targets)
            .cost()
            .unwrap();
        prop_assert_eq!(cost, Gold(200 / targets));
    }

    #[test]
    fn surcharges_are_additive(
        kind in any_kind(),
        targets in 1u32..50,
        level in 1i32..=9,
        count in 0i32..=3,
    ) {
        let base = EnhancementRequest::new(kind).with_target_count(targets);
        let breakdown = base.with_level(level).with_repetition_count(count).breakdown().unwrap();
        prop_assert_eq!(breakdown.base, base.cost().unwrap());
        prop_assert_eq!(breakdown.level, Gold(25 * (level as u32 - 1)));
        prop_assert_eq!(breakdown.repetition, Gold(75 * count as u32));
        prop_assert_eq!(
            base.with_level(level).with_repetition_count(count).cost(),
            Ok(breakdown.total())
        );
    }

    #[test]
    fn out_of_range_levels_fail(kind in any_kind(), level in prop_oneof![i32::MIN..1, 10..i32::MAX]) {
        prop_assert!(EnhancementRequest::new(kind).with_level(level).cost().is_err());
    }

    #[test]
    fn out_of_range_repetitions_fail(kind in any_kind(), count in prop_oneof![i32::MIN..0, 4..i32::MAX]) {
        prop_assert!(EnhancementRequest::new(kind).with_repetition_count(count).cost().is_err());
    }

    #[test]
    fn repetition_controls_stay_in_range(count in 0i32..=3) {
        let count = RepetitionCount(count);
        prop_assert!(count.increment().is_valid());
        prop_assert!(count.decrement().is_valid());
        prop_assert_eq!(count.increment().decrement(), count);
    }
}
