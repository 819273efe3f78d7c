mod aux;

use calculator::{
    BASE_TARIFFS, CostError, EnhancementKind, EnhancementRequest, Gold, base_tariff,
};
use rstest::rstest;

#[rstest]
#[case(EnhancementKind::Move, 30)]
#[case(EnhancementKind::Attack, 50)]
#[case(EnhancementKind::Range, 30)]
#[case(EnhancementKind::Shield, 100)]
#[case(EnhancementKind::Push, 30)]
#[case(EnhancementKind::Pull, 30)]
#[case(EnhancementKind::Pierce, 30)]
#[case(EnhancementKind::Retaliate, 100)]
#[case(EnhancementKind::Heal, 30)]
#[case(EnhancementKind::AddTarget, 50)]
#[case(EnhancementKind::Poison, 75)]
#[case(EnhancementKind::Wound, 75)]
#[case(EnhancementKind::Muddle, 50)]
#[case(EnhancementKind::Immobilize, 100)]
#[case(EnhancementKind::Disarm, 150)]
#[case(EnhancementKind::Curse, 75)]
#[case(EnhancementKind::Strengthen, 50)]
#[case(EnhancementKind::Bless, 50)]
#[case(EnhancementKind::Jump, 50)]
#[case(EnhancementKind::SpecificElement, 100)]
#[case(EnhancementKind::AnyElement, 150)]
#[case(EnhancementKind::SummonMove, 100)]
#[case(EnhancementKind::SummonAttack, 100)]
#[case(EnhancementKind::SummonRange, 50)]
#[case(EnhancementKind::SummonHp, 50)]
fn test_default_request_costs_tariff(#[case] kind: EnhancementKind, #[case] tariff: u32) {
    assert_eq!(base_tariff(kind), Some(Gold(tariff)));
    assert_eq!(EnhancementRequest::new(kind).cost(), Ok(Gold(tariff)));
}

#[rstest]
fn test_every_kind_but_hex_has_one_tariff() {
    assert_eq!(BASE_TARIFFS.len(), EnhancementKind::ALL.len() - 1);
    for kind in EnhancementKind::all() {
        let priced = BASE_TARIFFS.contains_key(&kind);
        assert_eq!(priced, kind != EnhancementKind::AddAttackHex, "{kind:?}");
    }
}

#[rstest]
#[case(1, 200)]
#[case(2, 100)]
#[case(3, 66)]
#[case(4, 50)]
#[case(7, 28)]
#[case(200, 1)]
#[case(201, 0)]
fn test_add_attack_hex_divides(#[case] targets: u32, #[case] expected: u32) {
    let request = EnhancementRequest::new(EnhancementKind::AddAttackHex).with_target_count(targets);
    assert_eq!(request.cost(), Ok(Gold(expected)));
}

#[rstest]
fn test_add_attack_hex_rejects_zero_targets() {
    let request = EnhancementRequest::new(EnhancementKind::AddAttackHex).with_target_count(0);
    assert_eq!(
        request.cost(),
        Err(CostError::InvalidTargetCount { targets: 0 })
    );
}

#[rstest]
#[case(EnhancementKind::Attack)]
#[case(EnhancementKind::Poison)]
#[case(EnhancementKind::SummonHp)]
fn test_zero_targets_does_not_double(#[case] kind: EnhancementKind) {
    let single = EnhancementRequest::new(kind).cost();
    let none = EnhancementRequest::new(kind).with_target_count(0).cost();
    assert_eq!(single, none);
}

#[rstest]
#[case(EnhancementKind::Attack, 100)]
#[case(EnhancementKind::Range, 60)]
#[case(EnhancementKind::AddTarget, 100)]
#[case(EnhancementKind::Disarm, 300)]
fn test_multiple_targets_double_once(#[case] kind: EnhancementKind, #[case] doubled: u32) {
    for targets in [2, 3, 10, 100] {
        let request = EnhancementRequest::new(kind).with_target_count(targets);
        assert_eq!(request.cost(), Ok(Gold(doubled)), "{kind:?} x{targets}");
    }
}
