use heck::ToKebabCase;
use serde::Deserialize;

/// A purchasable upgrade for an ability card.
///
/// Variant order is the order in which kinds are listed to the user.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnhancementKind {
    Move,
    Jump,
    Attack,
    Range,
    AddTarget,
    AddAttackHex,
    Heal,
    Shield,
    Retaliate,
    Strengthen,
    Muddle,
    Disarm,
    Pierce,
    Poison,
    Wound,
    Push,
    Pull,
    Immobilize,
    Curse,
    Bless,
    SpecificElement,
    AnyElement,
    SummonMove,
    SummonAttack,
    SummonRange,
    SummonHp,
}

impl EnhancementKind {
    pub const ALL: [EnhancementKind; 26] = [
        EnhancementKind::Move,
        EnhancementKind::Jump,
        EnhancementKind::Attack,
        EnhancementKind::Range,
        EnhancementKind::AddTarget,
        EnhancementKind::AddAttackHex,
        EnhancementKind::Heal,
        EnhancementKind::Shield,
        EnhancementKind::Retaliate,
        EnhancementKind::Strengthen,
        EnhancementKind::Muddle,
        EnhancementKind::Disarm,
        EnhancementKind::Pierce,
        EnhancementKind::Poison,
        EnhancementKind::Wound,
        EnhancementKind::Push,
        EnhancementKind::Pull,
        EnhancementKind::Immobilize,
        EnhancementKind::Curse,
        EnhancementKind::Bless,
        EnhancementKind::SpecificElement,
        EnhancementKind::AnyElement,
        EnhancementKind::SummonMove,
        EnhancementKind::SummonAttack,
        EnhancementKind::SummonRange,
        EnhancementKind::SummonHp,
    ];

    pub fn all() -> impl Iterator<Item = EnhancementKind> {
        Self::ALL.into_iter()
    }

    /// Kebab-case identifier, e.g. `add-attack-hex`.
    pub fn slug(&self) -> String {
        format!("{self:?}").to_kebab_case()
    }

    pub fn title(&self) -> &'static str {
        match self {
            EnhancementKind::Move => "+1 Move",
            EnhancementKind::Jump => "+ Jump",
            EnhancementKind::Attack => "+1 Attack",
            EnhancementKind::Range => "+1 Range",
            EnhancementKind::AddTarget => "+1 Target",
            EnhancementKind::AddAttackHex => "+1 Attack Hex",
            EnhancementKind::Heal => "+ Heal",
            EnhancementKind::Shield => "+ Shield",
            EnhancementKind::Retaliate => "+ Retaliate",
            EnhancementKind::Strengthen => "+ Strengthen",
            EnhancementKind::Muddle => "+ Muddle",
            EnhancementKind::Disarm => "+ Disarm",
            EnhancementKind::Pierce => "+ Pierce",
            EnhancementKind::Poison => "+ Poison",
            EnhancementKind::Wound => "+ Wound",
            EnhancementKind::Push => "+ Push",
            EnhancementKind::Pull => "+ Pull",
            EnhancementKind::Immobilize => "+ Immobilize",
            EnhancementKind::Curse => "+ Curse",
            EnhancementKind::Bless => "+ Bless",
            EnhancementKind::SpecificElement => "+ Specific Element",
            EnhancementKind::AnyElement => "+ Any Element",
            EnhancementKind::SummonMove => "+1 Summons Move",
            EnhancementKind::SummonAttack => "+1 Summons Attack",
            EnhancementKind::SummonRange => "+1 Summons Range",
            EnhancementKind::SummonHp => "+1 Summons HP",
        }
    }
}

impl TryFrom<&str> for EnhancementKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let wanted = value.trim().to_kebab_case();
        match EnhancementKind::all().find(|kind| kind.slug() == wanted) {
            Some(kind) => Ok(kind),
            None => anyhow::bail!("invalid enhancement {value:?}"),
        }
    }
}

impl std::str::FromStr for EnhancementKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnhancementKind::try_from(s)
    }
}

impl std::fmt::Display for EnhancementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
