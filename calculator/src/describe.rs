use models::EnhancementKind;

use crate::{ADD_ATTACK_HEX_NUMERATOR, CostError, base_tariff};

pub fn title(kind: EnhancementKind) -> &'static str {
    kind.title()
}

/// Price text shown next to a kind's title.
///
/// Every kind but add attack hex has a tariff; a kind missing from the table
/// is reported as [`CostError::UnknownKind`], the same way pricing it would be.
pub fn description(kind: EnhancementKind) -> Result<String, CostError> {
    if kind == EnhancementKind::AddAttackHex {
        return Ok(format!("{ADD_ATTACK_HEX_NUMERATOR} / current target hexes"));
    }
    let tariff = base_tariff(kind).ok_or(CostError::UnknownKind(kind))?;
    Ok(format!("Base cost {tariff}"))
}
