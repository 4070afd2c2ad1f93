use super::entity::{Item, ItemProperty};
use crate::domain::{DomainError, DomainResult};

/// Validates all Item invariants
pub fn validate_item(item: &Item) -> DomainResult<()> {
    if item.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Item name cannot be empty".to_string(),
        ));
    }
    if item.description.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Item description cannot be empty".to_string(),
        ));
    }
    validate_properties(item)?;
    Ok(())
}

/// Percentage properties are either absent or non-negative
fn validate_properties(item: &Item) -> DomainResult<()> {
    for property in [
        ItemProperty::Crit,
        ItemProperty::Dodge,
        ItemProperty::FireResist,
        ItemProperty::ElecResist,
    ] {
        if let Some(value) = item.property(property) {
            if value < 0.0 {
                return Err(DomainError::InvariantViolation(format!(
                    "Item property {:?} cannot be negative",
                    property
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{ItemType, Rarity};
    use chrono::NaiveDate;

    fn sample() -> Item {
        Item {
            id: 1,
            name: "Soulplate".to_string(),
            item_type: ItemType::Armor,
            rarity: Rarity::Epic,
            description: "Charges a shield when an enemy dies".to_string(),
            image_url: None,
            gold_value: None,
            crit: None,
            dodge: Some(10.0),
            fire_resist: None,
            elec_resist: None,
            source: None,
            date_added: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            submitted_by: None,
        }
    }

    #[test]
    fn test_valid_item() {
        assert!(validate_item(&sample()).is_ok());
    }

    #[test]
    fn test_empty_description_fails() {
        let mut item = sample();
        item.description = String::new();
        assert!(validate_item(&item).is_err());
    }

    #[test]
    fn test_negative_property_fails() {
        let mut item = sample();
        item.crit = Some(-1.0);
        assert!(validate_item(&item).is_err());
    }
}
