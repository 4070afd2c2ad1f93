use serde::{Deserialize, Serialize};

/// An ability from the wiki
///
/// Abilities are static reference data: never user-editable, never
/// persisted, recreated identically on every load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    pub category: AbilityCategory,
}

/// Where the ability comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityCategory {
    /// Granted by a piece of equipment
    Equipment,
    /// Granted by a temple blessing
    Temple,
}

impl std::fmt::Display for AbilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbilityCategory::Equipment => write!(f, "equipment"),
            AbilityCategory::Temple => write!(f, "temple"),
        }
    }
}

const BUILTIN: &[(&str, &str, AbilityCategory)] = &[
    // Rage
    ("Add Rage On Heal", "Add rage whenever you heal.", AbilityCategory::Equipment),
    ("Add Rage On Crit", "Adds a small amount of rage each time you land a critical hit", AbilityCategory::Equipment),
    ("Add Rage On Hit 5", "Adds rage every 5 hits", AbilityCategory::Equipment),
    ("Add Rage on Enemy Death", "Gains rage when an enemy dies - great for dealing with big fights", AbilityCategory::Equipment),
    // Shield
    ("Gain Shield On Enemy Death", "Gains shield when an enemy dies", AbilityCategory::Equipment),
    ("Gain Shield On Hit 5", "Gains shield every 5 hits", AbilityCategory::Equipment),
    ("Gain Shield On Rage", "Gains shield when using rage abilities", AbilityCategory::Equipment),
    ("Gain Shield On Turn 4", "Gains shield on turn 4 of combat", AbilityCategory::Equipment),
    // Healing
    ("Heal On Target Death", "Heals when a target dies", AbilityCategory::Equipment),
    ("Heal Every Two Hits", "Heals every two hits landed", AbilityCategory::Equipment),
    ("Critical Recovery", "Heal for 3% of Max HP whenever you land a critical hit.", AbilityCategory::Equipment),
    ("Heal on Bolt", "Heal a small amount whenever a lightning bolt fires.", AbilityCategory::Equipment),
    ("Second Wind", "Heal for 10% of Max HP at the start of each of your next 3 turns the first time you dip below 30% HP.", AbilityCategory::Equipment),
    // Lightning
    ("Lightning Bolt", "Zap your target with a lightning bolt at the start of your turn.", AbilityCategory::Temple),
    ("Lightning On Attack", "When you attack, zap your target with a lightning bolt.", AbilityCategory::Equipment),
    ("Lightning On Crit", "When you make a critical attack, zap your target with a lightning bolt.", AbilityCategory::Equipment),
    ("Lightning on Target Death", "Triggers lightning damage when a target dies", AbilityCategory::Equipment),
    // Magic knife
    ("Magic Knife", "Throw a magic knife at the start of your turn.", AbilityCategory::Temple),
    ("Magic Knife on Crit", "Throw a magic knife whenever you make a critical attack.", AbilityCategory::Equipment),
    ("Magic Knife On Rage", "On Rage activation, throw a magic knife.", AbilityCategory::Equipment),
    ("Magic Knife On Hit 3", "Throws magic knife every 3 hits", AbilityCategory::Equipment),
    ("Fire Knife On Attack", "Throws a fire knife when attacking", AbilityCategory::Equipment),
    // Combat
    ("Boost Attack On High HP", "Boosts attack when HP is 100%.", AbilityCategory::Equipment),
    ("Strike Twice Every Other", "Every other turn, attack twice with your main weapon.", AbilityCategory::Equipment),
    ("Dodge if Low", "Increases dodge chance by 20% when HP is below 30%.", AbilityCategory::Equipment),
    // Temple blessings
    ("Blessing of Strength", "Increases attack power for the duration of the mission", AbilityCategory::Temple),
    ("Blessing of Protection", "Increases defense and reduces incoming damage", AbilityCategory::Temple),
    ("Blessing of Speed", "Increases movement and attack speed", AbilityCategory::Temple),
    ("Blessing of Fortune", "Increases critical hit chance and loot drops", AbilityCategory::Temple),
];

/// The full ability table from the wiki
pub fn builtin_abilities() -> Vec<Ability> {
    BUILTIN
        .iter()
        .map(|(name, description, category)| Ability {
            name: (*name).to_string(),
            description: (*description).to_string(),
            category: *category,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_stable() {
        let first = builtin_abilities();
        let second = builtin_abilities();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].name, second[0].name);
    }

    #[test]
    fn test_builtin_table_has_both_categories() {
        let abilities = builtin_abilities();
        assert!(abilities
            .iter()
            .any(|a| a.category == AbilityCategory::Equipment));
        assert!(abilities.iter().any(|a| a.category == AbilityCategory::Temple));
    }
}
