use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One boss encounter or instance in the compendium
/// This is the root entity of the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boss {
    /// Identifier, unique within the collection
    pub id: u64,

    pub name: String,

    /// Level tier the encounter belongs to
    pub level: LevelBucket,

    pub difficulty: Difficulty,

    pub instance_type: InstanceKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Link to the community post the entry came from
    /// (older datasets call this field "redditLink")
    #[serde(default, alias = "redditLink", skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,

    /// Map modifier: ruined path marker on the map tile
    #[serde(default)]
    pub has_ruined_path: bool,

    /// Map modifier: increased-rewards marker on the map tile
    #[serde(default)]
    pub has_increased: bool,

    pub date_added: NaiveDate,
}

impl Boss {
    /// Create a new Boss with the mandatory fields; optional fields start empty
    pub fn new(
        id: u64,
        name: String,
        level: LevelBucket,
        difficulty: Difficulty,
        instance_type: InstanceKind,
        date_added: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            level,
            difficulty,
            instance_type,
            location: None,
            description: None,
            external_link: None,
            submitted_by: None,
            has_ruined_path: false,
            has_increased: false,
            date_added,
        }
    }

    /// Display label derived from difficulty and instance type
    pub fn kind_label(&self) -> &'static str {
        if self.difficulty == Difficulty::BossRush {
            "Boss Rush"
        } else if self.instance_type == InstanceKind::Boss {
            "Regular Boss"
        } else {
            "Normal Instance"
        }
    }
}

/// Level tier label, e.g. "21-40"
///
/// Tiers are ranked through a fixed lookup table, not by parsing the
/// numbers out of the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelBucket(String);

/// The known tiers in ascending order
const LEVEL_RANKS: [(&str, u8); 10] = [
    ("1-5", 1),
    ("6-20", 2),
    ("21-40", 3),
    ("41-60", 4),
    ("61-80", 5),
    ("81-100", 6),
    ("101-120", 7),
    ("121-140", 8),
    ("141-160", 9),
    ("221-240", 10),
];

impl LevelBucket {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Ordinal rank of the tier
    ///
    /// Unrecognized labels rank 0 and therefore sort before every known
    /// tier in ascending order.
    pub fn rank(&self) -> u8 {
        LEVEL_RANKS
            .iter()
            .find(|(label, _)| *label == self.0)
            .map(|(_, rank)| *rank)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for LevelBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star difficulty, or the boss-rush sentinel
///
/// On the wire this is either a bare number or the string "boss-rush",
/// matching the community dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Stars(u8),
    BossRush,
}

impl Difficulty {
    /// Numeric rank for ordering; boss rush sits above the star scale
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Stars(stars) => *stars,
            Difficulty::BossRush => u8::MAX,
        }
    }

    pub fn stars(&self) -> Option<u8> {
        match self {
            Difficulty::Stars(stars) => Some(*stars),
            Difficulty::BossRush => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Stars(stars) => write!(f, "{}", stars),
            Difficulty::BossRush => write!(f, "boss-rush"),
        }
    }
}

impl Serialize for Difficulty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Difficulty::Stars(stars) => serializer.serialize_u8(*stars),
            Difficulty::BossRush => serializer.serialize_str("boss-rush"),
        }
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(number) => {
                let raw = number
                    .as_u64()
                    .ok_or_else(|| serde::de::Error::custom("difficulty must be a positive integer"))?;
                u8::try_from(raw)
                    .map(Difficulty::Stars)
                    .map_err(|_| serde::de::Error::custom("difficulty out of range"))
            }
            serde_json::Value::String(text) if text == "boss-rush" => Ok(Difficulty::BossRush),
            // Form inputs deliver star ratings as digit strings
            serde_json::Value::String(text) => text
                .parse::<u8>()
                .map(Difficulty::Stars)
                .map_err(|_| serde::de::Error::custom(format!("unknown difficulty '{}'", text))),
            _ => Err(serde::de::Error::custom(
                "difficulty must be a number or \"boss-rush\"",
            )),
        }
    }
}

/// Whether the instance is a plain run or a boss encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceKind {
    Normal,
    Boss,
}

impl std::fmt::Display for InstanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceKind::Normal => write!(f, "normal"),
            InstanceKind::Boss => write!(f, "boss"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bucket_ranks() {
        assert_eq!(LevelBucket::new("1-5").rank(), 1);
        assert_eq!(LevelBucket::new("21-40").rank(), 3);
        assert_eq!(LevelBucket::new("221-240").rank(), 10);
        assert_eq!(LevelBucket::new("999-1000").rank(), 0);
    }

    #[test]
    fn test_difficulty_wire_format() {
        let stars: Difficulty = serde_json::from_str("3").unwrap();
        assert_eq!(stars, Difficulty::Stars(3));

        let rush: Difficulty = serde_json::from_str("\"boss-rush\"").unwrap();
        assert_eq!(rush, Difficulty::BossRush);

        let from_form: Difficulty = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(from_form, Difficulty::Stars(4));

        assert_eq!(serde_json::to_string(&Difficulty::Stars(2)).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&Difficulty::BossRush).unwrap(),
            "\"boss-rush\""
        );
    }

    #[test]
    fn test_kind_label() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let mut boss = Boss::new(
            1,
            "Gravekeeper".to_string(),
            LevelBucket::new("21-40"),
            Difficulty::Stars(3),
            InstanceKind::Boss,
            date,
        );
        assert_eq!(boss.kind_label(), "Regular Boss");

        boss.instance_type = InstanceKind::Normal;
        assert_eq!(boss.kind_label(), "Normal Instance");

        boss.difficulty = Difficulty::BossRush;
        assert_eq!(boss.kind_label(), "Boss Rush");
    }

    #[test]
    fn test_boss_round_trips_camel_case() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let mut boss = Boss::new(
            42,
            "Marsh Witch".to_string(),
            LevelBucket::new("6-20"),
            Difficulty::Stars(2),
            InstanceKind::Normal,
            date,
        );
        boss.has_ruined_path = true;

        let json = serde_json::to_string(&boss).unwrap();
        assert!(json.contains("\"instanceType\""));
        assert!(json.contains("\"hasRuinedPath\":true"));
        assert!(json.contains("\"dateAdded\""));

        let back: Boss = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 42);
        assert_eq!(back.level, LevelBucket::new("6-20"));
    }
}
