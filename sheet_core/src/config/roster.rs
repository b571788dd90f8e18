//! Sample roster loading

use super::ConfigError;
use crate::character::Character;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for roster files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(rename = "characters")]
    pub characters: Vec<Character>,
}

impl RosterConfig {
    fn validate(self) -> Result<Vec<Character>, ConfigError> {
        for character in &self.characters {
            if character.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "roster character has an empty name".to_string(),
                ));
            }
        }
        Ok(self.characters)
    }
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<Vec<Character>, ConfigError> {
    let config: RosterConfig = super::load_toml(path)?;
    config.validate()
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<Vec<Character>, ConfigError> {
    let config: RosterConfig = super::parse_toml(content)?;
    config.validate()
}

/// Get the bundled sample roster
pub fn default_roster() -> Result<Vec<Character>, ConfigError> {
    parse_roster(include_str!("../../config/roster.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DamageType, DefenseKind, StatType};

    #[test]
    fn test_parse_roster() {
        let toml = r#"
[[characters]]
name = "Eldric"
level = 3
hitPoints = 11
tempHitPoints = 10

[[characters.defenses]]
type = "Piercing"
defenseType = "Immunity"

[[characters.items]]
name = "Longsword +1"
modifier = { affectedObject = "attack", affectedValue = "Strength", value = 1 }
"#;

        let roster = parse_roster(toml).unwrap();
        assert_eq!(roster.len(), 1);
        let eldric = &roster[0];
        assert_eq!(eldric.temp_hit_points, 10);
        assert_eq!(eldric.defenses[0].damage_type, DamageType::Piercing);
        assert_eq!(eldric.defenses[0].kind, DefenseKind::Immunity);
        assert_eq!(
            eldric.items[0].modifier.as_ref().unwrap().affected_value,
            StatType::Strength
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let toml = r#"
[[characters]]
name = " "
hitPoints = 1
"#;
        assert!(matches!(
            parse_roster(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_roster() {
        let roster = default_roster().unwrap();
        let names: Vec<&str> = roster.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Briv", "Elara", "Thorm", "Nyx", "Lira"]);

        let briv = &roster[0];
        assert_eq!(briv.hit_points, 25);
        assert_eq!(briv.classes.len(), 2);
        assert_eq!(briv.defense_table().get(DamageType::Force), Some(DefenseKind::Immunity));
        assert_eq!(briv.stats.unwrap().get(StatType::Strength), 16);

        let nyx = &roster[3];
        assert_eq!(
            nyx.defense_table().get(DamageType::Psychic),
            Some(DefenseKind::Vulnerability)
        );
    }
}
