//! List layout selection shared by all list screens.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How list screens render their grouped items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Compact rows with a divider between items.
    List,
    /// Full-width cards, one per row.
    #[default]
    Card,
    /// Two-column card grid.
    Grid,
}

impl LayoutMode {
    /// Stable textual form used for persistence and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Card => "card",
            Self::Grid => "grid",
        }
    }
}

impl Display for LayoutMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "card" => Ok(Self::Card),
            "grid" => Ok(Self::Grid),
            other => Err(format!(
                "unsupported layout mode `{other}`; expected list|card|grid"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutMode;

    #[test]
    fn default_layout_is_card() {
        assert_eq!(LayoutMode::default(), LayoutMode::Card);
    }

    #[test]
    fn parse_accepts_known_modes_case_insensitively() {
        assert_eq!(" Grid ".parse::<LayoutMode>().unwrap(), LayoutMode::Grid);
        assert!("table".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn serde_round_trips_snake_case() {
        let encoded = serde_json::to_string(&LayoutMode::List).unwrap();
        assert_eq!(encoded, "\"list\"");
        let decoded: LayoutMode = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(decoded, LayoutMode::Grid);
    }
}
