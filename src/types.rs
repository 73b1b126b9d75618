/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Product colors accepted by the API and stored as lowercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Color {
    White,
    Blue,
    Green,
    Red,
}

/// Product sizes accepted by the API and stored as lowercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_use_lowercase_names() {
        assert_eq!(serde_json::to_value(Color::Green).unwrap(), "green");
        assert_eq!(serde_json::from_str::<Color>("\"white\"").unwrap(), Color::White);
        assert!(serde_json::from_str::<Color>("\"purple\"").is_err());
        assert!(serde_json::from_str::<Color>("\"Blue\"").is_err());
    }

    #[test]
    fn sizes_use_lowercase_names() {
        assert_eq!(serde_json::to_value(Size::Medium).unwrap(), "medium");
        assert!(serde_json::from_str::<Size>("\"huge\"").is_err());
    }
}
