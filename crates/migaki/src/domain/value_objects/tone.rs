//! Tone - Rewrite style labels

use serde::{Deserialize, Serialize};

/// Tone of the polished email
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Formal,
    Empathetic,
    Persuasive,
}

impl Tone {
    /// All selectable tones, in UI order
    pub const ALL: [Tone; 3] = [Tone::Formal, Tone::Empathetic, Tone::Persuasive];

    /// Human-readable label used in the rewrite instruction and the UI
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal and Direct",
            Tone::Empathetic => "Empathetic and Warm",
            Tone::Persuasive => "Persuasive (Sales)",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Formal => write!(f, "formal"),
            Tone::Empathetic => write!(f, "empathetic"),
            Tone::Persuasive => write!(f, "persuasive"),
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "empathetic" => Ok(Tone::Empathetic),
            "persuasive" => Ok(Tone::Persuasive),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for tone in Tone::ALL {
            assert_eq!(tone.to_string().parse::<Tone>(), Ok(tone));
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn test_labels_are_distinct() {
        assert_ne!(Tone::Formal.label(), Tone::Empathetic.label());
        assert_ne!(Tone::Empathetic.label(), Tone::Persuasive.label());
    }
}
