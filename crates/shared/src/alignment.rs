use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::StyleError;

/// Placement of an item inside its grid cell (`justify-items` / `align-items`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ItemAlignment {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

impl ItemAlignment {
    pub fn is_stretch(self) -> bool {
        matches!(self, ItemAlignment::Stretch)
    }
}

impl FromStr for ItemAlignment {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "stretch" | "normal" => Ok(ItemAlignment::Stretch),
            "start" | "flex-start" | "self-start" | "left" => Ok(ItemAlignment::Start),
            "center" => Ok(ItemAlignment::Center),
            "end" | "flex-end" | "self-end" | "right" => Ok(ItemAlignment::End),
            "" => Err(StyleError::Empty),
            other => Err(StyleError::InvalidAlignment(other.to_string())),
        }
    }
}

impl fmt::Display for ItemAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemAlignment::Stretch => write!(f, "stretch"),
            ItemAlignment::Start => write!(f, "start"),
            ItemAlignment::Center => write!(f, "center"),
            ItemAlignment::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_keywords() {
        assert_eq!("stretch".parse(), Ok(ItemAlignment::Stretch));
        assert_eq!("normal".parse(), Ok(ItemAlignment::Stretch));
        assert_eq!("flex-start".parse(), Ok(ItemAlignment::Start));
        assert_eq!("center".parse(), Ok(ItemAlignment::Center));
        assert_eq!("right".parse(), Ok(ItemAlignment::End));
    }

    #[test]
    fn test_alignment_rejects_unknown() {
        assert_eq!(
            "baseline".parse::<ItemAlignment>(),
            Err(StyleError::InvalidAlignment("baseline".to_string()))
        );
        assert_eq!("".parse::<ItemAlignment>(), Err(StyleError::Empty));
    }
}
