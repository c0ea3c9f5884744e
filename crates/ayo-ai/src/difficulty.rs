//! Selector difficulty levels.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How hard the selector tries.
///
/// Parsing is lenient: `"hard"` (any case) selects [`Difficulty::Hard`] and
/// every other name falls back to [`Difficulty::Easy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    /// Uniformly random valid pit.
    #[default]
    Easy,
    /// Greatest immediate gain, lowest pit on ties, random when nothing gains.
    Hard,
}

impl Difficulty {
    /// Returns the lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl From<&str> for Difficulty {
    fn from(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("hard") {
            Difficulty::Hard
        } else {
            Difficulty::Easy
        }
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Difficulty::from(name.as_str())
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.as_str().to_string()
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::from(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from("HARD"), Difficulty::Hard);
    }

    #[test]
    fn unknown_names_fall_back_to_easy() {
        assert_eq!(Difficulty::from("medium"), Difficulty::Easy);
        assert_eq!(Difficulty::from(""), Difficulty::Easy);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn serde_is_lenient() {
        let hard: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        let other: Difficulty = serde_json::from_str("\"nightmare\"").unwrap();
        assert_eq!(hard, Difficulty::Hard);
        assert_eq!(other, Difficulty::Easy);
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }

    #[test]
    fn display() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
