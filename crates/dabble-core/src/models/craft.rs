//! Craft record and difficulty level.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Ordered difficulty levels (`Easy < Medium < Hard`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Difficulty {
    /// Catalog representation of the difficulty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A single craft project from the catalog.
///
/// Records are read-only once loaded. The serialized field names follow the
/// catalog asset format, where the duration is stored as `time`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Craft {
    /// Unique identifier within the catalog
    pub id: u64,

    /// Display name of the craft
    pub name: String,

    /// Estimated duration in minutes
    #[serde(rename = "time")]
    pub time_minutes: u32,

    /// How demanding the craft is
    pub difficulty: Difficulty,

    /// Materials needed, in the order the author listed them
    #[serde(default)]
    pub materials: Vec<String>,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Step-by-step instructions
    #[serde(default)]
    pub instructions: Vec<String>,

    /// Optional image reference (URL or asset path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Craft {
    /// Returns the craft's materials lowercased, keeping the first occurrence
    /// of each.
    pub fn normalized_materials(&self) -> Vec<String> {
        let mut seen = Vec::with_capacity(self.materials.len());
        for material in &self.materials {
            let material = material.to_lowercase();
            if !seen.contains(&material) {
                seen.push(material);
            }
        }
        seen
    }
}
