//! Display implementations for crafts and match results.

use std::fmt;

use super::duration::Minutes;
use crate::models::{Craft, MatchResult};

impl fmt::Display for Craft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Time: {}", Minutes(self.time_minutes))?;
        writeln!(f, "- Difficulty: {}", self.difficulty)?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        writeln!(f, "\n## Materials")?;
        writeln!(f)?;
        if self.materials.is_empty() {
            writeln!(f, "No materials needed.")?;
        } else {
            for material in &self.materials {
                writeln!(f, "- {material}")?;
            }
        }

        if !self.instructions.is_empty() {
            writeln!(f, "\n## Instructions")?;
            writeln!(f)?;
            for (index, instruction) in self.instructions.iter().enumerate() {
                writeln!(f, "{}. {instruction}", index + 1)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let craft = self.craft;
        write!(
            f,
            "- **{}. {}** ({}, {})",
            craft.id,
            craft.name,
            Minutes(craft.time_minutes),
            craft.difficulty
        )?;
        if self.is_partial_match && !self.is_perfect_match {
            write!(
                f,
                " Partial Match (Missing {}): {}",
                self.missing_materials.len(),
                self.missing_materials.join(", ")
            )?;
        }
        writeln!(f)
    }
}
