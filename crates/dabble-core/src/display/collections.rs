//! Display for ranked results and the saved list.

use std::fmt;

use crate::models::{Craft, MatchResult, RankedCrafts};

const NO_RESULTS: &str = "No crafts found matching your criteria. Try adjusting your filters!";
const NO_SAVED: &str =
    "You haven't saved any crafts yet. Start exploring and save your favorites!";

impl fmt::Display for RankedCrafts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{NO_RESULTS}");
        }

        writeln!(f, "Found {} {}", self.total(), plural(self.total(), "craft"))?;
        write_section(f, "Perfect Matches", &self.perfect)?;
        write_section(f, "Partial Matches", &self.partial)?;
        write_section(f, "More Ideas", &self.other)
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    results: &[MatchResult<'_>],
) -> fmt::Result {
    if results.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n## {title}")?;
    writeln!(f)?;
    for result in results {
        write!(f, "{result}")?;
    }
    Ok(())
}

/// Newtype wrapper for displaying the saved crafts list.
///
/// Holds crafts in the order they should be listed, normally catalog order
/// as returned by [`crate::Catalog::saved_crafts`].
pub struct SavedCrafts<'a>(pub Vec<&'a Craft>);

impl SavedCrafts<'_> {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of saved crafts.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SavedCrafts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} saved", self.len(), plural(self.len(), "craft"))?;
        writeln!(f)?;
        if self.is_empty() {
            return writeln!(f, "{NO_SAVED}");
        }
        for craft in &self.0 {
            write!(f, "{}", MatchResult::unscored(craft))?;
        }
        Ok(())
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        matcher::rank,
        models::{Difficulty, FilterState},
    };

    fn craft(id: u64, name: &str, materials: &[&str]) -> Craft {
        Craft {
            id,
            name: name.to_string(),
            time_minutes: 30,
            difficulty: Difficulty::Easy,
            materials: materials.iter().map(|m| m.to_string()).collect(),
            description: String::new(),
            instructions: Vec::new(),
            image: None,
        }
    }

    #[test]
    fn test_empty_results_message() {
        let output = RankedCrafts::default().to_string();
        assert_eq!(output, format!("{NO_RESULTS}\n"));
    }

    #[test]
    fn test_sections_only_for_non_empty_buckets() {
        let crafts = vec![
            craft(1, "Bracelet", &["floss"]),
            craft(2, "Garland", &["yarn", "cardboard"]),
        ];
        let ranked = rank(&crafts, &FilterState::new().with_have(["floss"]));
        let output = ranked.to_string();

        assert!(output.starts_with("Found 2 crafts\n"));
        assert!(output.contains("## Perfect Matches"));
        assert!(output.contains("## Partial Matches"));
        assert!(!output.contains("## More Ideas"));
        assert!(output.contains("Bracelet"));
        assert!(output.contains("Partial Match (Missing 2): yarn, cardboard"));
    }

    #[test]
    fn test_single_result_uses_singular() {
        let crafts = vec![craft(1, "Bracelet", &["floss"])];
        let output = rank(&crafts, &FilterState::new()).to_string();
        assert!(output.starts_with("Found 1 craft\n"));
        assert!(output.contains("## More Ideas"));
    }

    #[test]
    fn test_saved_crafts_display() {
        let a = craft(1, "Bracelet", &[]);
        let b = craft(2, "Garland", &[]);
        let output = SavedCrafts(vec![&a, &b]).to_string();
        assert!(output.starts_with("2 crafts saved\n"));
        assert!(output.contains("**1. Bracelet**"));
        assert!(output.contains("**2. Garland**"));

        let single = SavedCrafts(vec![&a]).to_string();
        assert!(single.starts_with("1 craft saved\n"));
    }

    #[test]
    fn test_empty_saved_crafts_display() {
        let output = SavedCrafts(Vec::new()).to_string();
        assert!(output.starts_with("0 crafts saved\n"));
        assert!(output.contains(NO_SAVED));
    }
}
