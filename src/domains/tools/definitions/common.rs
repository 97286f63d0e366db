//! Helpers shared by the tool definitions.

use crate::domains::tools::result::CalculationResult;

/// Running total of weighted criteria.
///
/// Each criterion that applies adds its points and is listed, with its signed
/// contribution, among the result's detail lines.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    total: i32,
    applied: Vec<(&'static str, i32)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` when `applies` holds.
    pub fn add(mut self, applies: bool, label: &'static str, points: i32) -> Self {
        if applies {
            self.total += points;
            self.applied.push((label, points));
        }
        self
    }

    /// Add one of two outcomes, whichever `condition` selects.
    pub fn either(
        self,
        condition: bool,
        when_true: (&'static str, i32),
        when_false: (&'static str, i32),
    ) -> Self {
        let (label, points) = if condition { when_true } else { when_false };
        self.add(true, label, points)
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    /// Number of criteria that applied.
    pub fn count(&self) -> usize {
        self.applied.len()
    }

    /// Append one detail line per applied criterion, or `empty` when none did.
    pub fn itemize(&self, result: CalculationResult, empty: &str) -> CalculationResult {
        if self.applied.is_empty() {
            return result.detail("Elementi presenti", empty);
        }
        self.applied
            .iter()
            .fold(result, |acc, (label, points)| acc.detail(*label, format!("{points:+}")))
    }
}

/// Join labels for a detail line, with a placeholder for an empty list.
pub fn list_or(items: &[&str], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

/// Count how many flags are set.
pub fn count_true(flags: &[bool]) -> u32 {
    flags.iter().map(|&f| u32::from(f)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::result::{Classification, Measure};

    #[test]
    fn test_tally_sums_applied_points() {
        let tally = Tally::new()
            .add(true, "a", 2)
            .add(false, "b", 5)
            .either(false, ("c", 2), ("not c", -1));
        assert_eq!(tally.total(), 1);
        assert_eq!(tally.count(), 2);
    }

    #[test]
    fn test_itemize_lists_signed_points() {
        let base = CalculationResult::new("T", Measure::score("S", 0), Classification::new("C", "X"));
        let text = Tally::new()
            .add(true, "Febbre", 1)
            .add(true, "Ferita", -1)
            .itemize(base.clone(), "nessuno")
            .render();
        assert!(text.contains("- Febbre: +1"));
        assert!(text.contains("- Ferita: -1"));

        let empty = Tally::new().itemize(base, "nessuno").render();
        assert!(empty.contains("- Elementi presenti: nessuno"));
    }

    #[test]
    fn test_list_helpers() {
        assert_eq!(list_or(&[], "-"), "-");
        assert_eq!(list_or(&["a", "b"], "-"), "a, b");
        assert_eq!(count_true(&[true, false, true]), 2);
    }
}
