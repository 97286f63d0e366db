//! Calculation results, classification bands and text rendering.
//!
//! Every calculator produces a [`CalculationResult`]: a primary value, the
//! classification it falls into, and the supporting detail lines that show
//! how the value was reached. The result is returned to clients twice, as
//! structured content and as the rendered text block from [`CalculationResult::render`].

use schemars::JsonSchema;
use serde::Serialize;

use super::error::ToolError;

// ============================================================================
// Classification Bands
// ============================================================================

/// Upper cut-off of a classification band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Values `<= x` fall in the band.
    AtMost(f64),
    /// Values `< x` fall in the band.
    Below(f64),
    /// Catch-all for everything above the previous band.
    Unbounded,
}

impl Bound {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Self::AtMost(limit) => value <= limit,
            Self::Below(limit) => value < limit,
            Self::Unbounded => true,
        }
    }
}

/// One row of a classification table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub until: Bound,
    pub label: &'static str,
    pub recommendation: &'static str,
}

impl Band {
    pub const fn at_most(limit: f64, label: &'static str, recommendation: &'static str) -> Self {
        Self {
            until: Bound::AtMost(limit),
            label,
            recommendation,
        }
    }

    pub const fn below(limit: f64, label: &'static str, recommendation: &'static str) -> Self {
        Self {
            until: Bound::Below(limit),
            label,
            recommendation,
        }
    }

    pub const fn otherwise(label: &'static str, recommendation: &'static str) -> Self {
        Self {
            until: Bound::Unbounded,
            label,
            recommendation,
        }
    }
}

/// Find the band for `value` in an ascending table.
///
/// Tables end with [`Band::otherwise`], so a lookup only fails for a
/// malformed table.
pub fn classify(value: f64, bands: &'static [Band]) -> Result<&'static Band, ToolError> {
    bands
        .iter()
        .find(|band| band.until.admits(value))
        .ok_or_else(|| ToolError::internal(format!("no classification band admits {value}")))
}

/// Check that a table is ascending and ends with a catch-all band.
pub fn check_bands(bands: &[Band]) -> Result<(), String> {
    let Some((last, rest)) = bands.split_last() else {
        return Err("empty band table".to_string());
    };
    if last.until != Bound::Unbounded {
        return Err(format!("last band '{}' is not a catch-all", last.label));
    }

    let mut previous = f64::NEG_INFINITY;
    for band in rest {
        let limit = match band.until {
            Bound::AtMost(x) | Bound::Below(x) => x,
            Bound::Unbounded => return Err(format!("band '{}' shadows later bands", band.label)),
        };
        if limit < previous {
            return Err(format!("band '{}' is out of order", band.label));
        }
        previous = limit;
    }
    Ok(())
}

// ============================================================================
// Calculation Result
// ============================================================================

/// The headline number of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Measure {
    pub label: String,
    pub value: f64,
    /// Decimal places used when rendering `value`.
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Maximum of the scale, rendered as `value/max`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<f64>,
}

impl Measure {
    /// An integral score.
    pub fn score(label: impl Into<String>, value: impl Into<f64>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            decimals: 0,
            unit: None,
            scale_max: None,
        }
    }

    /// A measured or derived quantity rounded to `decimals`.
    pub fn quantity(
        label: impl Into<String>,
        value: f64,
        decimals: u8,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            decimals,
            unit: Some(unit.into()),
            scale_max: None,
        }
    }

    pub fn out_of(mut self, max: impl Into<f64>) -> Self {
        self.scale_max = Some(max.into());
        self
    }

    fn render(&self) -> String {
        let mut line = format!(
            "{}: {}",
            self.label,
            format_decimal(self.value, self.decimals)
        );
        if let Some(max) = self.scale_max {
            line.push('/');
            line.push_str(&format_decimal(max, self.decimals));
        }
        if let Some(unit) = &self.unit {
            line.push(' ');
            line.push_str(unit);
        }
        line
    }
}

/// A label from a finite, ordered set plus its recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Classification {
    pub heading: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl Classification {
    pub fn new(heading: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            label: label.into(),
            recommendation: None,
        }
    }

    pub fn from_band(heading: impl Into<String>, band: &Band) -> Self {
        Self::new(heading, band.label).recommending(band.recommendation)
    }

    pub fn recommending(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// A contributing value shown for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

/// Structured output of a calculator.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CalculationResult {
    pub title: String,
    pub primary: Measure,
    pub classification: Classification,
    /// Further independent classifications (e.g. vitamin D next to calcium).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary: Vec<Classification>,
    pub details: Vec<Detail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl CalculationResult {
    pub fn new(title: impl Into<String>, primary: Measure, classification: Classification) -> Self {
        Self {
            title: title.into(),
            primary,
            classification,
            secondary: Vec::new(),
            details: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn secondary(mut self, classification: Classification) -> Self {
        self.secondary.push(classification);
        self
    }

    pub fn detail(mut self, label: impl Into<String>, value: impl ToString) -> Self {
        self.details.push(Detail {
            label: label.into(),
            value: value.to_string(),
        });
        self
    }

    /// Append a detail line only when `condition` holds.
    pub fn detail_if(self, condition: bool, label: impl Into<String>, value: impl ToString) -> Self {
        if condition { self.detail(label, value) } else { self }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn note_if(self, condition: bool, note: impl Into<String>) -> Self {
        if condition { self.note(note) } else { self }
    }

    /// Render the single text block returned to clients.
    pub fn render(&self) -> String {
        let mut lines = vec![
            self.title.clone(),
            "=".repeat(self.title.chars().count()),
            String::new(),
            self.primary.render(),
        ];

        for classification in std::iter::once(&self.classification).chain(&self.secondary) {
            lines.push(format!("{}: {}", classification.heading, classification.label));
            if let Some(rec) = &classification.recommendation {
                lines.push(format!("Raccomandazione: {rec}"));
            }
        }

        if !self.details.is_empty() {
            lines.push(String::new());
            lines.push("Dettaglio:".to_string());
            lines.extend(self.details.iter().map(|d| format!("- {}: {}", d.label, d.value)));
        }

        if !self.notes.is_empty() {
            lines.push(String::new());
            lines.push("Note:".to_string());
            lines.extend(self.notes.iter().map(|n| format!("- {n}")));
        }

        lines.join("\n")
    }
}

/// Format with a fixed number of decimals.
pub fn format_decimal(value: f64, decimals: u8) -> String {
    format!("{:.*}", usize::from(decimals), value)
}

/// Round to `decimals` places on the exact decimal value of `value`, ties to even.
///
/// Float formatting is exact, so `203.35` (stored as `203.3499…`) goes down
/// and a true tie such as `2.5` goes to the even neighbour.
pub fn round_to(value: f64, decimals: u8) -> f64 {
    format_decimal(value, decimals).parse().unwrap_or(value)
}

/// Italian yes/no used in detail lines.
pub fn si_no(value: bool) -> &'static str {
    if value { "Sì" } else { "No" }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    static BANDS: &[Band] = &[
        Band::at_most(2.0, "BASSO", "a"),
        Band::below(5.0, "MEDIO", "b"),
        Band::otherwise("ALTO", "c"),
    ];

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(2.0, BANDS).unwrap().label, "BASSO");
        assert_eq!(classify(2.5, BANDS).unwrap().label, "MEDIO");
        assert_eq!(classify(4.99, BANDS).unwrap().label, "MEDIO");
        assert_eq!(classify(5.0, BANDS).unwrap().label, "ALTO");
        assert_eq!(classify(-10.0, BANDS).unwrap().label, "BASSO");
    }

    #[test]
    fn test_classify_without_catch_all_fails() {
        static PARTIAL: &[Band] = &[Band::at_most(1.0, "X", "")];
        assert!(classify(3.0, PARTIAL).is_err());
        assert!(check_bands(PARTIAL).is_err());
    }

    #[test]
    fn test_check_bands() {
        assert!(check_bands(BANDS).is_ok());
        assert!(check_bands(&[]).is_err());
        assert!(
            check_bands(&[
                Band::at_most(5.0, "A", ""),
                Band::at_most(2.0, "B", ""),
                Band::otherwise("C", ""),
            ])
            .is_err()
        );
    }

    #[test]
    fn test_render_layout() {
        let result = CalculationResult::new(
            "APGAR",
            Measure::score("Punteggio totale", 8).out_of(10),
            Classification::new("Condizione", "NORMALE").recommending("Cure di routine"),
        )
        .detail("Frequenza cardiaca", "2/2")
        .note("Valutare a 1 e 5 minuti");

        let text = result.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "APGAR");
        assert_eq!(lines[1], "=====");
        assert_eq!(lines[3], "Punteggio totale: 8/10");
        assert_eq!(lines[4], "Condizione: NORMALE");
        assert_eq!(lines[5], "Raccomandazione: Cure di routine");
        assert!(text.contains("Dettaglio:\n- Frequenza cardiaca: 2/2"));
        assert!(text.ends_with("Note:\n- Valutare a 1 e 5 minuti"));
    }

    #[test]
    fn test_render_quantity_with_unit() {
        let result = CalculationResult::new(
            "BSA",
            Measure::quantity("Superficie corporea", 0.8, 2, "m²"),
            Classification::new("Formula raccomandata", "DuBois"),
        );
        assert!(result.render().contains("Superficie corporea: 0.80 m²"));
        assert!(!result.render().contains("Dettaglio"));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(66.666, 1), 66.7);
        assert_eq!(round_to(0.775, 0), 1.0);
        assert_eq!(round_to(-1.25, 1), -1.2);
    }

    #[test]
    fn test_round_to_ties_go_to_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(0.5, 0), 0.0);
    }

    #[test]
    fn test_round_to_uses_stored_value() {
        // 203.35 is stored just below the tie; 152.25 is an exact tie.
        assert_eq!(round_to(203.35, 1), 203.3);
        assert_eq!(round_to(152.25, 1), 152.2);
    }

    #[test]
    fn test_structured_serialization_skips_empty_sections() {
        let result = CalculationResult::new(
            "X",
            Measure::score("Punteggio", 1),
            Classification::new("Rischio", "BASSO"),
        );
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("notes").is_none());
        assert!(value.get("secondary").is_none());
        assert_eq!(value["details"], serde_json::json!([]));
        assert_eq!(value["primary"]["value"], 1.0);
    }
}
