//! Turn free-form catalog measures ("1 1/2 oz", "2 dashes", "to taste")
//! into comparable fluid-ounce weights for the proportion chart.

mod numeric;
mod units;

pub use numeric::{parse_numeric_value, DEFAULT_MAGNITUDE};
pub use units::{find_unit, GARNISH_UNITS, VOLUME_UNITS};

use serde::Serialize;

/// Weight given to an ingredient that has no measure at all
pub const EMPTY_MEASURE_WEIGHT: f64 = 1.0;

/// Which table, if any, resolved the unit of a measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// No measure text
    Empty,
    Volume,
    Garnish,
    /// Text present but no known unit; left out of the chart
    Unrecognized,
}

/// How a measure string was read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureReading {
    pub magnitude: f64,
    pub unit: Option<&'static str>,
    pub kind: UnitKind,
    pub ounces: f64,
}

/// Read a measure into magnitude, unit and ounce weight.
///
/// Empty text weighs [`EMPTY_MEASURE_WEIGHT`]. Otherwise the lower-cased
/// text is searched for a volume unit, then a garnish unit, and the parsed
/// magnitude is scaled by the first match. Text with no known unit weighs 0.
pub fn read_measure(measure: &str) -> MeasureReading {
    let cleaned = measure.trim().to_lowercase();
    if cleaned.is_empty() {
        return MeasureReading {
            magnitude: EMPTY_MEASURE_WEIGHT,
            unit: None,
            kind: UnitKind::Empty,
            ounces: EMPTY_MEASURE_WEIGHT,
        };
    }

    let magnitude = parse_numeric_value(&cleaned);

    let resolved = find_unit(VOLUME_UNITS, &cleaned)
        .map(|unit| (unit, UnitKind::Volume))
        .or_else(|| find_unit(GARNISH_UNITS, &cleaned).map(|unit| (unit, UnitKind::Garnish)));

    match resolved {
        Some(((unit, factor), kind)) => MeasureReading {
            magnitude,
            unit: Some(unit),
            kind,
            ounces: magnitude * factor,
        },
        None => MeasureReading {
            magnitude,
            unit: None,
            kind: UnitKind::Unrecognized,
            ounces: 0.0,
        },
    }
}

/// Normalize a measure to its fluid-ounce weight. See [`read_measure`].
pub fn normalize_measure(measure: &str) -> f64 {
    read_measure(measure).ounces
}
