//! Conversion engine - Categories, unit tables, conversion functions
//!
//! Pure functions over immutable static unit tables. Length, weight and
//! time are scale-based (factor relative to a base unit); temperature is
//! affine and pivots through Celsius.
//!
//! # Key Points
//! - Unit names compared case-insensitively
//! - Negative values are allowed; validation policy belongs to the caller
//! - The only error is an unknown unit, which names the offending unit

use thiserror::Error;

/// Conversion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    Length,
    Temperature,
    Weight,
    Time,
}

/// All categories, in menu order
pub const CATEGORIES: [Category; 4] = [
    Category::Length,
    Category::Temperature,
    Category::Weight,
    Category::Time,
];

// Length conversion factors (all to meters as base)
const LENGTH_UNITS: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("kilometer", 1000.0),
    ("centimeter", 0.01),
    ("millimeter", 0.001),
    ("mile", 1609.344),
    ("yard", 0.9144),
    ("foot", 0.3048),
    ("inch", 0.0254),
];

// Weight conversion factors (all to kilograms as base)
const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("kilogram", 1.0),
    ("gram", 0.001),
    ("milligram", 0.000001),
    ("pound", 0.453592),
    ("ounce", 0.0283495),
    ("ton", 1000.0),
];

// Time conversion factors (all to seconds as base)
const TIME_UNITS: &[(&str, f64)] = &[
    ("second", 1.0),
    ("minute", 60.0),
    ("hour", 3600.0),
    ("day", 86400.0),
    ("week", 604800.0),
    ("month", 2592000.0), // 30 days
    ("year", 31536000.0), // 365 days
];

// Temperature has no scale table; the three scales are affine
const TEMPERATURE_UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin"];

impl Category {
    /// Lowercase name, as used in prompts and log lines
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Temperature => "temperature",
            Category::Weight => "weight",
            Category::Time => "time",
        }
    }

    /// Capitalized name, as stored in history records and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
            Category::Time => "Time",
        }
    }

    /// Ordered unit names for this category
    pub fn units(&self) -> Vec<&'static str> {
        match self {
            Category::Temperature => TEMPERATURE_UNITS.to_vec(),
            _ => self.table().iter().map(|(name, _)| *name).collect(),
        }
    }

    /// Result precision in decimal places
    pub fn precision(&self) -> u32 {
        match self {
            Category::Temperature => 4,
            _ => 6,
        }
    }

    /// Scale table for factor-based categories; empty for temperature
    fn table(&self) -> &'static [(&'static str, f64)] {
        match self {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Time => TIME_UNITS,
            Category::Temperature => &[],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "temperature" => Ok(Category::Temperature),
            "weight" => Ok(Category::Weight),
            "time" => Ok(Category::Time),
            _ => anyhow::bail!("Unknown category: {}", s),
        }
    }
}

/// Conversion error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Invalid {category} unit: {unit}")]
    UnknownUnit { category: Category, unit: String },
}

/// Ordered unit names for a category name, empty for an unrecognized one.
///
/// This is a query, not a validated command - unknown categories are not
/// an error.
pub fn available_units(category: &str) -> Vec<&'static str> {
    category
        .parse::<Category>()
        .map(|c| c.units())
        .unwrap_or_default()
}

/// Convert `value` between two units of `category`.
///
/// Pure function of its arguments and the static tables. Fails only when
/// either unit name (compared case-insensitively) is unknown.
pub fn convert(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConvertError> {
    match category {
        Category::Temperature => convert_temperature(value, from_unit, to_unit),
        _ => convert_scaled(category, value, from_unit, to_unit),
    }
}

/// Base-unit scale conversion: to base, then to target
fn convert_scaled(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConvertError> {
    let from_factor = factor(category, from_unit)?;
    let to_factor = factor(category, to_unit)?;

    let base = value * from_factor;
    Ok(round_to(base / to_factor, category.precision()))
}

/// Affine conversion pivoting through Celsius
fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    let celsius = match lookup_scale(from_unit)? {
        "celsius" => value,
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        _ => value - 273.15,
    };

    let result = match lookup_scale(to_unit)? {
        "celsius" => celsius,
        "fahrenheit" => (celsius * 9.0 / 5.0) + 32.0,
        _ => celsius + 273.15,
    };

    Ok(round_to(result, Category::Temperature.precision()))
}

fn factor(category: Category, unit: &str) -> Result<f64, ConvertError> {
    let wanted = unit.to_lowercase();
    category
        .table()
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| ConvertError::UnknownUnit {
            category,
            unit: unit.to_string(),
        })
}

fn lookup_scale(unit: &str) -> Result<&'static str, ConvertError> {
    let wanted = unit.to_lowercase();
    TEMPERATURE_UNITS
        .iter()
        .find(|name| **name == wanted)
        .copied()
        .ok_or_else(|| ConvertError::UnknownUnit {
            category: Category::Temperature,
            unit: unit.to_string(),
        })
}

fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() -> Result<(), ConvertError> {
        assert_eq!(convert(Category::Length, 1.0, "mile", "kilometer")?, 1.609344);
        assert_eq!(convert(Category::Temperature, 0.0, "celsius", "fahrenheit")?, 32.0);
        assert_eq!(convert(Category::Temperature, 100.0, "celsius", "kelvin")?, 373.15);
        assert_eq!(convert(Category::Weight, 1.0, "pound", "kilogram")?, 0.453592);
        assert_eq!(convert(Category::Time, 1.0, "hour", "second")?, 3600.0);
        Ok(())
    }

    #[test]
    fn test_identity() -> Result<(), ConvertError> {
        for category in CATEGORIES {
            for unit in category.units() {
                assert_eq!(convert(category, 12.25, unit, unit)?, 12.25);
            }
        }
        Ok(())
    }

    #[test]
    fn test_round_trip_length() -> Result<(), ConvertError> {
        for unit in Category::Length.units() {
            let there = convert(Category::Length, 100.0, "meter", unit)?;
            let back = convert(Category::Length, there, unit, "meter")?;
            // 6-decimal rounding on the intermediate value
            assert!(
                (back - 100.0).abs() < 1e-2,
                "meter -> {} -> meter drifted: {}",
                unit,
                back
            );
        }
        Ok(())
    }

    #[test]
    fn test_round_trip_temperature() -> Result<(), ConvertError> {
        for unit in Category::Temperature.units() {
            let there = convert(Category::Temperature, 25.0, "celsius", unit)?;
            let back = convert(Category::Temperature, there, unit, "celsius")?;
            assert!((back - 25.0).abs() < 1e-3);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_unit_names_offender() {
        let err = convert(Category::Length, 5.0, "lightyear", "meter").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownUnit {
                category: Category::Length,
                unit: "lightyear".to_string()
            }
        );
        assert!(err.to_string().contains("lightyear"));

        let err = convert(Category::Length, 5.0, "meter", "parsec").unwrap_err();
        assert!(err.to_string().contains("parsec"));
    }

    #[test]
    fn test_unknown_temperature_scale_names_offender() {
        let err = convert(Category::Temperature, 20.0, "rankine", "celsius").unwrap_err();
        assert!(err.to_string().contains("rankine"));
    }

    #[test]
    fn test_case_insensitive_units() -> Result<(), ConvertError> {
        assert_eq!(convert(Category::Length, 1.0, "Mile", "KILOMETER")?, 1.609344);
        assert_eq!(convert(Category::Temperature, 0.0, "Celsius", "Fahrenheit")?, 32.0);
        Ok(())
    }

    #[test]
    fn test_negative_values_permitted() -> Result<(), ConvertError> {
        assert_eq!(convert(Category::Length, -2.0, "meter", "centimeter")?, -200.0);
        assert_eq!(convert(Category::Temperature, -40.0, "celsius", "fahrenheit")?, -40.0);
        Ok(())
    }

    #[test]
    fn test_fahrenheit_to_kelvin() -> Result<(), ConvertError> {
        assert_eq!(convert(Category::Temperature, 32.0, "fahrenheit", "kelvin")?, 273.15);
        Ok(())
    }

    #[test]
    fn test_weight_time_spot_checks() -> Result<(), ConvertError> {
        assert_eq!(convert(Category::Weight, 1.0, "ton", "kilogram")?, 1000.0);
        assert_eq!(convert(Category::Weight, 16.0, "ounce", "pound")?, 1.0);
        assert_eq!(convert(Category::Time, 2.0, "week", "day")?, 14.0);
        Ok(())
    }

    #[test]
    fn test_available_units_ordered() {
        let units = available_units("length");
        assert_eq!(units.first(), Some(&"meter"));
        assert_eq!(units.len(), 8);

        assert_eq!(available_units("temperature"), vec!["celsius", "fahrenheit", "kelvin"]);
    }

    #[test]
    fn test_available_units_unknown_category_is_empty() {
        assert!(available_units("volume").is_empty());
        assert!(available_units("").is_empty());
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("TIME".parse::<Category>().unwrap(), Category::Time);
        assert!("volume".parse::<Category>().is_err());
        assert_eq!(format!("{}", Category::Weight), "weight");
        assert_eq!(Category::Weight.display_name(), "Weight");
    }

    #[test]
    fn test_all_factors_positive() {
        for category in [Category::Length, Category::Weight, Category::Time] {
            for (name, factor) in category.table() {
                assert!(*factor > 0.0, "{} has non-positive factor", name);
            }
        }
    }
}
