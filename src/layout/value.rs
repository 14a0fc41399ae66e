use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit tag carried by a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    Percent,
    Auto,
    Center,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Auto => "auto",
            Unit::Center => "center",
        }
    }
}

/// A scalar with a unit, e.g. `50px`, `12.5%`, `auto` or `center`.
///
/// The amount only means something for [`Unit::Px`] and [`Unit::Percent`];
/// keyword units ignore it. Values are immutable once built.
///
/// Rendering rounds half away from zero (`f64::round`), so `percent(12.5)`
/// renders as `13%` and `pixels(-0.5)` as `-1px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Value {
    amount: f64,
    unit: Unit,
}

impl Value {
    pub const fn pixels(amount: f64) -> Self {
        Self {
            amount,
            unit: Unit::Px,
        }
    }

    pub const fn percent(amount: f64) -> Self {
        Self {
            amount,
            unit: Unit::Percent,
        }
    }

    pub const fn auto() -> Self {
        Self {
            amount: 0.0,
            unit: Unit::Auto,
        }
    }

    pub const fn center() -> Self {
        Self {
            amount: 0.0,
            unit: Unit::Center,
        }
    }

    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn is_center(&self) -> bool {
        self.unit == Unit::Center
    }

    /// Render as a CSS length or keyword.
    #[must_use]
    pub fn render(&self) -> String {
        match self.unit {
            Unit::Px | Unit::Percent => {
                let rounded = if self.amount.is_finite() {
                    self.amount.round()
                } else {
                    0.0
                };
                // `-0` would otherwise leak out of e.g. round(-0.4)
                let rounded = if rounded == 0.0 { 0.0 } else { rounded };
                format!("{:.0}{}", rounded, self.unit.suffix())
            }
            Unit::Auto | Unit::Center => self.unit.suffix().to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Error returned when a configuration string is not a valid [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueError {
    input: String,
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid layout value '{}': expected auto, center, <n>px, <n>% or a bare number",
            self.input
        )
    }
}

impl std::error::Error for ParseValueError {}

impl FromStr for Value {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseValueError {
            input: s.to_string(),
        };
        match trimmed.to_ascii_lowercase().as_str() {
            "auto" => return Ok(Value::auto()),
            "center" => return Ok(Value::center()),
            _ => {}
        }
        let (number, unit) = if let Some(n) = trimmed.strip_suffix('%') {
            (n, Unit::Percent)
        } else if let Some(n) = trimmed.strip_suffix("px") {
            (n, Unit::Px)
        } else {
            (trimmed, Unit::Px)
        };
        let amount: f64 = number.trim().parse().map_err(|_| err())?;
        if !amount.is_finite() {
            return Err(err());
        }
        Ok(Value { amount, unit })
    }
}

impl TryFrom<String> for Value {
    type Error = ParseValueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Value> for String {
    fn from(v: Value) -> Self {
        match v.unit {
            // Keep fractional amounts so a config round-trips losslessly
            Unit::Px => format!("{}px", v.amount),
            Unit::Percent => format!("{}%", v.amount),
            Unit::Auto | Unit::Center => v.unit.suffix().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pixels_and_percent() {
        assert_eq!(Value::pixels(50.0).render(), "50px");
        assert_eq!(Value::percent(50.0).render(), "50%");
        assert_eq!(Value::percent(7.5).render(), "8%");
    }

    #[test]
    fn test_render_rounds_half_away_from_zero() {
        assert_eq!(Value::percent(12.5).render(), "13%");
        assert_eq!(Value::pixels(2.5).render(), "3px");
        assert_eq!(Value::pixels(-0.5).render(), "-1px");
        assert_eq!(Value::pixels(-0.4).render(), "0px");
        assert_eq!(Value::pixels(99.49).render(), "99px");
    }

    #[test]
    fn test_render_keywords_ignore_amount() {
        assert_eq!(Value::auto().render(), "auto");
        assert_eq!(Value::center().render(), "center");
        assert_eq!(Value::auto().to_string(), "auto");
    }

    #[test]
    fn test_negative_and_out_of_range_accepted() {
        assert_eq!(Value::pixels(-20.0).render(), "-20px");
        assert_eq!(Value::percent(250.0).render(), "250%");
    }

    #[test]
    fn test_non_finite_renders_zero() {
        assert_eq!(Value::pixels(f64::NAN).render(), "0px");
        assert_eq!(Value::percent(f64::INFINITY).render(), "0%");
    }

    #[test]
    fn test_parse_values() {
        assert_eq!("50px".parse::<Value>().unwrap(), Value::pixels(50.0));
        assert_eq!("7.5%".parse::<Value>().unwrap(), Value::percent(7.5));
        assert_eq!("120".parse::<Value>().unwrap(), Value::pixels(120.0));
        assert_eq!(" Auto ".parse::<Value>().unwrap(), Value::auto());
        assert_eq!("center".parse::<Value>().unwrap(), Value::center());
        assert!("wide".parse::<Value>().is_err());
        assert!("px".parse::<Value>().is_err());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let v: Value = serde_yaml::from_str("\"85%\"").unwrap();
        assert_eq!(v, Value::percent(85.0));
        let s = serde_json::to_string(&Value::pixels(2.5)).unwrap();
        assert_eq!(s, "\"2.5px\"");
    }
}
