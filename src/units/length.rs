use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 길이 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Inches,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
}

impl MetricUnit for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Millimeters,
        LengthUnit::Centimeters,
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::Inches,
        LengthUnit::Feet,
        LengthUnit::Yards,
        LengthUnit::Miles,
        LengthUnit::NauticalMiles,
    ];

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "Millimeters",
            LengthUnit::Centimeters => "Centimeters",
            LengthUnit::Meters => "Meters",
            LengthUnit::Kilometers => "Kilometers",
            LengthUnit::Inches => "Inches",
            LengthUnit::Feet => "Feet",
            LengthUnit::Yards => "Yards",
            LengthUnit::Miles => "Miles",
            LengthUnit::NauticalMiles => "Nautical Miles",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use LengthUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Centimeters, Millimeters) => Multiply(10.0),
            (Centimeters, Meters) => Divide(100.0),
            (Centimeters, Kilometers) => Divide(100000.0),
            (Centimeters, Inches) => Divide(2.54),
            (Centimeters, Feet) => Divide(30.48),
            (Centimeters, Yards) => Divide(91.44),
            (Centimeters, Miles) => Divide(160934.4),
            (Centimeters, NauticalMiles) => Divide(185200.0),
            (Feet, Millimeters) => Multiply(304.8),
            (Feet, Centimeters) => Multiply(30.48),
            (Feet, Meters) => Multiply(0.3048),
            (Feet, Kilometers) => Multiply(0.0003048),
            (Feet, Inches) => Multiply(12.0),
            (Feet, Yards) => Divide(3.0),
            (Feet, Miles) => Divide(5280.0),
            (Feet, NauticalMiles) => Divide(6076.12),
            (Inches, Millimeters) => Multiply(25.4),
            (Inches, Centimeters) => Multiply(2.54),
            (Inches, Meters) => Divide(39.37007874),
            (Inches, Kilometers) => Divide(39370.07874),
            (Inches, Feet) => Divide(12.0),
            (Inches, Yards) => Divide(36.0),
            (Inches, Miles) => Divide(63360.0),
            (Inches, NauticalMiles) => Divide(72913.4),
            (Meters, Millimeters) => Multiply(1000.0),
            (Meters, Centimeters) => Multiply(100.0),
            (Meters, Kilometers) => Divide(1000.0),
            (Meters, Inches) => Multiply(39.37007874),
            (Meters, Feet) => Divide(0.3048),
            (Meters, Yards) => Divide(0.9144),
            (Meters, Miles) => Divide(1609.344),
            (Meters, NauticalMiles) => Divide(1852.0),
            (Kilometers, Millimeters) => Multiply(1000000.0),
            (Kilometers, Centimeters) => Multiply(100000.0),
            (Kilometers, Meters) => Multiply(1000.0),
            (Kilometers, Inches) => Multiply(39370.07874),
            (Kilometers, Feet) => Divide(0.0003048),
            (Kilometers, Yards) => Divide(0.0009144),
            (Kilometers, Miles) => Divide(1.609344),
            (Kilometers, NauticalMiles) => Divide(1.85200),
            (Miles, Millimeters) => Multiply(1609344.0),
            (Miles, Centimeters) => Multiply(160934.4),
            (Miles, Meters) => Multiply(1609.344),
            (Miles, Kilometers) => Multiply(1.609344),
            (Miles, Inches) => Multiply(63360.0),
            (Miles, Feet) => Multiply(5280.0),
            (Miles, Yards) => Multiply(1760.0),
            (Miles, NauticalMiles) => Divide(1.15078),
            (Millimeters, Centimeters) => Divide(10.0),
            (Millimeters, Meters) => Divide(1000.0),
            (Millimeters, Kilometers) => Divide(1000000.0),
            (Millimeters, Inches) => Divide(25.4),
            (Millimeters, Feet) => Divide(304.8),
            (Millimeters, Yards) => Divide(914.4),
            (Millimeters, Miles) => Divide(1609344.0),
            (Millimeters, NauticalMiles) => Divide(1852000.0),
            (NauticalMiles, Millimeters) => Multiply(1852000.0),
            (NauticalMiles, Centimeters) => Multiply(185200.0),
            (NauticalMiles, Meters) => Multiply(1852.0),
            (NauticalMiles, Kilometers) => Multiply(1.85200),
            (NauticalMiles, Inches) => Multiply(72913.4),
            (NauticalMiles, Feet) => Multiply(6076.12),
            (NauticalMiles, Yards) => Multiply(2025.37),
            (NauticalMiles, Miles) => Multiply(1.15078),
            (Yards, Millimeters) => Multiply(914.4),
            (Yards, Centimeters) => Multiply(91.44),
            (Yards, Meters) => Multiply(0.9144),
            (Yards, Kilometers) => Multiply(0.0009144),
            (Yards, Inches) => Multiply(36.0),
            (Yards, Feet) => Multiply(3.0),
            (Yards, Miles) => Divide(1760.0),
            (Yards, NauticalMiles) => Divide(2025.37),
            _ => return None,
        };
        Some(rule)
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(
    value: f64,
    from: LengthUnit,
    to: LengthUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
