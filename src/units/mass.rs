use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 질량 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    Grams,
    Milligrams,
    Kilograms,
    Tonnes,
    Ounces,
    Pounds,
    Stones,
    Carats,
}

impl MetricUnit for MassUnit {
    const ALL: &'static [Self] = &[
        MassUnit::Grams,
        MassUnit::Milligrams,
        MassUnit::Kilograms,
        MassUnit::Tonnes,
        MassUnit::Ounces,
        MassUnit::Pounds,
        MassUnit::Stones,
        MassUnit::Carats,
    ];

    fn name(self) -> &'static str {
        match self {
            MassUnit::Grams => "Grams",
            MassUnit::Milligrams => "Milligrams",
            MassUnit::Kilograms => "Kilograms",
            MassUnit::Tonnes => "Tonnes",
            MassUnit::Ounces => "Ounces",
            MassUnit::Pounds => "Pounds",
            MassUnit::Stones => "Stones",
            MassUnit::Carats => "Carats",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use MassUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Grams, Milligrams) => Multiply(1000.0),
            (Grams, Kilograms) => Divide(1000.0),
            (Grams, Tonnes) => Multiply(1e-6),
            (Grams, Ounces) => Divide(28.3495231),
            (Grams, Pounds) => Divide(453.59237),
            (Grams, Stones) => Divide(6350.29318),
            (Grams, Carats) => Multiply(5.0),
            (Milligrams, Grams) => Divide(1000.0),
            (Milligrams, Kilograms) => Divide(1e+6),
            (Milligrams, Tonnes) => Divide(1e+9),
            (Milligrams, Ounces) => Divide(28349.5231),
            (Milligrams, Pounds) => Divide(453592.37),
            (Milligrams, Stones) => Divide(6350293.18),
            (Milligrams, Carats) => Divide(200.0),
            (Kilograms, Milligrams) => Multiply(1e+6),
            (Kilograms, Grams) => Multiply(1000.0),
            (Kilograms, Tonnes) => Multiply(0.001),
            (Kilograms, Ounces) => Multiply(35.274),
            (Kilograms, Pounds) => Multiply(2.20462),
            (Kilograms, Stones) => Divide(6.35029),
            (Kilograms, Carats) => Multiply(5000.0),
            (Tonnes, Milligrams) => Multiply(1e+9),
            (Tonnes, Grams) => Multiply(1e+6),
            (Tonnes, Kilograms) => Multiply(1000.0),
            (Tonnes, Ounces) => Divide(0.0000283495231),
            (Tonnes, Pounds) => Multiply(2204.62),
            (Tonnes, Stones) => Multiply(157.473),
            (Tonnes, Carats) => Multiply(5e+6),
            (Ounces, Milligrams) => Multiply(28349.5231),
            (Ounces, Grams) => Multiply(28.3495231),
            (Ounces, Kilograms) => Divide(35.274),
            (Ounces, Tonnes) => Multiply(0.0000283495231),
            (Ounces, Pounds) => Multiply(0.0625),
            (Ounces, Stones) => Divide(224.0),
            (Ounces, Carats) => Divide(0.00705479),
            (Pounds, Milligrams) => Multiply(453592.37),
            (Pounds, Grams) => Multiply(453.59237),
            (Pounds, Kilograms) => Divide(2.20462),
            (Pounds, Tonnes) => Divide(2204.62),
            (Pounds, Ounces) => Multiply(16.0),
            (Pounds, Stones) => Divide(14.0),
            (Pounds, Carats) => Divide(0.000440925),
            (Stones, Milligrams) => Multiply(6350293.18),
            (Stones, Grams) => Multiply(6350.29318),
            (Stones, Kilograms) => Multiply(6.35029),
            (Stones, Tonnes) => Divide(157.473),
            (Stones, Ounces) => Multiply(224.0),
            (Stones, Pounds) => Multiply(14.0),
            (Stones, Carats) => Divide(3.1495e-5),
            (Carats, Milligrams) => Multiply(200.0),
            (Carats, Grams) => Divide(5.0),
            (Carats, Kilograms) => Divide(5000.0),
            (Carats, Tonnes) => Divide(5e+6),
            (Carats, Ounces) => Multiply(0.00705479),
            (Carats, Pounds) => Multiply(0.000440925),
            (Carats, Stones) => Multiply(3.1495e-5),
            _ => return None,
        };
        Some(rule)
    }
}

/// 질량을 다른 단위로 변환한다.
pub fn convert_mass(
    value: f64,
    from: MassUnit,
    to: MassUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
