use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 압력 단위. 모두 절대압 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    Atmospheres,
    Bars,
    Pascals,
    Psi,
    Torrs,
}

impl MetricUnit for PressureUnit {
    const ALL: &'static [Self] = &[
        PressureUnit::Atmospheres,
        PressureUnit::Bars,
        PressureUnit::Pascals,
        PressureUnit::Psi,
        PressureUnit::Torrs,
    ];

    fn name(self) -> &'static str {
        match self {
            PressureUnit::Atmospheres => "Atmospheres",
            PressureUnit::Bars => "Bars",
            PressureUnit::Pascals => "Pascals",
            PressureUnit::Psi => "Psi",
            PressureUnit::Torrs => "Torrs",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use PressureUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Atmospheres, Bars) => Multiply(1.01325),
            (Atmospheres, Pascals) => Multiply(101325.0),
            (Atmospheres, Psi) => Multiply(14.69596432068),
            (Atmospheres, Torrs) => Multiply(760.0),
            (Bars, Atmospheres) => Divide(1.01325),
            (Bars, Pascals) => Divide(0.00001),
            (Bars, Psi) => Multiply(14.50378911491),
            (Bars, Torrs) => Multiply(750.0616827042),
            (Pascals, Atmospheres) => Divide(101325.0),
            (Pascals, Bars) => Multiply(0.00001),
            (Pascals, Psi) => Multiply(0.0001450378911491),
            (Pascals, Torrs) => Multiply(0.007500616827042),
            (Psi, Atmospheres) => Divide(14.69596432068),
            (Psi, Bars) => Divide(14.50378911491),
            (Psi, Pascals) => Divide(0.0001450378911491),
            (Psi, Torrs) => Divide(0.01933679515879),
            (Torrs, Atmospheres) => Divide(760.0),
            (Torrs, Bars) => Divide(750.0616827042),
            (Torrs, Pascals) => Divide(0.007500616827042),
            (Torrs, Psi) => Multiply(0.01933679515879),
            _ => return None,
        };
        Some(rule)
    }
}

/// 압력을 다른 단위로 변환한다.
pub fn convert_pressure(
    value: f64,
    from: PressureUnit,
    to: PressureUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
