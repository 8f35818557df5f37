use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 주파수 단위. 1000 배수 접두어만 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
}

impl MetricUnit for FrequencyUnit {
    const ALL: &'static [Self] = &[
        FrequencyUnit::Hertz,
        FrequencyUnit::Kilohertz,
        FrequencyUnit::Megahertz,
        FrequencyUnit::Gigahertz,
    ];

    fn name(self) -> &'static str {
        match self {
            FrequencyUnit::Hertz => "Hertz",
            FrequencyUnit::Kilohertz => "Kilohertz",
            FrequencyUnit::Megahertz => "Megahertz",
            FrequencyUnit::Gigahertz => "Gigahertz",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use FrequencyUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Hertz, Kilohertz) => Divide(1000.0),
            (Hertz, Megahertz) => Divide(1e+6),
            (Hertz, Gigahertz) => Divide(1e+9),
            (Kilohertz, Hertz) => Multiply(1000.0),
            (Kilohertz, Megahertz) => Divide(1000.0),
            (Kilohertz, Gigahertz) => Divide(1e+6),
            (Megahertz, Hertz) => Multiply(1e+6),
            (Megahertz, Kilohertz) => Multiply(1000.0),
            (Megahertz, Gigahertz) => Divide(1000.0),
            (Gigahertz, Hertz) => Multiply(1e+9),
            (Gigahertz, Kilohertz) => Multiply(1e+6),
            (Gigahertz, Megahertz) => Multiply(1000.0),
            _ => return None,
        };
        Some(rule)
    }
}

/// 주파수를 다른 단위로 변환한다.
pub fn convert_frequency(
    value: f64,
    from: FrequencyUnit,
    to: FrequencyUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
