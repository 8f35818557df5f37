use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 힘 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceUnit {
    Newtons,
    Dynes,
    Poundals,
    Kilogramforce,
}

impl MetricUnit for ForceUnit {
    const ALL: &'static [Self] = &[
        ForceUnit::Newtons,
        ForceUnit::Dynes,
        ForceUnit::Poundals,
        ForceUnit::Kilogramforce,
    ];

    fn name(self) -> &'static str {
        match self {
            ForceUnit::Newtons => "Newtons",
            ForceUnit::Dynes => "Dynes",
            ForceUnit::Poundals => "Poundals",
            ForceUnit::Kilogramforce => "Kilogramforce",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use ForceUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Newtons, Dynes) => Multiply(100000.0),
            (Newtons, Poundals) => Multiply(7.23301),
            (Newtons, Kilogramforce) => Divide(9.80665),
            (Dynes, Newtons) => Divide(100000.0),
            (Dynes, Poundals) => Divide(13825.4954376),
            (Dynes, Kilogramforce) => Divide(980665.0),
            (Poundals, Newtons) => Divide(7.23301),
            (Poundals, Dynes) => Multiply(13825.4954376),
            (Poundals, Kilogramforce) => Divide(70.93163528397),
            (Kilogramforce, Newtons) => Multiply(9.80665),
            (Kilogramforce, Dynes) => Multiply(980665.0),
            (Kilogramforce, Poundals) => Multiply(70.93163528397),
            _ => return None,
        };
        Some(rule)
    }
}

/// 힘을 다른 단위로 변환한다.
pub fn convert_force(
    value: f64,
    from: ForceUnit,
    to: ForceUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
