use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 속도 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    FeetPerSecond,
    MetresPerSecond,
    KilometresPerHour,
    MilesPerHour,
    Knots,
}

impl MetricUnit for SpeedUnit {
    const ALL: &'static [Self] = &[
        SpeedUnit::FeetPerSecond,
        SpeedUnit::MetresPerSecond,
        SpeedUnit::KilometresPerHour,
        SpeedUnit::MilesPerHour,
        SpeedUnit::Knots,
    ];

    fn name(self) -> &'static str {
        match self {
            SpeedUnit::FeetPerSecond => "Feet per Second",
            SpeedUnit::MetresPerSecond => "Metres per Second",
            SpeedUnit::KilometresPerHour => "Kilometres per Hour",
            SpeedUnit::MilesPerHour => "Miles per Hour",
            SpeedUnit::Knots => "Knots",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use SpeedUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (FeetPerSecond, MilesPerHour) => Divide(1.46667),
            (FeetPerSecond, KilometresPerHour) => Multiply(1.09728),
            (FeetPerSecond, MetresPerSecond) => Divide(3.28084),
            (FeetPerSecond, Knots) => Divide(1.68781),
            (KilometresPerHour, MilesPerHour) => Divide(1.60934),
            (KilometresPerHour, FeetPerSecond) => Divide(1.09728),
            (KilometresPerHour, MetresPerSecond) => Divide(3.6),
            (KilometresPerHour, Knots) => Divide(1.852),
            (Knots, MilesPerHour) => Multiply(1.15078),
            (Knots, KilometresPerHour) => Multiply(1.852),
            (Knots, FeetPerSecond) => Multiply(1.68781),
            (Knots, MetresPerSecond) => Divide(1.94384),
            (MetresPerSecond, MilesPerHour) => Multiply(2.23694),
            (MetresPerSecond, KilometresPerHour) => Multiply(3.6),
            (MetresPerSecond, FeetPerSecond) => Multiply(3.28084),
            (MetresPerSecond, Knots) => Multiply(1.94384),
            (MilesPerHour, KilometresPerHour) => Multiply(1.60934),
            (MilesPerHour, FeetPerSecond) => Multiply(1.46667),
            (MilesPerHour, MetresPerSecond) => Divide(2.23694),
            (MilesPerHour, Knots) => Divide(1.15078),
            _ => return None,
        };
        Some(rule)
    }
}

/// 속도를 다른 단위로 변환한다.
pub fn convert_speed(
    value: f64,
    from: SpeedUnit,
    to: SpeedUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
