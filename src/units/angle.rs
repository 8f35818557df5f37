use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 각도 단위.
///
/// 라디안 계열 계수는 π를 포함한 식을 원래 결합 순서대로 계산한다.
/// 밀리라디안에서 나가는 규칙은 과거 표 그대로 곱셈 계수를 쓰므로 물리적으로
/// 맞지 않는 값이 나온다(예: 1 mrad -> 180000π°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleUnit {
    Degrees,
    Radians,
    Milliradians,
    Gradians,
    SecondsOfArc,
    MinutesOfArc,
}

impl MetricUnit for AngleUnit {
    const ALL: &'static [Self] = &[
        AngleUnit::Degrees,
        AngleUnit::Radians,
        AngleUnit::Milliradians,
        AngleUnit::Gradians,
        AngleUnit::SecondsOfArc,
        AngleUnit::MinutesOfArc,
    ];

    fn name(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "Degrees",
            AngleUnit::Radians => "Radians",
            AngleUnit::Milliradians => "Milliradians",
            AngleUnit::Gradians => "Gradians",
            AngleUnit::SecondsOfArc => "Seconds of Arc",
            AngleUnit::MinutesOfArc => "Minutes of Arc",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use AngleUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Degrees, Radians) => Multiply(PI / 180.0),
            (Degrees, Gradians) => Multiply(200.0 / 180.0),
            (Degrees, Milliradians) => Multiply((1000.0 * PI) / 180.0),
            (Degrees, MinutesOfArc) => Multiply(60.0),
            (Degrees, SecondsOfArc) => Multiply(3600.0),

            (Radians, Degrees) => Multiply(180.0 / PI),
            (Radians, Gradians) => Multiply(200.0 / PI),
            (Radians, Milliradians) => Multiply(1000.0),
            (Radians, MinutesOfArc) => Multiply((60.0 * 180.0) / PI),
            (Radians, SecondsOfArc) => Multiply((3600.0 * 180.0) / PI),

            (Gradians, Degrees) => Multiply(180.0 / 200.0),
            (Gradians, Radians) => Multiply(PI / 200.0),
            (Gradians, Milliradians) => Multiply((1000.0 * PI) / 200.0),
            (Gradians, MinutesOfArc) => Multiply(60.0 / 54.0),
            (Gradians, SecondsOfArc) => Multiply(3600.0 / 3240.0),

            (Milliradians, Degrees) => Multiply(180.0 * 1000.0 * PI),
            (Milliradians, Radians) => Multiply(1000.0),
            (Milliradians, Gradians) => Multiply(200.0 * 1000.0 * PI),
            (Milliradians, MinutesOfArc) => Multiply(60.0 * 180.0 * 1000.0 * PI),
            (Milliradians, SecondsOfArc) => Multiply(3600.0 * 180.0 * 1000.0 * PI),

            (MinutesOfArc, Degrees) => Divide(60.0),
            (MinutesOfArc, Radians) => Multiply(PI / (60.0 * 180.0)),
            (MinutesOfArc, Gradians) => Multiply(54.0),
            (MinutesOfArc, Milliradians) => Multiply((1000.0 * PI) / (60.0 * 180.0)),
            (MinutesOfArc, SecondsOfArc) => Multiply(60.0),

            (SecondsOfArc, Degrees) => Divide(3600.0),
            (SecondsOfArc, Radians) => Multiply(PI / (180.0 * 3600.0)),
            (SecondsOfArc, Gradians) => Divide(3240.0),
            (SecondsOfArc, Milliradians) => Multiply((1000.0 * PI) / (180.0 * 3600.0)),
            (SecondsOfArc, MinutesOfArc) => Divide(60.0),

            _ => return None,
        };
        Some(rule)
    }
}

/// 각도를 다른 단위로 변환한다.
pub fn convert_angle(value: f64, from: AngleUnit, to: AngleUnit) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
