use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule, Step};
use crate::conversion::ConversionError;

/// 온도 단위. 오프셋이 있는 유일한 물리량이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

const C_TO_F: &[Step] = &[Step::Mul(1.8), Step::Add(32.0)];
const C_TO_K: &[Step] = &[Step::Add(273.15)];
const C_TO_R: &[Step] = &[Step::Mul(9.0), Step::Div(5.0), Step::Add(491.67)];

const F_TO_C: &[Step] = &[Step::Sub(32.0), Step::Mul(5.0), Step::Div(9.0)];
const F_TO_K: &[Step] = &[Step::Sub(32.0), Step::Mul(5.0), Step::Div(9.0), Step::Add(273.15)];
const F_TO_R: &[Step] = &[Step::Add(459.67)];

const K_TO_C: &[Step] = &[Step::Sub(273.15)];
const K_TO_F: &[Step] = &[Step::Sub(273.15), Step::Mul(1.8), Step::Add(32.0)];

const R_TO_C: &[Step] = &[Step::Sub(491.67), Step::Mul(5.0), Step::Div(9.0)];
const R_TO_F: &[Step] = &[Step::Sub(459.67)];

impl MetricUnit for TemperatureUnit {
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Rankine,
    ];

    fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
            TemperatureUnit::Rankine => "Rankine",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use Rule::{Divide, Multiply, Steps};
        use TemperatureUnit::*;

        let rule = match (from, to) {
            (Celsius, Fahrenheit) => Steps(C_TO_F),
            (Celsius, Kelvin) => Steps(C_TO_K),
            (Celsius, Rankine) => Steps(C_TO_R),
            (Fahrenheit, Celsius) => Steps(F_TO_C),
            (Fahrenheit, Kelvin) => Steps(F_TO_K),
            (Fahrenheit, Rankine) => Steps(F_TO_R),
            (Kelvin, Celsius) => Steps(K_TO_C),
            (Kelvin, Fahrenheit) => Steps(K_TO_F),
            (Kelvin, Rankine) => Multiply(1.8),
            (Rankine, Celsius) => Steps(R_TO_C),
            (Rankine, Fahrenheit) => Steps(R_TO_F),
            (Rankine, Kelvin) => Divide(1.8),
            _ => return None,
        };
        Some(rule)
    }
}

/// 온도를 서로 다른 단위로 변환한다. 온도차가 아닌 절대 눈금 값으로 취급한다.
pub fn convert_temperature(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_and_boiling_points() {
        let f = convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert_eq!(f.unwrap(), 32.0);
        let k = convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
        assert_eq!(k.unwrap(), 373.15);
    }

    #[test]
    fn fahrenheit_to_kelvin_keeps_operation_order() {
        let k = convert_temperature(50.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin)
            .unwrap();
        assert_eq!(k, (((50.0 - 32.0) * 5.0) / 9.0) + 273.15);
    }
}
