//! 물리량별 단위 정의 및 변환 규칙 모음.
//!
//! 각 모듈은 표시 순서대로 나열된 단위 enum과, 순서쌍 `(from, to)`마다 독립적으로
//! 정해진 변환 규칙 표를 가진다. 규칙은 기준 단위를 거치지 않으므로 역방향 계수가
//! 정확한 역수라는 보장이 없다.

pub mod angle;
pub mod area;
pub mod data_storage;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;

pub use angle::{convert_angle, AngleUnit};
pub use area::{convert_area, AreaUnit};
pub use data_storage::{convert_data_storage, DataStorageUnit};
pub use force::{convert_force, ForceUnit};
pub use frequency::{convert_frequency, FrequencyUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use speed::{convert_speed, SpeedUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use time::{convert_time, TimeUnit};
pub use volume::{convert_volume, VolumeUnit};

use crate::conversion::ConversionError;

/// 규칙을 구성하는 단일 산술 연산.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Add(f64),
    Sub(f64),
    Mul(f64),
    Div(f64),
}

impl Step {
    fn apply(self, value: f64) -> f64 {
        match self {
            Step::Add(c) => value + c,
            Step::Sub(c) => value - c,
            Step::Mul(c) => value * c,
            Step::Div(c) => value / c,
        }
    }
}

/// 순서쌍 하나에 대응하는 변환 규칙.
///
/// 대부분은 곱셈 또는 나눗셈 한 번이다. 온도처럼 오프셋이 붙는 경우는 `Steps`로
/// 연산 순서를 그대로 적어 부동소수점 결과가 원래 공식과 비트 단위로 같게 한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Multiply(f64),
    Divide(f64),
    Steps(&'static [Step]),
}

impl Rule {
    /// 규칙을 값에 적용한다.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rule::Multiply(k) => value * k,
            Rule::Divide(k) => value / k,
            Rule::Steps(steps) => steps.iter().fold(value, |acc, step| step.apply(acc)),
        }
    }
}

/// 한 물리량에 속한 단위 집합이 구현하는 공통 인터페이스.
pub trait MetricUnit: Copy + Eq + Sized + 'static {
    /// 표시 순서대로 나열한 전체 단위. 첫 번째가 목록의 맨 위에 온다.
    const ALL: &'static [Self];

    /// 화면에 표시되는 단위 이름.
    fn name(self) -> &'static str;

    /// `from -> to` 규칙. 표에 없는 순서쌍이면 `None`.
    fn rule(from: Self, to: Self) -> Option<Rule>;

    /// 표시 이름으로 단위를 찾는다. 대소문자를 구분한다.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.name() == name)
    }
}

/// 같은 단위면 값을 그대로 돌려주고, 아니면 표의 규칙을 적용한다.
pub fn convert_units<U: MetricUnit>(value: f64, from: U, to: U) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }
    U::rule(from, to)
        .map(|rule| rule.apply(value))
        .ok_or_else(|| ConversionError::UnsupportedConversion {
            from: from.name().to_string(),
            to: to.name().to_string(),
        })
}

/// 단위 이름 문자열로 변환한다. 이름이 같으면 표를 보지 않고 값을 그대로 돌려준다.
pub fn convert_named<U: MetricUnit>(
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }
    let from_unit =
        U::from_name(from).ok_or_else(|| ConversionError::UnknownUnit(from.to_string()))?;
    let to_unit = U::from_name(to).ok_or_else(|| ConversionError::UnknownUnit(to.to_string()))?;
    convert_units(value, from_unit, to_unit)
}

/// 단위 enum의 표시 이름 목록.
pub fn unit_names<U: MetricUnit>() -> Vec<&'static str> {
    U::ALL.iter().map(|u| u.name()).collect()
}
