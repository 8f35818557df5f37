use thiserror::Error;

use crate::metric::Metric;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 해당 물리량 목록에 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 두 단위 사이에 정의된 규칙이 없음
    #[error("지원하지 않는 변환: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },
    /// 등록되지 않은 물리량 이름
    #[error("알 수 없는 물리량: {0}")]
    UnknownMetric(String),
}

/// 물리량의 단위 이름 목록을 표시 순서대로 반환한다.
pub fn list_units(metric: Metric) -> Vec<&'static str> {
    metric.spec().units()
}

/// 화면을 새로 열 때 쓰는 기본 단위.
pub fn default_unit(metric: Metric) -> &'static str {
    metric.spec().default_unit
}

/// 화면을 새로 열 때 쓰는 기본 값.
pub fn default_value(metric: Metric) -> f64 {
    metric.spec().default_value
}

/// 문자열로 전달된 단위명으로 값을 환산한다.
///
/// 단위명은 `list_units`가 돌려주는 표시 이름과 정확히 같아야 한다
/// (예: `"Square Metres"`, `"Kilometres per Hour"`). 두 이름이 같으면 목록 확인 없이
/// 값을 그대로 돌려준다.
pub fn convert(
    metric: Metric,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    (metric.spec().convert)(value, from_unit, to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miles_to_feet() {
        assert_eq!(convert(Metric::Length, 1.0, "Miles", "Feet").unwrap(), 5280.0);
    }

    #[test]
    fn units_do_not_cross_metrics() {
        let err = convert(Metric::Mass, 1.0, "Meters", "Grams").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("Meters".to_string()));
    }

    #[test]
    fn error_messages_name_the_units() {
        let err = ConversionError::UnsupportedConversion {
            from: "Bits".into(),
            to: "Acres".into(),
        };
        assert_eq!(err.to_string(), "지원하지 않는 변환: Bits -> Acres");
    }
}
