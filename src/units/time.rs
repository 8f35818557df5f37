use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 시간 단위. 월/년 이상은 달력 평균값(30.4167일, 365일)을 쓴다.
///
/// 윤년은 고려하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
}

impl MetricUnit for TimeUnit {
    const ALL: &'static [Self] = &[
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
        TimeUnit::Decades,
        TimeUnit::Centuries,
    ];

    fn name(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "Nanoseconds",
            TimeUnit::Microseconds => "Microseconds",
            TimeUnit::Milliseconds => "Milliseconds",
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
            TimeUnit::Days => "Days",
            TimeUnit::Weeks => "Weeks",
            TimeUnit::Months => "Months",
            TimeUnit::Years => "Years",
            TimeUnit::Decades => "Decades",
            TimeUnit::Centuries => "Centuries",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use TimeUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Centuries, Nanoseconds) => Multiply(3.154e+18),
            (Centuries, Microseconds) => Multiply(3.154e+15),
            (Centuries, Milliseconds) => Multiply(3.154e+12),
            (Centuries, Seconds) => Multiply(3.154e+9),
            (Centuries, Minutes) => Multiply(5.256e+7),
            (Centuries, Hours) => Multiply(876000.0),
            (Centuries, Days) => Multiply(36500.0),
            (Centuries, Weeks) => Multiply(5214.29),
            (Centuries, Months) => Multiply(1200.0),
            (Centuries, Years) => Multiply(100.0),
            (Centuries, Decades) => Multiply(10.0),
            (Nanoseconds, Centuries) => Divide(3.154e+18),
            (Nanoseconds, Microseconds) => Divide(1000.0),
            (Nanoseconds, Milliseconds) => Divide(1e+6),
            (Nanoseconds, Seconds) => Divide(1e+9),
            (Nanoseconds, Minutes) => Divide(6e+10),
            (Nanoseconds, Hours) => Divide(3.6e+12),
            (Nanoseconds, Days) => Divide(8.64e+13),
            (Nanoseconds, Weeks) => Divide(6.048e+14),
            (Nanoseconds, Months) => Divide(2629746000000000.0),
            (Nanoseconds, Years) => Divide(3.154e+16),
            (Nanoseconds, Decades) => Divide(3.154e+17),
            (Days, Nanoseconds) => Multiply(8.64e+13),
            (Days, Microseconds) => Multiply(8.64e+10),
            (Days, Milliseconds) => Multiply(8.64e+7),
            (Days, Seconds) => Multiply(86400.0),
            (Days, Minutes) => Multiply(1440.0),
            (Days, Hours) => Multiply(24.0),
            (Days, Weeks) => Divide(7.0),
            (Days, Months) => Divide(30.4167),
            (Days, Years) => Divide(365.0),
            (Days, Decades) => Divide(3650.0),
            (Days, Centuries) => Divide(36500.0),
            (Decades, Nanoseconds) => Multiply(3.154e+17),
            (Decades, Microseconds) => Multiply(3.154e+14),
            (Decades, Milliseconds) => Multiply(3.154e+11),
            (Decades, Seconds) => Multiply(3.154e+8),
            (Decades, Minutes) => Multiply(5.256e+6),
            (Decades, Hours) => Multiply(87600.0),
            (Decades, Days) => Multiply(3650.0),
            (Decades, Weeks) => Multiply(521.429),
            (Decades, Months) => Multiply(120.0),
            (Decades, Years) => Multiply(10.0),
            (Decades, Centuries) => Divide(10.0),
            (Years, Nanoseconds) => Multiply(3.154e+16),
            (Years, Microseconds) => Multiply(3.154e+13),
            (Years, Milliseconds) => Multiply(31556952000.0),
            (Years, Seconds) => Multiply(3.1536e+7),
            (Years, Minutes) => Multiply(525600.0),
            (Years, Hours) => Multiply(8760.0),
            (Years, Days) => Multiply(365.0),
            (Years, Weeks) => Multiply(52.143),
            (Years, Months) => Multiply(12.0),
            (Years, Decades) => Divide(10.0),
            (Years, Centuries) => Divide(100.0),
            (Months, Nanoseconds) => Multiply(2629746000000000.0),
            (Months, Microseconds) => Multiply(2629746000000.0),
            (Months, Milliseconds) => Multiply(2629746000.0),
            (Months, Seconds) => Multiply(2.628e+6),
            (Months, Minutes) => Multiply(43800.0),
            (Months, Hours) => Multiply(730.001),
            (Months, Days) => Multiply(30.4167),
            (Months, Weeks) => Multiply(4.34524),
            (Months, Years) => Divide(12.0),
            (Months, Decades) => Divide(120.0),
            (Months, Centuries) => Divide(1200.0),
            (Weeks, Nanoseconds) => Multiply(6.048e+14),
            (Weeks, Microseconds) => Multiply(6.048e+11),
            (Weeks, Milliseconds) => Multiply(6.048e+8),
            (Weeks, Seconds) => Multiply(604800.0),
            (Weeks, Minutes) => Multiply(10080.0),
            (Weeks, Hours) => Multiply(168.0),
            (Weeks, Days) => Multiply(7.0),
            (Weeks, Months) => Divide(4.34524),
            (Weeks, Years) => Divide(52.143),
            (Weeks, Decades) => Divide(521.429),
            (Weeks, Centuries) => Divide(5214.29),
            (Hours, Nanoseconds) => Multiply(3.6e+12),
            (Hours, Microseconds) => Multiply(3.6e+9),
            (Hours, Milliseconds) => Multiply(3.6e+6),
            (Hours, Seconds) => Multiply(3600.0),
            (Hours, Minutes) => Multiply(60.0),
            (Hours, Days) => Divide(24.0),
            (Hours, Weeks) => Divide(168.0),
            (Hours, Months) => Divide(730.001),
            (Hours, Years) => Divide(8760.0),
            (Hours, Decades) => Divide(87600.0),
            (Hours, Centuries) => Divide(876000.0),
            (Minutes, Nanoseconds) => Multiply(6e+10),
            (Minutes, Microseconds) => Multiply(6e+7),
            (Minutes, Milliseconds) => Multiply(60000.0),
            (Minutes, Seconds) => Multiply(60.0),
            (Minutes, Hours) => Divide(60.0),
            (Minutes, Days) => Divide(1440.0),
            (Minutes, Weeks) => Divide(10080.0),
            (Minutes, Months) => Divide(43800.0),
            (Minutes, Years) => Divide(525600.0),
            (Minutes, Decades) => Divide(5.256e+6),
            (Minutes, Centuries) => Divide(5.256e+7),
            (Seconds, Nanoseconds) => Multiply(1e+9),
            (Seconds, Microseconds) => Multiply(1e+6),
            (Seconds, Milliseconds) => Multiply(1000.0),
            (Seconds, Minutes) => Divide(60.0),
            (Seconds, Hours) => Divide(3600.0),
            (Seconds, Days) => Divide(86400.0),
            (Seconds, Weeks) => Divide(604800.0),
            (Seconds, Months) => Divide(2.628e+6),
            (Seconds, Years) => Divide(3.1536e+7),
            (Seconds, Decades) => Divide(3.154e+8),
            (Seconds, Centuries) => Divide(3.154e+9),
            (Milliseconds, Nanoseconds) => Multiply(1e+6),
            (Milliseconds, Microseconds) => Multiply(1000.0),
            (Milliseconds, Seconds) => Divide(1000.0),
            (Milliseconds, Minutes) => Divide(60000.0),
            (Milliseconds, Hours) => Divide(3.6e+6),
            (Milliseconds, Days) => Divide(8.64e+7),
            (Milliseconds, Weeks) => Divide(6.048e+8),
            (Milliseconds, Months) => Divide(2629746000.0),
            (Milliseconds, Years) => Divide(31556952000.0),
            (Milliseconds, Decades) => Divide(3.154e+11),
            (Milliseconds, Centuries) => Divide(3.154e+12),
            (Microseconds, Nanoseconds) => Multiply(1000.0),
            (Microseconds, Milliseconds) => Divide(1000.0),
            (Microseconds, Seconds) => Divide(1e+6),
            (Microseconds, Minutes) => Divide(6e+7),
            (Microseconds, Hours) => Divide(3.6e+9),
            (Microseconds, Days) => Divide(8.64e+10),
            (Microseconds, Weeks) => Divide(6.048e+11),
            (Microseconds, Months) => Divide(2629746000000.0),
            (Microseconds, Years) => Divide(3.154e+13),
            (Microseconds, Decades) => Divide(3.154e+14),
            (Microseconds, Centuries) => Divide(3.154e+15),
            _ => return None,
        };
        Some(rule)
    }
}

/// 시간을 다른 단위로 변환한다.
pub fn convert_time(
    value: f64,
    from: TimeUnit,
    to: TimeUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
