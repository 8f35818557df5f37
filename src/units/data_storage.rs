use serde::{Deserialize, Serialize};

use super::{MetricUnit, Rule};
use crate::conversion::ConversionError;

/// 데이터 저장 용량 단위. 십진(1000) 접두어와 이진(1024) 접두어가 함께 쓰인다.
///
/// 십진/이진 사이 계수 일부는 반올림된 값(`976.563`, `1048.58`, `7.62939` 등)이라
/// 정방향과 역방향 변환이 서로 정확한 역수가 아니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataStorageUnit {
    Bits,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Kibibits,
    Mebibits,
}

impl MetricUnit for DataStorageUnit {
    const ALL: &'static [Self] = &[
        DataStorageUnit::Bits,
        DataStorageUnit::Kilobits,
        DataStorageUnit::Megabits,
        DataStorageUnit::Gigabits,
        DataStorageUnit::Terabits,
        DataStorageUnit::Kilobytes,
        DataStorageUnit::Megabytes,
        DataStorageUnit::Gigabytes,
        DataStorageUnit::Terabytes,
        DataStorageUnit::Kibibits,
        DataStorageUnit::Mebibits,
    ];

    fn name(self) -> &'static str {
        match self {
            DataStorageUnit::Bits => "Bits",
            DataStorageUnit::Kilobits => "Kilobits",
            DataStorageUnit::Megabits => "Megabits",
            DataStorageUnit::Gigabits => "Gigabits",
            DataStorageUnit::Terabits => "Terabits",
            DataStorageUnit::Kilobytes => "Kilobytes",
            DataStorageUnit::Megabytes => "Megabytes",
            DataStorageUnit::Gigabytes => "Gigabytes",
            DataStorageUnit::Terabytes => "Terabytes",
            DataStorageUnit::Kibibits => "Kibibits",
            DataStorageUnit::Mebibits => "Mebibits",
        }
    }

    fn rule(from: Self, to: Self) -> Option<Rule> {
        use DataStorageUnit::*;
        use Rule::{Divide, Multiply};

        let rule = match (from, to) {
            (Bits, Kilobits) => Divide(1000.0),
            (Bits, Megabits) => Divide(1e+6),
            (Bits, Gigabits) => Divide(1e+9),
            (Bits, Terabits) => Divide(1e+12),
            (Bits, Kilobytes) => Divide(8000.0),
            (Bits, Megabytes) => Divide(8e+6),
            (Bits, Gigabytes) => Divide(8e+9),
            (Bits, Terabytes) => Divide(8e+12),
            (Bits, Kibibits) => Divide(1024.0),
            (Bits, Mebibits) => Divide(1048576.0),
            (Kilobits, Bits) => Multiply(1000.0),
            (Kilobits, Megabits) => Divide(1000.0),
            (Kilobits, Gigabits) => Divide(1e+6),
            (Kilobits, Terabits) => Divide(1e+9),
            (Kilobits, Kilobytes) => Divide(8.0),
            (Kilobits, Megabytes) => Divide(8000.0),
            (Kilobits, Gigabytes) => Divide(8e+6),
            (Kilobits, Terabytes) => Divide(8e+9),
            (Kilobits, Kibibits) => Divide(1.024),
            (Kilobits, Mebibits) => Divide(1048.58),
            (Megabits, Bits) => Multiply(1e+6),
            (Megabits, Kilobits) => Multiply(1000.0),
            (Megabits, Gigabits) => Divide(1000.0),
            (Megabits, Terabits) => Divide(1e+6),
            (Megabits, Kilobytes) => Multiply(125.0),
            (Megabits, Megabytes) => Divide(8.0),
            (Megabits, Gigabytes) => Divide(8000.0),
            (Megabits, Terabytes) => Divide(8e+6),
            (Megabits, Kibibits) => Multiply(976.563),
            (Megabits, Mebibits) => Divide(1.04858),
            (Gigabits, Bits) => Multiply(1e+9),
            (Gigabits, Kilobits) => Multiply(1e+6),
            (Gigabits, Megabits) => Multiply(1000.0),
            (Gigabits, Terabits) => Divide(1000.0),
            (Gigabits, Kilobytes) => Multiply(125000.0),
            (Gigabits, Megabytes) => Multiply(125.0),
            (Gigabits, Gigabytes) => Divide(8.0),
            (Gigabits, Terabytes) => Divide(8000.0),
            (Gigabits, Kibibits) => Multiply(976562.5),
            (Gigabits, Mebibits) => Multiply(953.67431640625),
            (Terabits, Bits) => Multiply(1e+12),
            (Terabits, Kilobits) => Multiply(1e+9),
            (Terabits, Megabits) => Multiply(1e+6),
            (Terabits, Gigabits) => Multiply(1000.0),
            (Terabits, Kilobytes) => Multiply(1.25e+8),
            (Terabits, Megabytes) => Multiply(125000.0),
            (Terabits, Gigabytes) => Multiply(125.0),
            (Terabits, Terabytes) => Divide(8.0),
            (Terabits, Kibibits) => Multiply(976562500.0),
            (Terabits, Mebibits) => Multiply(953674.0),
            (Kilobytes, Bits) => Multiply(8000.0),
            (Kilobytes, Kilobits) => Multiply(8.0),
            (Kilobytes, Megabits) => Divide(125.0),
            (Kilobytes, Gigabits) => Divide(125000.0),
            (Kilobytes, Terabits) => Divide(1.25e+8),
            (Kilobytes, Megabytes) => Divide(1000.0),
            (Kilobytes, Gigabytes) => Divide(1e+6),
            (Kilobytes, Terabytes) => Divide(1e+9),
            (Kilobytes, Kibibits) => Multiply(7.8125),
            (Kilobytes, Mebibits) => Multiply(0.00762939),
            (Megabytes, Bits) => Multiply(8e+6),
            (Megabytes, Kilobits) => Multiply(8000.0),
            (Megabytes, Megabits) => Multiply(8.0),
            (Megabytes, Gigabits) => Divide(125.0),
            (Megabytes, Terabits) => Divide(125000.0),
            (Megabytes, Kilobytes) => Multiply(1000.0),
            (Megabytes, Gigabytes) => Divide(1000.0),
            (Megabytes, Terabytes) => Divide(1e+6),
            (Megabytes, Kibibits) => Multiply(7812.5),
            (Megabytes, Mebibits) => Multiply(7.62939),
            (Gigabytes, Bits) => Multiply(8e+9),
            (Gigabytes, Kilobits) => Multiply(8e+6),
            (Gigabytes, Megabits) => Multiply(8000.0),
            (Gigabytes, Gigabits) => Multiply(8.0),
            (Gigabytes, Terabits) => Divide(125.0),
            (Gigabytes, Kilobytes) => Multiply(1e+6),
            (Gigabytes, Megabytes) => Multiply(1000.0),
            (Gigabytes, Terabytes) => Divide(1000.0),
            (Gigabytes, Kibibits) => Multiply(7812500.0),
            (Gigabytes, Mebibits) => Multiply(7629.39),
            (Terabytes, Bits) => Multiply(8e+12),
            (Terabytes, Kilobits) => Multiply(8e+9),
            (Terabytes, Megabits) => Multiply(8e+6),
            (Terabytes, Gigabits) => Multiply(8000.0),
            (Terabytes, Terabits) => Multiply(8.0),
            (Terabytes, Kilobytes) => Multiply(1e+9),
            (Terabytes, Megabytes) => Multiply(1e+6),
            (Terabytes, Gigabytes) => Multiply(1000.0),
            (Terabytes, Kibibits) => Multiply(7812500000.0),
            (Terabytes, Mebibits) => Divide(0.000000131072),
            (Kibibits, Bits) => Multiply(1024.0),
            (Kibibits, Kilobits) => Multiply(1.024),
            (Kibibits, Megabits) => Divide(976.563),
            (Kibibits, Gigabits) => Divide(976562.5),
            (Kibibits, Terabits) => Divide(976562500.0),
            (Kibibits, Kilobytes) => Divide(7.8125),
            (Kibibits, Megabytes) => Divide(7812.5),
            (Kibibits, Gigabytes) => Divide(7812500.0),
            (Kibibits, Terabytes) => Divide(7812500000.0),
            (Kibibits, Mebibits) => Divide(1024.0),
            (Mebibits, Bits) => Multiply(1048576.0),
            (Mebibits, Kilobits) => Multiply(1048.58),
            (Mebibits, Megabits) => Multiply(1.04858),
            (Mebibits, Gigabits) => Divide(953.67431640625),
            (Mebibits, Terabits) => Divide(953674.0),
            (Mebibits, Kilobytes) => Divide(0.00762939),
            (Mebibits, Megabytes) => Divide(7.62939),
            (Mebibits, Gigabytes) => Divide(7629.39),
            (Mebibits, Terabytes) => Multiply(0.000000131072),
            (Mebibits, Kibibits) => Multiply(1024.0),
            _ => return None,
        };
        Some(rule)
    }
}

/// 데이터 용량을 다른 단위로 변환한다.
pub fn convert_data_storage(
    value: f64,
    from: DataStorageUnit,
    to: DataStorageUnit,
) -> Result<f64, ConversionError> {
    super::convert_units(value, from, to)
}
