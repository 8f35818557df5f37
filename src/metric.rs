//! 물리량 종류와 물리량별 고정 설정(단위 목록, 기본값, 강조 색상) 레지스트리.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;
use crate::units::{self, *};

/// 다루는 물리량 종류를 나타낸다. 메뉴 표시 순서와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Angle,
    Area,
    DataStorage,
    Force,
    Frequency,
    Length,
    Mass,
    Pressure,
    Speed,
    Temperature,
    Time,
    Volume,
}

/// 화면 강조 색상 (sRGB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` 형태의 문자열.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// 변환 화면을 새로 열 때 양쪽 입력란에 채우는 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDefaults {
    pub unit: &'static str,
    pub value: f64,
}

/// 물리량 하나에 대한 레지스트리 항목.
pub struct MetricSpec {
    pub metric: Metric,
    pub title: &'static str,
    pub default_unit: &'static str,
    pub default_value: f64,
    pub color: Rgb,
    unit_names: fn() -> Vec<&'static str>,
    pub(crate) convert: fn(f64, &str, &str) -> Result<f64, ConversionError>,
}

impl MetricSpec {
    /// 단위 이름 목록. 첫 번째 항목이 드롭다운 맨 위에 온다.
    pub fn units(&self) -> Vec<&'static str> {
        (self.unit_names)()
    }

    /// 목록에 있는 단위면 `'static` 이름을 돌려준다.
    pub fn find_unit(&self, name: &str) -> Option<&'static str> {
        self.units().into_iter().find(|u| *u == name)
    }

    pub fn defaults(&self) -> MetricDefaults {
        MetricDefaults {
            unit: self.default_unit,
            value: self.default_value,
        }
    }
}

impl fmt::Debug for MetricSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricSpec")
            .field("metric", &self.metric)
            .field("default_unit", &self.default_unit)
            .field("default_value", &self.default_value)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

macro_rules! spec {
    ($metric:ident, $title:literal, $unit_ty:ty, $unit:literal, $value:literal, $rgb:expr) => {
        MetricSpec {
            metric: Metric::$metric,
            title: $title,
            default_unit: $unit,
            default_value: $value,
            color: $rgb,
            unit_names: units::unit_names::<$unit_ty>,
            convert: units::convert_named::<$unit_ty>,
        }
    };
}

static REGISTRY: [MetricSpec; 12] = [
    spec!(Angle, "Angle", AngleUnit, "Degrees", 90.0, Rgb(0x6f, 0x00, 0x00)),
    spec!(Area, "Area", AreaUnit, "Square Metres", 1.0, Rgb(0x11, 0x11, 0x11)),
    spec!(DataStorage, "Data Storage", DataStorageUnit, "Kilobits", 1.0, Rgb(0x3f, 0x4c, 0x6b)),
    spec!(Force, "Force", ForceUnit, "Newtons", 1.0, Rgb(0x2a, 0x90, 0x64)),
    spec!(Frequency, "Frequency", FrequencyUnit, "Hertz", 1.0, Rgb(0x0f, 0x34, 0x43)),
    spec!(Length, "Length", LengthUnit, "Meters", 1.0, Rgb(0x61, 0xa8, 0x30)),
    spec!(Mass, "Mass", MassUnit, "Grams", 1.0, Rgb(0xaa, 0x38, 0x8d)),
    spec!(Pressure, "Pressure", PressureUnit, "Atmospheres", 1.0, Rgb(0xf7, 0xa8, 0x00)),
    spec!(Speed, "Speed", SpeedUnit, "Metres per Second", 1.0, Rgb(0x3f, 0x26, 0x83)),
    spec!(Temperature, "Temperature", TemperatureUnit, "Celsius", 25.0, Rgb(0xec, 0x66, 0x2c)),
    spec!(Time, "Time", TimeUnit, "Minutes", 1.0, Rgb(0xcf, 0x11, 0x2d)),
    spec!(Volume, "Volume", VolumeUnit, "Litres", 1.0, Rgb(0x00, 0x60, 0xa8)),
];

impl Metric {
    pub const ALL: [Metric; 12] = [
        Metric::Angle,
        Metric::Area,
        Metric::DataStorage,
        Metric::Force,
        Metric::Frequency,
        Metric::Length,
        Metric::Mass,
        Metric::Pressure,
        Metric::Speed,
        Metric::Temperature,
        Metric::Time,
        Metric::Volume,
    ];

    /// 레지스트리 항목. `REGISTRY`는 `ALL`과 같은 순서로 정렬되어 있다.
    pub fn spec(self) -> &'static MetricSpec {
        &REGISTRY[self as usize]
    }

    /// 설정 파일과 명령행에서 쓰는 식별자.
    pub fn id(self) -> &'static str {
        match self {
            Metric::Angle => "angle",
            Metric::Area => "area",
            Metric::DataStorage => "datastorage",
            Metric::Force => "force",
            Metric::Frequency => "frequency",
            Metric::Length => "length",
            Metric::Mass => "mass",
            Metric::Pressure => "pressure",
            Metric::Speed => "speed",
            Metric::Temperature => "temperature",
            Metric::Time => "time",
            Metric::Volume => "volume",
        }
    }

    pub fn title(self) -> &'static str {
        self.spec().title
    }

    pub fn defaults(self) -> MetricDefaults {
        self.spec().defaults()
    }

    /// 식별자로 물리량을 찾는다. 대소문자와 `data_storage`/`data-storage` 표기를 허용한다.
    pub fn from_name(name: &str) -> Option<Metric> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        Metric::ALL.into_iter().find(|m| m.id() == normalized)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Metric {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::from_name(s).ok_or_else(|| ConversionError::UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_enum_order() {
        for (i, m) in Metric::ALL.iter().enumerate() {
            assert_eq!(REGISTRY[i].metric, *m);
        }
    }

    #[test]
    fn default_unit_is_listed() {
        for m in Metric::ALL {
            let spec = m.spec();
            assert!(
                spec.find_unit(spec.default_unit).is_some(),
                "{m}: default unit {} missing",
                spec.default_unit
            );
        }
    }

    #[test]
    fn names_are_parsed_leniently() {
        assert_eq!(Metric::from_name("DataStorage"), Some(Metric::DataStorage));
        assert_eq!(Metric::from_name("data_storage"), Some(Metric::DataStorage));
        assert_eq!(Metric::from_name("data-storage"), Some(Metric::DataStorage));
        assert_eq!(Metric::from_name(" Length "), Some(Metric::Length));
        assert_eq!(Metric::from_name("energy"), None);
        assert!("energy".parse::<Metric>().is_err());
    }

    #[test]
    fn color_hex() {
        assert_eq!(Metric::Temperature.spec().color.hex(), "#ec662c");
    }
}
