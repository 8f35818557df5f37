use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metric::{Metric, MetricDefaults};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 물리량별 기본 단위/값 재정의. 비어 있는 항목은 내장 기본값을 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 대화형 모드에서 메뉴 대신 바로 열 물리량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_metric: Option<Metric>,
    /// `[defaults.<물리량>]` 테이블. 키는 `Metric::from_name`이 받아들이는 이름이다.
    pub defaults: BTreeMap<String, DefaultsOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_metric: None,
            defaults: BTreeMap::new(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Deserialize(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드한다. 파일이 없으면 기본 설정을 돌려준다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!("{} 없음, 기본 설정 사용", path.display());
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.warn_unknown_entries();
    Ok(cfg)
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 재정의를 반영한 기본 단위/값.
    ///
    /// 목록에 없는 단위나 유한하지 않은 값은 무시하고 내장 기본값을 쓴다.
    pub fn defaults_for(&self, metric: Metric) -> MetricDefaults {
        let spec = metric.spec();
        let mut defaults = spec.defaults();
        let Some(ov) = self.override_for(metric) else {
            return defaults;
        };

        if let Some(unit) = ov.unit.as_deref() {
            match spec.find_unit(unit) {
                Some(u) => defaults.unit = u,
                None => warn!("{metric}: 알 수 없는 기본 단위 {unit:?}, 무시함"),
            }
        }
        if let Some(value) = ov.value {
            if value.is_finite() {
                defaults.value = value;
            } else {
                warn!("{metric}: 기본 값 {value}는 사용할 수 없음, 무시함");
            }
        }
        defaults
    }

    fn override_for(&self, metric: Metric) -> Option<&DefaultsOverride> {
        self.defaults
            .iter()
            .find(|(key, _)| Metric::from_name(key) == Some(metric))
            .map(|(_, ov)| ov)
    }

    fn warn_unknown_entries(&self) {
        for key in self.defaults.keys() {
            if Metric::from_name(key).is_none() {
                warn!("설정의 [defaults.{key}]: 알 수 없는 물리량, 무시함");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg: Config = toml::from_str(
            r#"
start_metric = "temperature"

[defaults.length]
unit = "Feet"
value = 3.0

[defaults.datastorage]
value = 8
"#,
        )
        .unwrap();
        assert_eq!(cfg.start_metric, Some(Metric::Temperature));
        let len = cfg.defaults_for(Metric::Length);
        assert_eq!(len.unit, "Feet");
        assert_eq!(len.value, 3.0);
        let data = cfg.defaults_for(Metric::DataStorage);
        assert_eq!(data.unit, "Kilobits");
        assert_eq!(data.value, 8.0);
    }

    #[test]
    fn foreign_unit_is_ignored() {
        let mut cfg = Config::default();
        cfg.defaults.insert(
            "mass".to_string(),
            DefaultsOverride {
                unit: Some("Meters".to_string()),
                value: None,
            },
        );
        assert_eq!(cfg.defaults_for(Metric::Mass), Metric::Mass.defaults());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("universal-convert-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DEFAULT_CONFIG_FILE);

        let mut cfg = Config::default();
        cfg.start_metric = Some(Metric::Volume);
        cfg.defaults.insert(
            "volume".to_string(),
            DefaultsOverride {
                unit: Some("Gallons".to_string()),
                value: Some(2.5),
            },
        );
        cfg.save(&path).unwrap();
        let loaded = load_or_default(&path).unwrap();
        assert_eq!(loaded, cfg);

        fs::remove_dir_all(&dir).ok();
    }
}
