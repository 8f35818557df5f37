use std::io::{BufRead, Write};

use log::info;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::display::format_for_display;
use crate::metric::{Metric, MetricDefaults};
use crate::session::{ConversionSession, MetricSwitch};
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
}

/// 대화형 메인 루프를 실행한다.
///
/// 변환 세션은 처음 물리량을 고를 때 만들어지고, 이후에는 같은 세션을 재사용한다.
pub fn run<R: BufRead, W: Write>(config: &Config, con: &mut Console<R, W>) -> Result<(), AppError> {
    let mut session: Option<ConversionSession> = None;
    let mut pending = config.start_metric;

    loop {
        let metric = match pending.take() {
            Some(m) => m,
            None => match ui_cli::main_menu(con)? {
                MenuChoice::Metric(m) => m,
                MenuChoice::Exit => {
                    if ui_cli::confirm_exit(con)? {
                        break;
                    }
                    continue;
                }
                MenuChoice::EndOfInput => break,
            },
        };

        let defaults = config.defaults_for(metric);
        let (active, entry) = enter_screen(&mut session, metric, defaults);
        match entry {
            ScreenEntry::Opened => info!("{metric} 화면 열기"),
            ScreenEntry::Resumed => info!("{metric} 화면 재개"),
            ScreenEntry::Reset => info!("{metric} 화면 초기화"),
        }
        ui_cli::conversion_screen(con, active)?;
    }
    info!("종료");
    Ok(())
}

/// 변환 화면에 들어간 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenEntry {
    /// 세션을 처음 만듦
    Opened,
    Resumed,
    Reset,
}

fn enter_screen(
    slot: &mut Option<ConversionSession>,
    metric: Metric,
    defaults: MetricDefaults,
) -> (&ConversionSession, ScreenEntry) {
    let entry = match slot.as_ref() {
        None => ScreenEntry::Opened,
        Some(existing) => match existing.select_metric_with(metric, defaults) {
            MetricSwitch::Resumed => ScreenEntry::Resumed,
            MetricSwitch::Reset => ScreenEntry::Reset,
        },
    };
    let active = slot.get_or_insert_with(|| ConversionSession::open_with(metric, defaults));
    (active, entry)
}

/// 등록된 물리량을 `식별자  제목  기본값` 형식으로 출력한다.
pub fn print_metrics<W: Write>(out: &mut W) -> Result<(), AppError> {
    for m in Metric::ALL {
        let spec = m.spec();
        writeln!(
            out,
            "{:<12} {:<13} {} {}",
            m.id(),
            spec.title,
            format_for_display(spec.default_value),
            spec.default_unit
        )?;
    }
    Ok(())
}

/// 물리량의 단위 목록을 한 줄에 하나씩 출력한다.
pub fn print_units<W: Write>(out: &mut W, metric: Metric) -> Result<(), AppError> {
    for unit in conversion::list_units(metric) {
        writeln!(out, "{unit}")?;
    }
    Ok(())
}

/// 한 번 변환하고 결과를 문자열로 돌려준다. `raw`가 아니면 표시 포맷을 적용한다.
pub fn convert_once(
    metric: Metric,
    value: f64,
    from: &str,
    to: &str,
    raw: bool,
) -> Result<String, AppError> {
    let result = conversion::convert(metric, value, from, to)?;
    Ok(if raw {
        result.to_string()
    } else {
        format_for_display(result)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_opens_then_resumes_or_resets() {
        let mut slot = None;
        let (active, entry) = enter_screen(&mut slot, Metric::Time, Metric::Time.defaults());
        assert_eq!(entry, ScreenEntry::Opened);
        assert_eq!(active.metric(), Metric::Time);

        let (_, entry) = enter_screen(&mut slot, Metric::Time, Metric::Time.defaults());
        assert_eq!(entry, ScreenEntry::Resumed);

        let (active, entry) = enter_screen(&mut slot, Metric::Area, Metric::Area.defaults());
        assert_eq!(entry, ScreenEntry::Reset);
        assert_eq!(active.metric(), Metric::Area);
    }
}
