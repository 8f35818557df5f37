//! 두 입력란을 하나의 변환기로 묶어 양방향으로 동기화하는 변환 세션.
//!
//! 한 쪽 값을 바꾸면 반대쪽 값을 다시 계산해 써 넣는다. 써 넣는 동작 자체가 UI의
//! 텍스트 변경 이벤트를 다시 일으킬 수 있으므로, 계산 중(`Converting`)에 들어온
//! 요청은 큐에 쌓지 않고 버린다. 모든 호출은 UI 스레드 하나에서 일어난다고 가정하여
//! 잠금 대신 `Cell`/`RefCell`을 쓴다.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

use crate::conversion::ConversionError;
use crate::display::format_for_display;
use crate::metric::{Metric, MetricDefaults};

/// 숫자로 해석할 수 없을 때 반대쪽 입력란에 표시하는 문자열.
pub const INVALID_INPUT: &str = "Invalid input";

/// 두 입력란 중 어느 쪽인지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// 세션 상태. 초기 상태는 `Idle`이고 종료 상태는 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Converting,
}

/// 입력란 하나의 단위 라벨과 텍스트.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub unit: &'static str,
    pub text: String,
}

/// 재계산 결과의 종류.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted,
    /// 원본 텍스트가 숫자가 아님
    InvalidInput,
    /// 단위 쌍에 규칙이 없음
    Unsupported(ConversionError),
}

/// 재계산으로 갱신된 반대쪽 입력란.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub side: Side,
    pub text: String,
    pub outcome: Outcome,
}

/// `select_metric` 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSwitch {
    /// 이미 표시 중인 물리량이라 아무것도 초기화하지 않음
    Resumed,
    /// 다른 물리량으로 바뀌어 양쪽 입력란을 기본값으로 되돌림
    Reset,
}

type Listener = Rc<dyn Fn(Side, &str)>;
type Converter = fn(f64, &str, &str) -> Result<f64, ConversionError>;

/// 변환 화면 하나가 표시되는 동안 유지되는 세션.
pub struct ConversionSession {
    metric: Cell<Metric>,
    convert: Cell<Converter>,
    state: Cell<SessionState>,
    fields: RefCell<[Field; 2]>,
    listener: RefCell<Option<Listener>>,
}

/// `Converting` 상태를 잡고 있는 동안만 살아 있는 가드. 어떤 경로로 빠져나가든
/// drop 시점에 `Idle`로 되돌린다.
struct ConvertingGuard<'a> {
    state: &'a Cell<SessionState>,
}

impl<'a> ConvertingGuard<'a> {
    fn acquire(state: &'a Cell<SessionState>) -> Option<Self> {
        if state.get() == SessionState::Converting {
            return None;
        }
        state.set(SessionState::Converting);
        Some(Self { state })
    }
}

impl Drop for ConvertingGuard<'_> {
    fn drop(&mut self) {
        self.state.set(SessionState::Idle);
    }
}

impl ConversionSession {
    /// 물리량의 기본 단위/값으로 세션을 연다.
    pub fn open(metric: Metric) -> Self {
        Self::open_with(metric, metric.defaults())
    }

    /// 지정한 기본 단위/값으로 세션을 연다.
    pub fn open_with(metric: Metric, defaults: MetricDefaults) -> Self {
        Self {
            metric: Cell::new(metric),
            convert: Cell::new(metric.spec().convert),
            state: Cell::new(SessionState::Idle),
            fields: RefCell::new(initial_fields(defaults)),
            listener: RefCell::new(None),
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric.get()
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn field(&self, side: Side) -> Field {
        self.fields.borrow()[side.index()].clone()
    }

    /// 세션이 입력란에 값을 써 넣을 때마다 호출할 함수를 등록한다.
    ///
    /// UI의 텍스트 변경 바인딩처럼 리스너 안에서 다시 세션을 호출해도 된다. 계산 중에
    /// 들어온 호출은 버려진다. 리스너를 바꾸거나 해제하는 것도 허용되며, 이미 시작된
    /// 알림은 원래 리스너로 끝난다.
    pub fn set_listener<F>(&self, listener: F)
    where
        F: Fn(Side, &str) + 'static,
    {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn clear_listener(&self) {
        self.listener.borrow_mut().take();
    }

    /// 표시할 물리량을 고른다. 같은 물리량이면 입력 상태를 유지한다.
    pub fn select_metric(&self, metric: Metric) -> MetricSwitch {
        self.select_metric_with(metric, metric.defaults())
    }

    pub fn select_metric_with(&self, metric: Metric, defaults: MetricDefaults) -> MetricSwitch {
        if self.metric.get() == metric {
            return MetricSwitch::Resumed;
        }
        debug!("세션 물리량 변경: {} -> {}", self.metric.get(), metric);
        self.metric.set(metric);
        self.convert.set(metric.spec().convert);
        self.state.set(SessionState::Idle);
        *self.fields.borrow_mut() = initial_fields(defaults);
        MetricSwitch::Reset
    }

    /// 한 쪽 입력란 텍스트가 바뀌었을 때 호출한다. 반대쪽 입력란을 다시 계산한다.
    ///
    /// 계산 중에 들어온 호출이면 입력란을 건드리지 않고 `None`을 돌려준다.
    pub fn on_value_edited(&self, side: Side, text: &str) -> Option<FieldUpdate> {
        let Some(_guard) = ConvertingGuard::acquire(&self.state) else {
            trace!("계산 중 재진입 무시: {side:?} = {text:?}");
            return None;
        };
        self.fields.borrow_mut()[side.index()].text = text.to_string();
        Some(self.recompute(side))
    }

    /// 드롭다운에서 단위를 골랐을 때 호출한다.
    ///
    /// 라벨은 항상 바꾸고, 고른 쪽을 원본으로 삼아 반대쪽을 다시 계산한다. 목록에 없는
    /// 단위면 세션을 바꾸지 않고 오류를 돌려준다.
    pub fn on_unit_selected(
        &self,
        side: Side,
        unit: &str,
    ) -> Result<Option<FieldUpdate>, ConversionError> {
        let unit = self
            .metric
            .get()
            .spec()
            .find_unit(unit)
            .ok_or_else(|| ConversionError::UnknownUnit(unit.to_string()))?;
        self.fields.borrow_mut()[side.index()].unit = unit;

        let Some(_guard) = ConvertingGuard::acquire(&self.state) else {
            trace!("계산 중 단위 선택, 재계산 생략: {side:?} = {unit}");
            return Ok(None);
        };
        Ok(Some(self.recompute(side)))
    }

    fn recompute(&self, source: Side) -> FieldUpdate {
        let target = source.opposite();
        let (text, from, to) = {
            let fields = self.fields.borrow();
            (
                fields[source.index()].text.clone(),
                fields[source.index()].unit,
                fields[target.index()].unit,
            )
        };

        let metric = self.metric.get();
        let (text, outcome) = match parse_input(&text) {
            None => (INVALID_INPUT.to_string(), Outcome::InvalidInput),
            Some(value) => match (self.convert.get())(value, from, to) {
                Ok(result) => (format_for_display(result), Outcome::Converted),
                Err(err) => {
                    debug!("{metric}: {err}");
                    (INVALID_INPUT.to_string(), Outcome::Unsupported(err))
                }
            },
        };
        debug!("{metric}: {from} -> {to} = {text}");

        self.write_field(target, &text);
        FieldUpdate {
            side: target,
            text,
            outcome,
        }
    }

    fn write_field(&self, side: Side, text: &str) {
        self.fields.borrow_mut()[side.index()].text = text.to_string();
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(side, text);
        }
    }
}

impl fmt::Debug for ConversionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionSession")
            .field("metric", &self.metric.get())
            .field("state", &self.state.get())
            .field("fields", &*self.fields.borrow())
            .finish_non_exhaustive()
    }
}

fn initial_fields(defaults: MetricDefaults) -> [Field; 2] {
    let text = format_for_display(defaults.value);
    [
        Field {
            unit: defaults.unit,
            text: text.clone(),
        },
        Field {
            unit: defaults.unit,
            text,
        },
    ]
}

/// 입력란 텍스트를 숫자로 해석한다.
///
/// 앞뒤 공백은 무시하고 `inf`/`nan` 표기를 받아들인다. 숫자 사이의 `_` 구분자
/// (`1_000`)도 허용한다. 아라비아-인도 숫자, 전각 숫자 같은 유니코드 십진 숫자는
/// ASCII 숫자로 바꾼 뒤 해석한다.
pub fn parse_input(text: &str) -> Option<f64> {
    let normalized = ascii_digits(text);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.contains('_') {
        return trimmed.parse().ok();
    }

    let bytes = trimmed.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            let between_digits = matches!(before, Some(c) if c.is_ascii_digit())
                && matches!(after, Some(c) if c.is_ascii_digit());
            if !between_digits {
                return None;
            }
        }
    }
    trimmed.replace('_', "").parse().ok()
}

/// 유니코드 십진 숫자(Nd) 블록의 0 코드 포인트. 각 블록은 0부터 9까지 연속이다.
const DECIMAL_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66,
    0x0BE6, 0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20,
    0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90,
    0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0,
    0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730,
    0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x16A60, 0x16AC0, 0x16B50,
    0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E950,
    0x1FBF0,
];

fn decimal_value(c: char) -> Option<u8> {
    let cp = u32::from(c);
    let idx = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = *DECIMAL_ZEROS.get(idx.checked_sub(1)?)?;
    u8::try_from(cp - zero).ok().filter(|d| *d < 10)
}

fn ascii_digits(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| decimal_value(c).map_or(c, |d| char::from(b'0' + d)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_defaults_on_both_sides() {
        let s = ConversionSession::open(Metric::Angle);
        assert_eq!(s.state(), SessionState::Idle);
        for side in [Side::First, Side::Second] {
            let f = s.field(side);
            assert_eq!(f.unit, "Degrees");
            assert_eq!(f.text, "90");
        }
    }

    #[test]
    fn parse_accepts_float_spellings() {
        assert_eq!(parse_input(" 12.5 "), Some(12.5));
        assert_eq!(parse_input("-3"), Some(-3.0));
        assert_eq!(parse_input("1e3"), Some(1000.0));
        assert_eq!(parse_input("1_000"), Some(1000.0));
        assert_eq!(parse_input("inf"), Some(f64::INFINITY));
        assert!(parse_input("nan").is_some_and(f64::is_nan));
    }

    #[test]
    fn parse_maps_unicode_decimal_digits() {
        assert_eq!(parse_input("\u{661}\u{662}"), Some(12.0));
        assert_eq!(parse_input("\u{ff11}\u{ff12}.\u{ff15}"), Some(12.5));
        assert_eq!(parse_input(" \u{661}_\u{662} "), Some(12.0));
        assert_eq!(parse_input("\u{1d7ce}"), Some(0.0));
        assert_eq!(decimal_value('\u{669}'), Some(9));
        assert_eq!(decimal_value('\u{66a}'), None);
        assert_eq!(parse_input("\u{66a}"), None);
        assert_eq!(parse_input("\u{bd}"), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input("abc"), None);
        assert_eq!(parse_input("1,5"), None);
        assert_eq!(parse_input("_1"), None);
        assert_eq!(parse_input("1__0"), None);
        assert_eq!(parse_input("1_"), None);
    }

    #[test]
    fn guard_releases_on_drop() {
        let state = Cell::new(SessionState::Idle);
        {
            let guard = ConvertingGuard::acquire(&state);
            assert!(guard.is_some());
            assert_eq!(state.get(), SessionState::Converting);
            assert!(ConvertingGuard::acquire(&state).is_none());
        }
        assert_eq!(state.get(), SessionState::Idle);
    }

    fn length_without_miles_to_feet(
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<f64, ConversionError> {
        if (from, to) == ("Miles", "Feet") {
            return Err(ConversionError::UnsupportedConversion {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        crate::conversion::convert(Metric::Length, value, from, to)
    }

    #[test]
    fn pair_without_rule_marks_opposite_invalid() {
        let s = ConversionSession::open(Metric::Length);
        s.convert.set(length_without_miles_to_feet);
        s.on_unit_selected(Side::First, "Miles").unwrap();
        s.on_unit_selected(Side::Second, "Feet").unwrap();

        let update = s.on_value_edited(Side::First, "2").unwrap();
        assert_eq!(update.side, Side::Second);
        assert_eq!(update.text, INVALID_INPUT);
        assert_eq!(
            update.outcome,
            Outcome::Unsupported(ConversionError::UnsupportedConversion {
                from: "Miles".into(),
                to: "Feet".into(),
            })
        );
        assert_eq!(s.field(Side::Second).text, INVALID_INPUT);
        assert_eq!(s.field(Side::First).text, "2");
        assert_eq!(s.state(), SessionState::Idle);

        // 반대 방향은 규칙이 있으므로 정상 계산된다
        let update = s.on_value_edited(Side::Second, "5280").unwrap();
        assert_eq!(update.outcome, Outcome::Converted);
        assert_eq!(s.field(Side::First).text, "1");
    }

    #[test]
    fn metric_switch_restores_registry_converter() {
        let s = ConversionSession::open(Metric::Length);
        s.convert.set(length_without_miles_to_feet);
        s.select_metric(Metric::Force);
        s.select_metric(Metric::Length);
        s.on_unit_selected(Side::First, "Miles").unwrap();
        s.on_unit_selected(Side::Second, "Feet").unwrap();
        let update = s.on_value_edited(Side::First, "1").unwrap();
        assert_eq!(update.text, "5280");
    }
}
