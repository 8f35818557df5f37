//! 양방향 변환 세션 시나리오 테스트.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use universal_convert::conversion::ConversionError;
use universal_convert::metric::{Metric, MetricDefaults};
use universal_convert::session::{
    ConversionSession, MetricSwitch, Outcome, SessionState, Side, INVALID_INPUT,
};

#[test]
fn editing_first_field_updates_second() {
    let s = ConversionSession::open(Metric::Temperature);
    s.on_unit_selected(Side::Second, "Fahrenheit").unwrap();

    let update = s.on_value_edited(Side::First, "100").unwrap();
    assert_eq!(update.side, Side::Second);
    assert_eq!(update.text, "212");
    assert_eq!(update.outcome, Outcome::Converted);
    assert_eq!(s.field(Side::Second).text, "212");
    assert_eq!(s.field(Side::First).text, "100");
    assert_eq!(s.state(), SessionState::Idle);
}

#[test]
fn editing_second_field_updates_first() {
    let s = ConversionSession::open(Metric::Length);
    s.on_unit_selected(Side::First, "Feet").unwrap();
    s.on_unit_selected(Side::Second, "Miles").unwrap();

    let update = s.on_value_edited(Side::Second, "2").unwrap();
    assert_eq!(update.side, Side::First);
    assert_eq!(update.text, "10560");
}

#[test]
fn non_numeric_text_marks_opposite_invalid() {
    let s = ConversionSession::open(Metric::Mass);
    assert_eq!(s.state(), SessionState::Idle);

    let update = s.on_value_edited(Side::First, "12kg").unwrap();
    assert_eq!(update.outcome, Outcome::InvalidInput);
    assert_eq!(s.field(Side::Second).text, INVALID_INPUT);
    // 편집한 쪽 텍스트는 그대로 둔다
    assert_eq!(s.field(Side::First).text, "12kg");
    assert_eq!(s.state(), SessionState::Idle);

    // 다음 편집은 정상 처리된다
    let update = s.on_value_edited(Side::First, "3").unwrap();
    assert_eq!(update.text, "3");
}

#[test]
fn unit_selection_reruns_in_direction_of_selected_side() {
    let s = ConversionSession::open(Metric::Frequency);
    s.on_value_edited(Side::First, "5").unwrap();

    // 두 번째 단위를 고르면 second -> first 로 다시 계산한다
    let update = s.on_unit_selected(Side::Second, "Kilohertz").unwrap().unwrap();
    assert_eq!(update.side, Side::First);
    assert_eq!(s.field(Side::Second).unit, "Kilohertz");
    assert_eq!(s.field(Side::First).text, "5000");

    // 첫 번째 단위를 고르면 first -> second
    let update = s.on_unit_selected(Side::First, "Megahertz").unwrap().unwrap();
    assert_eq!(update.side, Side::Second);
    assert_eq!(s.field(Side::Second).text, "5000000");
}

#[test]
fn unknown_unit_selection_leaves_session_untouched() {
    let s = ConversionSession::open(Metric::Force);
    let before = (s.field(Side::First), s.field(Side::Second));
    let err = s.on_unit_selected(Side::First, "Pounds").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("Pounds".into()));
    assert_eq!((s.field(Side::First), s.field(Side::Second)), before);
    assert_eq!(s.state(), SessionState::Idle);
}

#[test]
fn reentrant_edit_during_conversion_is_dropped() {
    let s = Rc::new(ConversionSession::open(Metric::Length));
    s.on_unit_selected(Side::Second, "Centimeters").unwrap();

    let writes = Rc::new(Cell::new(0u32));
    let dropped = Rc::new(Cell::new(0u32));
    let seen_state = Rc::new(RefCell::new(Vec::new()));
    {
        let weak = Rc::downgrade(&s);
        let writes = Rc::clone(&writes);
        let dropped = Rc::clone(&dropped);
        let seen_state = Rc::clone(&seen_state);
        // UI 텍스트 변경 바인딩: 세션이 쓴 값이 다시 편집 이벤트로 돌아온다
        s.set_listener(move |side, text| {
            writes.set(writes.get() + 1);
            if let Some(session) = weak.upgrade() {
                seen_state.borrow_mut().push(session.state());
                if session.on_value_edited(side, text).is_none() {
                    dropped.set(dropped.get() + 1);
                }
                // 같은 칸에 연달아 들어온 두 번째 편집도 버려진다
                if session.on_value_edited(side.opposite(), "999").is_none() {
                    dropped.set(dropped.get() + 1);
                }
            }
        });
    }

    let update = s.on_value_edited(Side::First, "2").unwrap();
    assert_eq!(update.text, "200");
    assert_eq!(writes.get(), 1, "recompute must run once per cycle");
    assert_eq!(dropped.get(), 2);
    assert_eq!(*seen_state.borrow(), vec![SessionState::Converting]);
    assert_eq!(s.state(), SessionState::Idle);
    // 버려진 편집은 입력란을 바꾸지 않는다
    assert_eq!(s.field(Side::First).text, "2");
    assert_eq!(s.field(Side::Second).text, "200");

    // 다음 사이클은 다시 처리된다
    s.clear_listener();
    assert!(s.on_value_edited(Side::Second, "50").is_some());
    assert_eq!(s.field(Side::First).text, "0.5");
}

#[test]
fn unit_label_changes_even_when_recompute_is_dropped() {
    let s = Rc::new(ConversionSession::open(Metric::Pressure));
    let reselected = Rc::new(Cell::new(None));
    {
        let weak = Rc::downgrade(&s);
        let reselected = Rc::clone(&reselected);
        s.set_listener(move |_, _| {
            if let Some(session) = weak.upgrade() {
                reselected.set(Some(session.on_unit_selected(Side::First, "Bars").unwrap().is_none()));
            }
        });
    }
    s.on_value_edited(Side::Second, "1").unwrap();
    assert_eq!(reselected.get(), Some(true));
    assert_eq!(s.field(Side::First).unit, "Bars");
    assert_eq!(s.state(), SessionState::Idle);
}

#[test]
fn guard_is_released_after_every_outcome() {
    let s = ConversionSession::open(Metric::Volume);
    for text in ["1", "", "abc", "-2.5", "1e400"] {
        assert!(s.on_value_edited(Side::First, text).is_some(), "{text:?} dropped");
        assert_eq!(s.state(), SessionState::Idle);
    }
}

#[test]
fn reopening_same_metric_keeps_fields() {
    let s = ConversionSession::open(Metric::Speed);
    s.on_unit_selected(Side::Second, "Knots").unwrap();
    s.on_value_edited(Side::First, "10").unwrap();
    let before = (s.field(Side::First), s.field(Side::Second));

    assert_eq!(s.select_metric(Metric::Speed), MetricSwitch::Resumed);
    assert_eq!((s.field(Side::First), s.field(Side::Second)), before);
}

#[test]
fn switching_metric_resets_fields_to_defaults() {
    let s = ConversionSession::open(Metric::Speed);
    s.on_unit_selected(Side::Second, "Knots").unwrap();
    s.on_value_edited(Side::First, "10").unwrap();

    assert_eq!(s.select_metric(Metric::Angle), MetricSwitch::Reset);
    assert_eq!(s.metric(), Metric::Angle);
    assert_eq!(s.state(), SessionState::Idle);
    for side in [Side::First, Side::Second] {
        let f = s.field(side);
        assert_eq!(f.unit, "Degrees");
        assert_eq!(f.text, "90");
    }

    let custom = MetricDefaults {
        unit: "Pounds",
        value: 2.5,
    };
    assert_eq!(s.select_metric_with(Metric::Mass, custom), MetricSwitch::Reset);
    assert_eq!(s.field(Side::Second).unit, "Pounds");
    assert_eq!(s.field(Side::Second).text, "2.5");
}

#[test]
fn long_results_are_formatted_for_display() {
    let s = ConversionSession::open(Metric::DataStorage);
    s.on_unit_selected(Side::First, "Terabytes").unwrap();
    s.on_unit_selected(Side::Second, "Bits").unwrap();
    let update = s.on_value_edited(Side::First, "3").unwrap();
    assert_eq!(update.text, "2.400000e+13");
}

#[test]
fn listener_may_unbind_itself() {
    let s = Rc::new(ConversionSession::open(Metric::Length));
    let calls = Rc::new(Cell::new(0u32));
    {
        let weak = Rc::downgrade(&s);
        let calls = Rc::clone(&calls);
        s.set_listener(move |_, _| {
            calls.set(calls.get() + 1);
            if let Some(session) = weak.upgrade() {
                session.clear_listener();
            }
        });
    }

    let update = s.on_value_edited(Side::First, "2").unwrap();
    assert_eq!(update.text, "2");
    assert_eq!(calls.get(), 1);
    assert_eq!(s.state(), SessionState::Idle);

    // 해제된 뒤에는 알림이 없다
    s.on_value_edited(Side::First, "3").unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn listener_may_replace_itself() {
    let s = Rc::new(ConversionSession::open(Metric::Mass));
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let weak = Rc::downgrade(&s);
        let seen = Rc::clone(&seen);
        s.set_listener(move |_, text| {
            seen.borrow_mut().push(format!("old {text}"));
            if let Some(session) = weak.upgrade() {
                let seen = Rc::clone(&seen);
                session.set_listener(move |_, text| seen.borrow_mut().push(format!("new {text}")));
            }
        });
    }

    s.on_value_edited(Side::First, "4").unwrap();
    s.on_value_edited(Side::First, "5").unwrap();
    assert_eq!(*seen.borrow(), vec!["old 4".to_string(), "new 5".to_string()]);
}
