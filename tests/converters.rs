//! 물리량별 변환기 동작 테스트.
use std::f64::consts::PI;

use universal_convert::conversion::{convert, default_unit, default_value, list_units, ConversionError};
use universal_convert::metric::Metric;
use universal_convert::units::{
    convert_data_storage, convert_length, convert_time, DataStorageUnit, LengthUnit, MetricUnit,
    TimeUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn temperature_reference_points() {
    assert_eq!(convert(Metric::Temperature, 0.0, "Celsius", "Fahrenheit").unwrap(), 32.0);
    assert_eq!(convert(Metric::Temperature, 100.0, "Celsius", "Kelvin").unwrap(), 373.15);
    assert_eq!(convert(Metric::Temperature, -40.0, "Fahrenheit", "Celsius").unwrap(), -40.0);
    assert_close(
        "0K in °F",
        convert(Metric::Temperature, 0.0, "Kelvin", "Fahrenheit").unwrap(),
        -459.67,
        1e-12,
    );
}

#[test]
fn length_reference_points() {
    assert_eq!(convert(Metric::Length, 1.0, "Miles", "Feet").unwrap(), 5280.0);
    assert_eq!(convert_length(1.0, LengthUnit::Kilometers, LengthUnit::Meters).unwrap(), 1000.0);
}

#[test]
fn angle_half_turn() {
    let r = convert(Metric::Angle, 180.0, "Degrees", "Radians").unwrap();
    assert_close("180° in rad", r, PI, 1e-15);
}

#[test]
fn identity_holds_for_every_listed_unit() {
    for metric in Metric::ALL {
        for unit in list_units(metric) {
            for v in [0.0, -3.75, 1e-9, 42.0, 6.02e23] {
                let got = convert(metric, v, unit, unit).unwrap();
                assert_eq!(got, v, "{metric}: {unit} -> {unit}");
            }
        }
    }
}

#[test]
fn every_ordered_pair_has_a_rule() {
    for metric in Metric::ALL {
        let units = list_units(metric);
        for from in &units {
            for to in &units {
                assert!(
                    convert(metric, 1.0, from, to).is_ok(),
                    "{metric}: {from} -> {to} missing"
                );
            }
        }
    }
}

#[test]
fn unit_lists_keep_display_order() {
    assert_eq!(
        list_units(Metric::Angle),
        [
            "Degrees",
            "Radians",
            "Milliradians",
            "Gradians",
            "Seconds of Arc",
            "Minutes of Arc"
        ]
    );
    assert_eq!(list_units(Metric::DataStorage).len(), 11);
    assert_eq!(list_units(Metric::Time).len(), 12);
    assert_eq!(list_units(Metric::Volume).len(), 13);
    assert_eq!(list_units(Metric::Length)[0], "Millimeters");
    assert_eq!(TimeUnit::ALL.len(), 12);
}

#[test]
fn defaults_match_menu() {
    assert_eq!(default_unit(Metric::Angle), "Degrees");
    assert_eq!(default_value(Metric::Angle), 90.0);
    assert_eq!(default_unit(Metric::Temperature), "Celsius");
    assert_eq!(default_value(Metric::Temperature), 25.0);
    assert_eq!(default_unit(Metric::Speed), "Metres per Second");
    assert_eq!(default_unit(Metric::DataStorage), "Kilobits");
}

#[test]
fn factors_are_not_forced_to_be_reciprocal() {
    // Kilobits -> Mebibits 는 1048.58로 나누고, 역방향은 1048.58을 곱한다.
    let there =
        convert_data_storage(1.0, DataStorageUnit::Kilobits, DataStorageUnit::Mebibits).unwrap();
    assert_eq!(there, 1.0 / 1048.58);
    let back = convert_data_storage(there, DataStorageUnit::Mebibits, DataStorageUnit::Kilobits)
        .unwrap();
    assert_eq!(back, (1.0 / 1048.58) * 1048.58);

    // Megabits -> Kibibits(×976.563)와 Kibibits -> Megabits(÷976.563)
    let kib = convert(Metric::DataStorage, 1.0, "Megabits", "Kibibits").unwrap();
    assert_eq!(kib, 976.563);
    assert_close("1 Mb in Kib exact", kib, 1e6 / 1024.0, 1e-6);
}

#[test]
fn months_use_calendar_average() {
    let days = convert_time(1.0, TimeUnit::Months, TimeUnit::Days).unwrap();
    assert_close("1 month in days", days, 30.4167, 1e-9);
    let years = convert(Metric::Time, 1.0, "Centuries", "Years").unwrap();
    assert_eq!(years, 100.0);
}

#[test]
fn names_outside_the_metric_are_rejected() {
    let err = convert(Metric::Speed, 1.0, "Knots", "Meters").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("Meters".into()));
    let err = convert(Metric::Area, 1.0, "square metres", "Acres").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("square metres".into()));
}
