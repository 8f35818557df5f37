//! 고정 폭 입력란에 맞추기 위한 결과 문자열 포맷.

/// 입력란에 표시할 수 있는 최대 숫자 개수.
pub const MAX_DIGITS: usize = 12;

/// 변환 결과를 12자리 입력란에 맞게 문자열로 만든다.
///
/// 소수점 이하 12자리 고정소수점으로 적은 뒤 끝의 0과 소수점을 지운다. 부호와
/// 소수점을 뺀 숫자 개수가 12개 이하면 그대로 쓰고, 넘으면 유효숫자 7자리 지수
/// 표기(`1.234568e+15`)를 앞 12글자에서 자른다. 자르기는 반올림이 아니어서 지수가
/// 세 자리일 때는 끝자리가 잘린다.
pub fn format_for_display(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    let fixed = format!("{value:.12}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if digits <= MAX_DIGITS {
        return trimmed.to_string();
    }

    scientific(value).chars().take(MAX_DIGITS).collect()
}

/// 가수 소수점 이하 6자리, 부호와 최소 두 자리를 갖는 지수 표기.
fn scientific(value: f64) -> String {
    let raw = format!("{value:.6e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        None => raw,
    }
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "nan"
    } else if value > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}
