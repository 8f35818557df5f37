use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::metric::Metric;
use crate::session::{ConversionSession, Outcome, Side};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Metric(Metric),
    Exit,
    /// 입력 스트림이 끝남
    EndOfInput,
}

/// 대화형 화면의 입출력. 테스트에서는 메모리 버퍼를 넣는다.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    /// 물리량 제목에 강조 색상(ANSI 24비트)을 쓸지 정한다.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn heading(&self, metric: Metric) -> String {
        let title = format!("=== {} ===", metric.title());
        if !self.color {
            return title;
        }
        let c = metric.spec().color;
        format!("\x1b[1;38;2;{};{};{}m{title}\x1b[0m", c.0, c.1, c.2)
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(con: &mut Console<R, W>) -> Result<MenuChoice, AppError> {
    con.say("\n=== Universal Convert ===")?;
    for (i, m) in Metric::ALL.iter().enumerate() {
        con.say(&format!("{:>2}) {}", i + 1, m.title()))?;
    }
    con.say(" 0) 종료")?;
    loop {
        let Some(sel) = con.read_line("메뉴 선택: ")? else {
            return Ok(MenuChoice::EndOfInput);
        };
        let sel = sel.trim();
        if sel == "0" {
            return Ok(MenuChoice::Exit);
        }
        if let Some(metric) = map_metric(sel) {
            return Ok(MenuChoice::Metric(metric));
        }
        con.say("잘못된 입력입니다. 다시 선택하세요.")?;
    }
}

/// 번호(1부터) 또는 물리량 이름으로 메뉴 항목을 찾는다.
fn map_metric(sel: &str) -> Option<Metric> {
    match sel.parse::<usize>() {
        Ok(n) if (1..=Metric::ALL.len()).contains(&n) => Some(Metric::ALL[n - 1]),
        Ok(_) => None,
        Err(_) => Metric::from_name(sel),
    }
}

/// 종료 확인. `y`면 `true`, 입력이 끝나도 `true`.
pub fn confirm_exit<R: BufRead, W: Write>(con: &mut Console<R, W>) -> Result<bool, AppError> {
    let answer = con.read_line("정말 종료할까요? (y/n): ")?;
    Ok(match answer {
        None => true,
        Some(a) => matches!(a.trim().to_lowercase().as_str(), "y" | "yes"),
    })
}

/// 변환 화면. 사용자가 돌아가기를 고르거나 입력이 끝날 때까지 반복한다.
pub fn conversion_screen<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    session: &ConversionSession,
) -> Result<(), AppError> {
    let heading = con.heading(session.metric());
    con.say(&format!("\n{heading}"))?;
    print_help(con)?;
    loop {
        print_fields(con, session)?;
        let Some(line) = con.read_line("> ")? else {
            return Ok(());
        };
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "1" => edit_value(con, session, Side::First, rest)?,
            "2" => edit_value(con, session, Side::Second, rest)?,
            "u1" => pick_unit(con, session, Side::First)?,
            "u2" => pick_unit(con, session, Side::Second)?,
            "b" | "back" => return Ok(()),
            "?" | "help" => print_help(con)?,
            _ => con.say("알 수 없는 명령입니다. ?로 도움말을 봅니다.")?,
        }
    }
}

fn print_help<R: BufRead, W: Write>(con: &mut Console<R, W>) -> Result<(), AppError> {
    con.say("명령: 1 <값> | 2 <값> | u1 | u2 (단위 선택) | b (메뉴로) | ? (도움말)")
}

fn print_fields<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    session: &ConversionSession,
) -> Result<(), AppError> {
    for (label, side) in [("1", Side::First), ("2", Side::Second)] {
        let f = session.field(side);
        con.say(&format!(" [{label}] {:<14} {}", f.text, f.unit))?;
    }
    Ok(())
}

fn edit_value<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    session: &ConversionSession,
    side: Side,
    text: &str,
) -> Result<(), AppError> {
    if let Some(update) = session.on_value_edited(side, text) {
        report(con, &update.outcome)?;
    }
    Ok(())
}

fn pick_unit<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    session: &ConversionSession,
    side: Side,
) -> Result<(), AppError> {
    let units = session.metric().spec().units();
    for (i, u) in units.iter().enumerate() {
        con.say(&format!("{:>3}) {u}", i + 1))?;
    }
    let Some(sel) = con.read_line("단위 선택: ")? else {
        return Ok(());
    };
    let sel = sel.trim();
    let unit = match sel.parse::<usize>() {
        Ok(n) if (1..=units.len()).contains(&n) => units[n - 1],
        _ => sel,
    };
    match session.on_unit_selected(side, unit) {
        Ok(Some(update)) => report(con, &update.outcome),
        Ok(None) => Ok(()),
        Err(err) => con.say(&format!("{err}")),
    }
}

fn report<R: BufRead, W: Write>(con: &mut Console<R, W>, outcome: &Outcome) -> Result<(), AppError> {
    match outcome {
        Outcome::Converted | Outcome::InvalidInput => Ok(()),
        Outcome::Unsupported(err) => con.say(&format!("단위 변환 오류: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_accepts_number_or_name() {
        assert_eq!(map_metric("1"), Some(Metric::Angle));
        assert_eq!(map_metric("12"), Some(Metric::Volume));
        assert_eq!(map_metric("13"), None);
        assert_eq!(map_metric("speed"), Some(Metric::Speed));
    }

    #[test]
    fn heading_is_plain_without_color() {
        let con = Console::new(&b""[..], Vec::new());
        assert_eq!(con.heading(Metric::Mass), "=== Mass ===");
        let con = con.with_color(true);
        assert!(con.heading(Metric::Mass).starts_with("\x1b[1;38;2;170;56;141m"));
    }
}
