use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;
use universal_convert::app::{self, AppError};
use universal_convert::config::{self, Config, DEFAULT_CONFIG_FILE};
use universal_convert::metric::Metric;
use universal_convert::ui_cli::Console;

/// Universal Convert - 물리량별 단위 변환기
#[derive(Parser, Debug)]
#[command(name = "universal_convert")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// 로그 상세도 (0=warn, 1=info, 2=debug, 3=trace). RUST_LOG가 있으면 그쪽이 우선한다.
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// 제목에 색상을 쓰지 않는다
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 지원하는 물리량 목록
    Metrics,
    /// 물리량의 단위 목록
    Units {
        metric: Metric,
    },
    /// 값 하나를 변환해 출력한다
    Convert {
        metric: Metric,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// 12자리 표시 포맷 대신 전체 정밀도로 출력
        #[arg(long)]
        raw: bool,
    },
    /// 기본 설정 파일을 만든다
    InitConfig {
        /// 이미 있으면 덮어쓴다
        #[arg(long)]
        force: bool,
    },
}

/// 프로그램의 엔트리 포인트. 로거와 설정을 준비한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    match cli.command {
        Some(Command::Metrics) => app::print_metrics(&mut stdout),
        Some(Command::Units { metric }) => app::print_units(&mut stdout, metric),
        Some(Command::Convert {
            metric,
            value,
            from,
            to,
            raw,
        }) => {
            let out = app::convert_once(metric, value, &from, &to, raw)?;
            writeln!(stdout, "{out} {to}")?;
            Ok(())
        }
        Some(Command::InitConfig { force }) => {
            if cli.config.exists() && !force {
                writeln!(stdout, "{} 이미 존재함 (--force로 덮어쓰기)", cli.config.display())?;
                return Ok(());
            }
            Config::default().save(&cli.config)?;
            writeln!(stdout, "{} 생성", cli.config.display())?;
            Ok(())
        }
        None => {
            let cfg = config::load_or_default(&cli.config)?;
            debug!("설정: {cfg:?}");
            let color = !cli.no_color && io::stdout().is_terminal();
            drop(stdout);
            let mut con = Console::new(io::stdin().lock(), io::stdout()).with_color(color);
            app::run(&cfg, &mut con)
        }
    }
}
