//! 변환 엔진을 라이브러리로 분리하여 CLI 외의 화면 계층에서도 같은 계약으로 호출할 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod display;
pub mod metric;
pub mod session;
pub mod ui_cli;
pub mod units;
