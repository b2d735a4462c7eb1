use anyhow::Result;
use backtrace::Backtrace;
use log::{LevelFilter, debug, error};
use std::io::Write;
use std::panic;
use std::process::ExitCode;
use wine_cn_fonts::t;

fn main() -> Result<ExitCode> {
    // 初始化日志
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{}] {}",
                level_style.value(record.level()),
                record.args()
            )
        })
        .init();

    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::new();
        error!("{}", t!(error_occurred, error = info.to_string()));
        debug!("{:?}", backtrace);
    }));

    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    let code = run(args)?;
    Ok(ExitCode::from(code))
}

#[cfg(windows)]
fn run(args: impl Iterator<Item = String>) -> Result<u8> {
    use wine_cn_fonts::app;
    use wine_cn_fonts::registry::windows::WinRegistry;

    let mut registry = WinRegistry::new();
    let stdout = std::io::stdout();
    let code = app::run(&mut registry, args, &mut stdout.lock())?;
    Ok(code)
}

#[cfg(not(windows))]
fn run(_args: impl Iterator<Item = String>) -> Result<u8> {
    error!("{}", t!(unsupported_platform));
    Ok(wine_cn_fonts::app::EXIT_USAGE)
}
