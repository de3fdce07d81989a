use std::io;
use std::process;

use clap::{ArgAction, CommandFactory, Parser};

use config::{CliArgs, Config, Verbosity};
#[cfg(windows)]
use inspect::Inspector;
use inspect::InspectOptions;
use platform::WindowHandle;
#[cfg(windows)]
use platform::win32::Win32WindowSystem;

mod config;
mod inspect;
mod platform;

#[derive(Parser, Debug)]
#[command(version, about = "Report diagnostic information about GUI windows", long_about = None)]
struct Args {
    /// Wait for each window to become the foreground window before
    /// reporting; with no windows given, report every foreground change
    #[arg(long)]
    fore: bool,

    /// Only show brief info
    #[arg(long)]
    brief: bool,

    /// Milliseconds between foreground polls
    #[arg(long, value_name = "MS")]
    poll_interval: Option<u64>,

    /// Increase diagnostic logging on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Window handles, in hexadecimal
    #[arg(value_name = "HWND", value_parser = parse_handle)]
    windows: Vec<WindowHandle>,
}

/// Parse a hexadecimal window-handle token. Zero and the extreme values
/// that C-style hex parsers return for overflow are rejected alongside
/// unparseable tokens.
fn parse_handle(token: &str) -> Result<WindowHandle, String> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    match i64::from_str_radix(digits, 16) {
        Ok(0) | Ok(i64::MAX) | Ok(i64::MIN) | Err(_) => {
            Err(format!("unrecognized window handle: {token}"))
        }
        Ok(raw) => Ok(WindowHandle::from_raw(raw as isize)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RunPlan {
    Inspect(Vec<WindowHandle>),
    WaitForeground(Vec<WindowHandle>),
    MonitorForeground,
}

fn resolve_plan(fore: bool, windows: Vec<WindowHandle>) -> RunPlan {
    if fore {
        if windows.is_empty() {
            RunPlan::MonitorForeground
        } else {
            RunPlan::WaitForeground(windows)
        }
    } else {
        RunPlan::Inspect(windows)
    }
}

fn parse_args() -> Args {
    if std::env::args_os().len() < 2 {
        eprintln!("{}", Args::command().render_help());
        process::exit(1);
    }

    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            use clap::error::ErrorKind;
            let _ = err.print();
            // Usage problems and explicit help requests both exit
            // nonzero; only a version request is a normal exit.
            if err.kind() == ErrorKind::DisplayVersion {
                process::exit(0);
            }
            process::exit(1);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let args = parse_args();

    let cli = CliArgs {
        brief: args.brief,
        poll_interval_ms: args.poll_interval,
        verbosity: Verbosity::from_count(args.verbose),
    };

    let config = match Config::load(Some(&cli)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            process::exit(1);
        }
    };

    let plan = resolve_plan(args.fore, args.windows);
    run(plan, config.to_inspect_options()).await
}

#[cfg(windows)]
async fn run(plan: RunPlan, options: InspectOptions) -> io::Result<()> {
    let system = Win32WindowSystem::new();
    let stdout = io::stdout();
    let mut inspector = Inspector::new(&system, stdout.lock(), options);

    match plan {
        RunPlan::Inspect(targets) => {
            for target in targets {
                inspector.inspect(target)?;
            }
        }
        RunPlan::WaitForeground(targets) => {
            for target in targets {
                inspector.wait_foreground(target).await?;
            }
        }
        RunPlan::MonitorForeground => inspector.monitor_foreground().await?,
    }

    Ok(())
}

#[cfg(not(windows))]
async fn run(_plan: RunPlan, _options: InspectOptions) -> io::Result<()> {
    eprintln!("hwnd-inspector reads Win32 window state and only runs on Windows");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handle_valid_hex() {
        assert_eq!(
            parse_handle("1a0432").unwrap(),
            WindowHandle::from_raw(0x1a0432)
        );
        assert_eq!(
            parse_handle("0x1a0432").unwrap(),
            WindowHandle::from_raw(0x1a0432)
        );
    }

    #[test]
    fn test_parse_handle_rejects_zero() {
        assert!(parse_handle("0").is_err());
        assert!(parse_handle("0x0").is_err());
    }

    #[test]
    fn test_parse_handle_rejects_overflow_sentinels() {
        assert!(parse_handle("7fffffffffffffff").is_err());
        assert!(parse_handle("8000000000000000").is_err());
    }

    #[test]
    fn test_parse_handle_rejects_garbage() {
        assert!(parse_handle("xyz").is_err());
        assert!(parse_handle("").is_err());
        assert!(parse_handle("12345678901234567890").is_err());
    }

    #[test]
    fn test_unrecognized_option_is_a_parse_error() {
        assert!(Args::try_parse_from(["hwnd-inspector", "--bogus"]).is_err());
        assert!(Args::try_parse_from(["hwnd-inspector", "-z"]).is_err());
    }

    #[test]
    fn test_flags_and_handles_parse_together() {
        let args =
            Args::try_parse_from(["hwnd-inspector", "--fore", "--brief", "1a0b", "2c3d"]).unwrap();
        assert!(args.fore);
        assert!(args.brief);
        assert_eq!(
            args.windows,
            vec![
                WindowHandle::from_raw(0x1a0b),
                WindowHandle::from_raw(0x2c3d)
            ]
        );
    }

    #[test]
    fn test_fore_without_targets_monitors() {
        assert_eq!(resolve_plan(true, vec![]), RunPlan::MonitorForeground);
    }

    #[test]
    fn test_fore_with_targets_waits_in_order() {
        let a = WindowHandle::from_raw(0xa);
        let b = WindowHandle::from_raw(0xb);
        assert_eq!(
            resolve_plan(true, vec![a, b]),
            RunPlan::WaitForeground(vec![a, b])
        );
    }

    #[test]
    fn test_no_fore_inspects_in_order() {
        let a = WindowHandle::from_raw(0xa);
        let b = WindowHandle::from_raw(0xb);
        assert_eq!(resolve_plan(false, vec![a, b]), RunPlan::Inspect(vec![a, b]));
    }
}
