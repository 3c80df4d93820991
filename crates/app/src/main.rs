use std::env;
use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quickscope_core::model::ContentItem;
use services::{AppServices, DEFAULT_SOURCE, WaitlistConfig, WaitlistError, WaitlistService};
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidRoute { raw: String },
    InvalidWaitlistUrl { raw: String, source: WaitlistError },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidRoute { raw } => {
                write!(f, "invalid --route value: {raw} (expected landing or pitch)")
            }
            ArgsError::InvalidWaitlistUrl { raw, source } => {
                write!(f, "invalid --waitlist-url value: {raw} ({source})")
            }
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidWaitlistUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    start_on_pitch: bool,
}

impl UiApp for DesktopApp {
    fn start_on_pitch(&self) -> bool {
        self.start_on_pitch
    }

    fn waitlist(&self) -> Arc<WaitlistService> {
        self.services.waitlist()
    }

    fn headlines(&self) -> Arc<Vec<ContentItem>> {
        self.services.headlines()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartRoute {
    Landing,
    Pitch,
}

impl StartRoute {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "landing" | "/" => Some(Self::Landing),
            "pitch" | "/pitch" => Some(Self::Pitch),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    waitlist: Option<WaitlistConfig>,
    route: StartRoute,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--waitlist-url <url>] [--route landing|pitch]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --route landing");
    eprintln!("  waitlist submissions disabled unless a URL is configured");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUICKSCOPE_WAITLIST_URL, QUICKSCOPE_WAITLIST_SOURCE, RUST_LOG");
}

impl Args {
    /// Returns `None` when usage was requested.
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut waitlist = WaitlistConfig::from_env();
        let mut route = StartRoute::Landing;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--waitlist-url" => {
                    let value = require_value(args, "--waitlist-url")?;
                    let source = env::var("QUICKSCOPE_WAITLIST_SOURCE")
                        .unwrap_or_else(|_| DEFAULT_SOURCE.into());
                    let config = WaitlistConfig::new(&value, source)
                        .map_err(|source| ArgsError::InvalidWaitlistUrl { raw: value, source })?;
                    waitlist = Some(config);
                }
                "--route" => {
                    let value = require_value(args, "--route")?;
                    route = StartRoute::from_arg(&value)
                        .ok_or(ArgsError::InvalidRoute { raw: value })?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { waitlist, route }))
    }
}

/// Used when `RUST_LOG` is unset. Targets are the workspace crate names.
const DEFAULT_LOG_FILTER: &str = "info,quickscope_core=debug,services=debug,ui=debug,app=debug";

fn init_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    match &parsed.waitlist {
        Some(config) => info!(endpoint = %config.endpoint, "waitlist submissions enabled"),
        None => info!("waitlist submissions disabled"),
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: AppServices::new(parsed.waitlist),
        start_on_pitch: parsed.route == StartRoute::Pitch,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("QuickScope")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Args>, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn route_flag_accepts_names_and_paths() {
        let args = parse(&["--route", "pitch"]).unwrap().unwrap();
        assert_eq!(args.route, StartRoute::Pitch);
        let args = parse(&["--route", "/"]).unwrap().unwrap();
        assert_eq!(args.route, StartRoute::Landing);
    }

    #[test]
    fn waitlist_url_flag_builds_config() {
        let args = parse(&["--waitlist-url", "https://forms.example.com/submit"])
            .unwrap()
            .unwrap();
        let config = args.waitlist.expect("config");
        assert_eq!(config.endpoint.as_str(), "https://forms.example.com/submit");
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            parse(&["--route", "settings"]),
            Err(ArgsError::InvalidRoute { .. })
        ));
        assert!(matches!(
            parse(&["--waitlist-url", "ftp://example.com"]),
            Err(ArgsError::InvalidWaitlistUrl { .. })
        ));
        assert!(matches!(
            parse(&["--waitlist-url"]),
            Err(ArgsError::MissingValue { flag: "--waitlist-url" })
        ));
        assert!(matches!(parse(&["--db"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn help_requests_usage() {
        assert!(parse(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn default_filter_enables_debug_for_every_workspace_crate() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        for target in ["quickscope_core", "services", "ui", "app"] {
            let directive = format!("{target}=debug");
            assert!(
                DEFAULT_LOG_FILTER.split(',').any(|part| part == directive),
                "{target} missing from {DEFAULT_LOG_FILTER}"
            );
        }
    }
}
