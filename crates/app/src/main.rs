mod logging;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use passport_core::model::{RegionId, SessionContext, StampId};
use services::{AppServices, ProgressEvents, ProgressService};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://passport.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidDbUrl { raw: String },
    BlankValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::BlankValue { flag } => write!(f, "{flag} must not be blank"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::BlankValue { flag });
    }
    Ok(value)
}

fn require_number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let value = require_value(args, flag)?;
    value
        .trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw: value })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn events(&self) -> ProgressEvents {
        self.services.events()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--db <sqlite_url>] [--user <email>] [--name <display>]");
    eprintln!(
        "  cargo run -p app -- seed [--db <sqlite_url>] [--user <email>] [--name <display>] \
         [--region <id>] [--stamps <n>] [--points <n>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --stamps 1 (only with --region)");
    eprintln!("  --points 0");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PASSPORT_DB_URL, PASSPORT_USER, PASSPORT_NAME, RUST_LOG, DEBUG_LOGGING");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct SeedPlan {
    region: Option<RegionId>,
    stamps: u32,
    points: u64,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    user: Option<String>,
    name: Option<String>,
    seed: SeedPlan,
}

impl Args {
    fn from_env() -> Self {
        let env = |key: &str| std::env::var(key).ok().filter(|value| !value.trim().is_empty());
        Self {
            db_url: env("PASSPORT_DB_URL")
                .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url),
            user: env("PASSPORT_USER"),
            name: env("PASSPORT_NAME"),
            seed: SeedPlan::default(),
        }
    }

    fn parse(
        mut self,
        command: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut stamps = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    self.db_url = normalize_sqlite_url(value);
                }
                "--user" => self.user = Some(require_value(args, "--user")?),
                "--name" => self.name = Some(require_value(args, "--name")?),
                "--region" if command == Command::Seed => {
                    self.seed.region = Some(RegionId::new(require_value(args, "--region")?.trim()));
                }
                "--stamps" if command == Command::Seed => {
                    stamps = Some(require_number(args, "--stamps")?);
                }
                "--points" if command == Command::Seed => {
                    self.seed.points = require_number(args, "--points")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        self.seed.stamps = match (&self.seed.region, stamps) {
            (Some(_), stamps) => stamps.unwrap_or(1),
            (None, _) => 0,
        };
        Ok(self)
    }
}

/// Name to store when signing in from the command line.
///
/// Without `--name`, re-signing the stored user keeps their stored name, so a
/// demo account stays restricted.
fn display_name_for(
    current: &SessionContext,
    email: &str,
    name: Option<&str>,
) -> Option<String> {
    match name {
        Some(name) => Some(name.to_string()),
        None if current.user_email() == Some(email.trim()) => {
            current.display_name().map(str::to_string)
        }
        None => None,
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::from_env().parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    logging::init();

    // Open + migrate SQLite here so the library crates never touch the filesystem.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url).await?;
    tracing::info!(db = %parsed.db_url, command = ?cmd, "storage ready");

    let current = services.progress().session().await;
    let session = match parsed.user.as_deref() {
        Some(email) => {
            let name = display_name_for(&current, email, parsed.name.as_deref());
            services.passport().sign_in(email, name.as_deref()).await?
        }
        None => current,
    };

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Some desktop dev setups default to always-on-top; turn it off explicitly.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Masar Explorer Passport")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => seed(&services, &session, &parsed.seed).await,
    }
}

async fn seed(
    services: &AppServices,
    session: &SessionContext,
    plan: &SeedPlan,
) -> Result<(), Box<dyn std::error::Error>> {
    let passport = services.passport();

    if let Some(region) = plan.region.as_ref() {
        for n in 1..=plan.stamps {
            let stamp = StampId::new(format!("seed-{region}-{n}"));
            passport.record_stamp(session, region, stamp).await?;
        }
    }
    if plan.points > 0 {
        passport.add_points(session, plan.points).await?;
    }

    let home = services.progress().load_home_for(session.clone()).await;
    println!(
        "seeded {}: {}/{} stamps ({}%), {} points",
        session.user_email().unwrap_or("anonymous"),
        home.aggregate.total_collected,
        home.aggregate.total_possible,
        home.aggregate.percentage,
        home.points,
    );
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
