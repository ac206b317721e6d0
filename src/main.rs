use clap::Parser;
use lifeos::application::manage_config::CONFIG_KEYS;
use lifeos::application::{
    init, ConfigService, DashboardService, DataService, InsightsService, LogEntryService,
    PillarDetailService,
};
use lifeos::cli::{
    format_config, format_dashboard, format_entry, format_insights, format_pillar_detail, Cli,
    Commands,
};
use lifeos::domain::DateRef;
use lifeos::error::LifeosError;
use lifeos::infrastructure::{FileSystemRepository, Workspace};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// RUST_LOG wins; otherwise --verbose selects debug, and the default is warn
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn resolve_date(input: &str) -> Result<chrono::NaiveDate, LifeosError> {
    let today = chrono::Local::now().date_naive();
    Ok(DateRef::parse(input)?.resolve(today))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), LifeosError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), LifeosError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let repo = init::init(&path)?;
            println!("Initialized lifeos in {}", repo.root().display());
            Ok(())
        }
        Some(Commands::Log { date, fields }) => {
            let date = resolve_date(&date)?;
            let repo = FileSystemRepository::discover()?;
            let mut service = LogEntryService::new(repo);

            let recorded = service.record(date, &fields.to_update())?;
            let verb = if recorded.created { "Logged" } else { "Updated" };
            println!("{} {}", verb, date.format("%Y-%m-%d"));
            print!("{}", format_entry(&recorded.entry));
            Ok(())
        }
        Some(Commands::Show { date, json }) => {
            let date = resolve_date(&date)?;
            let repo = FileSystemRepository::discover()?;
            let service = LogEntryService::new(repo);

            match service.show(date)? {
                Some(entry) if json => print_json(&entry),
                Some(entry) => {
                    print!("{}", format_entry(&entry));
                    Ok(())
                }
                None => {
                    println!("No entry logged for {}", date.format("%Y-%m-%d"));
                    Ok(())
                }
            }
        }
        Some(Commands::Dashboard { compare, json }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let dashboard = DashboardService::new(repo, config).execute()?;

            if json {
                print_json(&dashboard)
            } else {
                print!("{}", format_dashboard(&dashboard, compare));
                Ok(())
            }
        }
        Some(Commands::Pillar { id, days, json }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let detail = PillarDetailService::new(repo, config).execute(&id, days)?;

            if json {
                print_json(&detail)
            } else {
                print!("{}", format_pillar_detail(&detail));
                Ok(())
            }
        }
        Some(Commands::Insights { json }) => {
            let repo = FileSystemRepository::discover()?;
            let report = InsightsService::new(repo).execute()?;

            if json {
                print_json(&report)
            } else {
                print!("{}", format_insights(&report));
                Ok(())
            }
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: lifeos config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS);
                Ok(())
            }
        }
        Some(Commands::Export { file }) => {
            let repo = FileSystemRepository::discover()?;
            let count = DataService::new(repo).export(&file)?;
            println!("Exported {} entries to {}", count, file.display());
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let repo = FileSystemRepository::discover()?;
            let summary = DataService::new(repo).import(&file)?;
            println!(
                "Imported {} entries ({} new, {} updated)",
                summary.added + summary.updated,
                summary.added,
                summary.updated
            );
            Ok(())
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                return Err(LifeosError::Config(
                    "Reset deletes every logged entry. Re-run with --yes to confirm.".to_string(),
                ));
            }
            let repo = FileSystemRepository::discover()?;
            let removed = DataService::new(repo).reset()?;
            println!("Deleted {} entries", removed);
            Ok(())
        }
        None => {
            println!("lifeos - Life pillar scores from daily logs");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
