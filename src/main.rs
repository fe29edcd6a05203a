use ace_events::app::{self, Application};
use ace_events::cli::{Cli, Commands, ConfigActions};
use ace_events::config::{self, Config};
use ace_events::schedule::{each_day, parse_event_date, DayKey, ScheduleDraft};
use ace_events::validation::validate_event;
use ace_events::wizard::Step;
use ace_events::EventDraft;
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

const LOG_LEVEL_ENV: &str = "ACE_EVENTS_LOG_LEVEL";

fn main() -> Result<()> {
    let default_level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli);

    match cli.command {
        None => Application::new(Config::load()?).run(),
        Some(Commands::Wizard { load }) => {
            let config = Config::load()?;
            let mut application = match load {
                Some(path) => Application::with_draft(config, app::load_draft(&path)?),
                None => Application::new(config),
            };
            application.run()
        }
        Some(Commands::Validate { file, step, json }) => {
            let config = Config::load()?;
            let draft = app::load_draft(&file)?;
            let mut issues = validate_event(&draft, &config.limits());
            if let Some(step) = step.map(Step::from) {
                issues.retain(|issue| step.owns(issue));
            }
            info!("{} issue(s) in {}", issues.len(), file.display());

            if json {
                println!("{}", serde_json::to_string_pretty(&issues)?);
            } else {
                app::print_issues(&issues);
            }
            if !issues.is_empty() {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Days { start, end }) => {
            let start = parse_event_date(&start)?;
            let end = parse_event_date(&end)?;
            for day in each_day(start, end)? {
                println!("{}", day);
            }
            Ok(())
        }
        Some(Commands::Template {
            start,
            end,
            uniform,
        }) => {
            let start = match start {
                Some(s) => parse_event_date(&s)?,
                None => DayKey::today(),
            };
            let end = match end {
                Some(s) => parse_event_date(&s)?,
                None => start,
            };
            let mut draft = EventDraft {
                schedule: ScheduleDraft {
                    start_date: start.to_string(),
                    end_date: end.to_string(),
                    same_time_for_all_dates: uniform,
                    ..ScheduleDraft::default()
                },
                ..EventDraft::default()
            };
            if !uniform {
                // Surface a reversed range instead of printing an empty map
                each_day(start, end)?;
                draft.schedule.reconcile_days();
            }
            println!("{}", draft.to_json_pretty()?);
            Ok(())
        }
        Some(Commands::Config { action }) => match action {
            ConfigActions::Show => {
                let config = Config::load()?;
                println!("{}", toml::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigActions::Path => {
                println!("{}", config::get_config_path()?.display());
                Ok(())
            }
            ConfigActions::Reset => {
                Config::default()
                    .save()
                    .context("Failed to reset configuration")?;
                println!("Configuration reset to defaults.");
                Ok(())
            }
        },
    }
}
