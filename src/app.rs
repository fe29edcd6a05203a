//! Interactive terminal front end for the event wizard.

use crate::command::CommandArgs;
use crate::config::Config;
use crate::event::EventDraft;
use crate::schedule::Period;
use crate::validation::Issue;
use crate::wizard::{Advance, PeriodScope, Wizard};
use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::Path;

/// Whether the loop should keep reading input
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Application {
    config: Config,
    wizard: Wizard,
}

impl Application {
    pub fn new(config: Config) -> Self {
        let wizard = Wizard::new(config.limits());
        Self { config, wizard }
    }

    pub fn with_draft(config: Config, draft: EventDraft) -> Self {
        let wizard = Wizard::with_draft(draft, config.limits());
        Self { config, wizard }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting event wizard");
        let mut rl = DefaultEditor::new()?;

        println!("Create an event. Type 'help' for commands.");
        self.print_step();

        loop {
            let prompt = format!("[{}] > ", self.wizard.step());
            match rl.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());
                    match self.process_input(&line) {
                        Ok(Flow::Exit) => break,
                        Ok(Flow::Continue) => {}
                        Err(err) => println!("Error: {}", err),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn process_input(&mut self, input: &str) -> Result<Flow> {
        let args = CommandArgs::parse(input)?;
        debug!("Processing wizard command '{}'", args.command);

        match args.command.as_str() {
            "exit" | "quit" => return Ok(Flow::Exit),
            "help" => print_help(),
            "show" => println!("{}", self.wizard.draft().to_json_pretty()?),
            "issues" => print_issues(&self.wizard.issues()),
            "set" => self.set_field(&args)?,
            "tag" => self.edit_list(&args, ListField::Tags)?,
            "gallery" => self.edit_list(&args, ListField::Gallery)?,
            "period" => self.edit_periods(&args)?,
            "days" => self.print_days(),
            "next" => self.advance(),
            "back" => {
                self.wizard.back();
                self.print_step();
            }
            "reset" => {
                self.wizard.reset();
                println!("All fields reset.");
                self.print_step();
            }
            "save" => {
                let path = args
                    .arg(0)
                    .ok_or_else(|| anyhow!("Usage: save <file.json>"))?;
                fs::write(path, self.wizard.draft().to_json_pretty()?)
                    .with_context(|| format!("Failed to write {}", path))?;
                println!("Draft saved to {}", path);
            }
            "load" => {
                let path = args
                    .arg(0)
                    .ok_or_else(|| anyhow!("Usage: load <file.json>"))?;
                let draft = load_draft(Path::new(path))?;
                self.wizard = Wizard::with_draft(draft, self.config.limits());
                println!("Draft loaded from {}", path);
                self.print_step();
            }
            other => println!(
                "Unknown command '{}'. Type 'help' for available commands.",
                other
            ),
        }
        Ok(Flow::Continue)
    }

    fn set_field(&mut self, args: &CommandArgs) -> Result<()> {
        let field = args
            .arg(0)
            .ok_or_else(|| anyhow!("Usage: set <field> <value>"))?;
        let value = args
            .args
            .get(1..)
            .map(|rest| rest.join(" "))
            .unwrap_or_default();

        match field {
            "start" | "end" => {
                let (start, end) = {
                    let schedule = &self.wizard.draft().schedule;
                    if field == "start" {
                        (value.clone(), schedule.end_date.clone())
                    } else {
                        (schedule.start_date.clone(), value.clone())
                    }
                };
                self.wizard.set_date_range(&start, &end);
            }
            "same-time" => {
                let uniform = parse_bool(&value)?;
                self.wizard.set_same_time_for_all_dates(uniform);
            }
            "price" => {
                self.wizard.draft_mut().pricing.price = value
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("Enter a valid amount"))?;
            }
            "agree" => self.wizard.draft_mut().media.agree = parse_bool(&value)?,
            _ => {
                let draft = self.wizard.draft_mut();
                let slot = match field {
                    "title" => &mut draft.basics.title,
                    "category" => &mut draft.basics.category,
                    "mode" => &mut draft.basics.mode,
                    "description" => &mut draft.basics.description,
                    "currency" => &mut draft.pricing.currency,
                    "thumbnail" => &mut draft.media.thumbnail_url,
                    "banner" => &mut draft.media.banner_url,
                    "video" => &mut draft.media.video_url,
                    other => return Err(anyhow!("Unknown field '{}'", other)),
                };
                *slot = value;
            }
        }

        self.print_field_issues(field);
        Ok(())
    }

    fn edit_list(&mut self, args: &CommandArgs, list: ListField) -> Result<()> {
        let usage = || {
            anyhow!(
                "Usage: {} add <value> | {} rm <index>",
                list.name(),
                list.name()
            )
        };
        let action = args.arg(0).ok_or_else(usage)?;
        let draft = self.wizard.draft_mut();
        let items = match list {
            ListField::Tags => &mut draft.basics.tags,
            ListField::Gallery => &mut draft.media.gallery_urls,
        };

        match action {
            "add" => items.push(args.arg(1).ok_or_else(usage)?.to_string()),
            "rm" => {
                let index: usize = args.arg(1).ok_or_else(usage)?.parse()?;
                if index >= items.len() {
                    return Err(anyhow!("No {} entry #{}", list.name(), index));
                }
                items.remove(index);
            }
            _ => return Err(usage()),
        }
        Ok(())
    }

    fn edit_periods(&mut self, args: &CommandArgs) -> Result<()> {
        let usage = || {
            anyhow!(
                "Usage: period add <all|YYYY-MM-DD> [start] [end] [--label <text>]\n       \
                 period rm <all|YYYY-MM-DD> <index>"
            )
        };
        let action = args.arg(0).ok_or_else(usage)?;
        let scope: PeriodScope = args.arg(1).ok_or_else(usage)?.parse()?;

        match action {
            "add" => {
                let defaults = &self.config.wizard;
                let start = args.arg(2).unwrap_or(&defaults.default_period_start);
                let end = args.arg(3).unwrap_or(&defaults.default_period_end);
                let mut period = Period::new(start, end);
                if let Some(label) = args.flag("label") {
                    period = period.with_label(label);
                }
                self.wizard.add_period(&scope, period)?;
            }
            "rm" => {
                let index: usize = args.arg(2).ok_or_else(usage)?.parse()?;
                let removed = self.wizard.remove_period(&scope, index)?;
                println!(
                    "Removed {}-{} from {}",
                    removed.start_time, removed.end_time, scope
                );
            }
            _ => return Err(usage()),
        }

        let field = match scope {
            PeriodScope::AllDays => "defaultPeriods",
            PeriodScope::Day(_) => "periodsByDate",
        };
        self.print_field_issues(field);
        Ok(())
    }

    fn advance(&mut self) {
        match self.wizard.next() {
            Advance::Moved(_) => self.print_step(),
            Advance::Blocked(issues) => {
                println!("Cannot continue yet:");
                print_issues(&issues);
            }
            Advance::Submitted(draft) => {
                // Hand-off point; submission itself is not part of this tool
                println!("Event '{}' is ready to publish:", draft.basics.title);
                match draft.to_json_pretty() {
                    Ok(json) => println!("{}", json),
                    Err(err) => println!("Error: {}", err),
                }
            }
        }
    }

    fn print_days(&self) {
        match self.wizard.draft().schedule.days() {
            Some(days) => {
                for day in days {
                    let count = self
                        .wizard
                        .draft()
                        .schedule
                        .periods_by_date
                        .get(&day.to_string())
                        .map_or(0, Vec::len);
                    println!("  {} ({} period(s))", day, count);
                }
            }
            None => println!("Set a valid start and end date first."),
        }
    }

    fn print_step(&self) {
        let step = self.wizard.step();
        println!("Step: {} ({:.0}%)", step, self.wizard.progress());
        if self.wizard.is_last() {
            println!("Type 'show' to review the draft and 'next' to submit.");
        } else {
            println!("Fields: {}", step.fields().join(", "));
        }
    }

    // Re-validate after an edit and show what concerns the touched field
    fn print_field_issues(&self, field: &str) {
        let root = match field {
            "start" => "startDate",
            "end" => "endDate",
            "same-time" => "sameTimeForAllDates",
            "thumbnail" => "thumbnailUrl",
            "banner" => "bannerUrl",
            "video" => "videoUrl",
            other => other,
        };
        let issues: Vec<Issue> = self
            .wizard
            .issues()
            .into_iter()
            .filter(|issue| issue.path.root() == Some(root))
            .collect();
        if !issues.is_empty() {
            print_issues(&issues);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ListField {
    Tags,
    Gallery,
}

impl ListField {
    fn name(&self) -> &'static str {
        match self {
            ListField::Tags => "tag",
            ListField::Gallery => "gallery",
        }
    }
}

pub fn load_draft(path: &Path) -> Result<EventDraft> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    EventDraft::from_json(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(anyhow!("Expected yes or no, got '{}'", other)),
    }
}

pub fn print_issues(issues: &[Issue]) {
    if issues.is_empty() {
        println!("No issues.");
        return;
    }
    for issue in issues {
        println!("  - {}", issue);
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  set <field> <value>        - title, category, mode, description, start, end,");
    println!("                               same-time, currency, price, thumbnail, banner,");
    println!("                               video, agree");
    println!("  tag add <tag> | tag rm <i> - Edit tags");
    println!("  gallery add <url> | gallery rm <i>");
    println!("  period add <all|date> [start] [end] [--label <text>]");
    println!("  period rm <all|date> <i>   - Remove a period");
    println!("  days                       - List the event's days");
    println!("  show                       - Print the draft as JSON");
    println!("  issues                     - List all validation issues");
    println!("  next / back                - Move between steps");
    println!("  reset                      - Clear all fields and start over");
    println!("  save <file> / load <file>  - Store or restore the draft");
    println!("  exit                       - Leave the wizard");
}
