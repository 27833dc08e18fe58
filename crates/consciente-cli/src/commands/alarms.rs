use chrono::{Local, NaiveDateTime};
use clap::Subcommand;
use consciente_core::alarms::{format_12h, AlarmBook, AlarmScheduler, NotificationSink, Period, TerminalSink};
use consciente_core::{Config, Event, Store};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use super::{block_on, print_event, print_json, signed_in_store, CmdResult};

#[derive(Subcommand)]
pub enum AlarmsAction {
    /// List reminders
    List,
    /// Add a reminder, e.g. `add 7:30 PM "Escuchar audio"`
    Add {
        /// 12-hour time as h:mm
        time: String,
        /// AM or PM
        period: Period,
        /// What to remind
        label: String,
    },
    /// Delete a reminder
    Remove {
        id: String,
    },
    /// Turn a reminder on or off
    Toggle {
        id: String,
    },
    /// Run one scheduler poll and print what fired
    Check {
        /// Local time to poll at (YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
    /// Keep polling and announce reminders until Ctrl-C; Enter dismisses
    Watch,
}

fn parse_clock(time: &str) -> Result<(u8, u8), String> {
    let (h, m) = time
        .split_once(':')
        .ok_or_else(|| format!("invalid time '{time}', expected h:mm"))?;
    let hour = h.trim().parse().map_err(|_| format!("invalid hour in '{time}'"))?;
    let minute = m.trim().parse().map_err(|_| format!("invalid minute in '{time}'"))?;
    Ok((hour, minute))
}

pub fn run(action: AlarmsAction, json: bool) -> CmdResult {
    let (store, _user) = signed_in_store()?;
    let book = AlarmBook::new(&store);

    match action {
        AlarmsAction::List => {
            let alarms = book.list();
            if json {
                return print_json(&alarms);
            }
            if alarms.is_empty() {
                println!("No tienes alarmas configuradas.");
            }
            for alarm in alarms {
                let display = format_12h(&alarm.time).unwrap_or_else(|| alarm.time.clone());
                let state = if alarm.active { "on " } else { "off" };
                println!("{}  [{state}] {display:>8}  {}", alarm.id, alarm.label);
            }
        }
        AlarmsAction::Add {
            time,
            period,
            label,
        } => {
            let (hour, minute) = parse_clock(&time)?;
            let alarm = book.add(hour, minute, period, &label)?;
            if json {
                print_json(&alarm)?;
            } else {
                println!("Alarma creada: {} ({})", alarm.label, alarm.id);
            }
        }
        AlarmsAction::Remove { id } => {
            let alarm = book.remove(&id)?;
            if json {
                print_json(&alarm)?;
            } else {
                println!("Alarma eliminada: {}", alarm.label);
            }
        }
        AlarmsAction::Toggle { id } => {
            let alarm = book.toggle(&id)?;
            if json {
                print_json(&alarm)?;
            } else {
                let state = if alarm.active { "activada" } else { "desactivada" };
                println!("Alarma {state}: {}", alarm.label);
            }
        }
        AlarmsAction::Check { at } => {
            let now = at.unwrap_or_else(|| Local::now().naive_local());
            let mut scheduler = AlarmScheduler::new(make_sink(None, json));
            for event in scheduler.poll(&store, now) {
                print_event(&event, json)?;
            }
        }
        AlarmsAction::Watch => {
            let config = Config::load()?;
            block_on(watch(&store, &config, json))??;
        }
    }
    Ok(())
}

/// Announcements go to stderr in `--json` mode so stdout only carries events.
fn make_sink(speech_command: Option<&str>, json: bool) -> Box<dyn NotificationSink> {
    if json {
        Box::new(TerminalSink::new(std::io::stderr(), speech_command))
    } else {
        Box::new(TerminalSink::stdout(speech_command))
    }
}

async fn watch(store: &Store, config: &Config, json: bool) -> CmdResult {
    let sink = make_sink(config.alarms.speech_command.as_deref(), json);
    let mut scheduler = AlarmScheduler::with_options(sink, config.alarms.scheduler_options());
    let mut ticker = tokio::time::interval(config.alarms.poll_interval());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    info!(interval_secs = config.alarms.poll_interval_secs, "watching alarms");
    if !json {
        println!("Vigilando alarmas. Enter descarta la notificación, Ctrl-C sale.");
    }

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for event in scheduler.poll_now(store) {
                    print_event(&event, json)?;
                }
            }
            line = lines.next_line(), if stdin_open => {
                if let Some(event) = on_stdin_line(&mut scheduler, line, &mut stdin_open) {
                    print_event(&event, json)?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                if let Some(event) = scheduler.dismiss() {
                    print_event(&event, json)?;
                }
                break;
            }
        }
    }
    Ok(())
}

/// Any line on stdin dismisses the active notification. End of input or a
/// read error turns keyboard dismissal off without stopping the watch.
fn on_stdin_line<S: NotificationSink>(
    scheduler: &mut AlarmScheduler<S>,
    line: std::io::Result<Option<String>>,
    stdin_open: &mut bool,
) -> Option<Event> {
    match line {
        Ok(Some(_)) => scheduler.dismiss(),
        Ok(None) | Err(_) => {
            *stdin_open = false;
            None
        }
    }
}
