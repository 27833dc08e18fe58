pub mod alarms;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod entry;
pub mod history;
pub mod profile;

use consciente_core::onboarding::current_user;
use consciente_core::{Event, Store, UserProfile};
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the store and make sure somebody is signed in.
pub fn signed_in_store() -> Result<(Store, UserProfile), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = current_user(&store)
        .ok_or("no hay una sesión iniciada; usa `consciente auth login --name <nombre>`")?;
    Ok((store, user))
}

/// Run a future to completion on a fresh runtime.
pub fn block_on<F: std::future::Future>(future: F) -> Result<F::Output, std::io::Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(future);
    // A pending stdin read would otherwise hold the process open.
    runtime.shutdown_background();
    Ok(output)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line per event; compact JSON in `--json` mode.
pub fn print_event(event: &Event, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string(event)?);
        return Ok(());
    }
    match event {
        Event::AlarmTriggered { label, minute, .. } => {
            println!("[{minute}] {label} (Enter para descartar)")
        }
        Event::AlarmDismissed { automatic, .. } => {
            if *automatic {
                println!("Notificación descartada automáticamente.")
            } else {
                println!("Notificación descartada.")
            }
        }
        Event::EntrySaved { category, .. } => println!("Registro guardado ({category})."),
        Event::FeedbackAttached { .. } => {}
    }
    Ok(())
}
