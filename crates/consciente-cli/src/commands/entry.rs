use clap::Subcommand;
use consciente_core::journal::submit;
use consciente_core::{Coach, Config, EntryDetails};
use tracing::info;

use super::{block_on, print_event, print_json, signed_in_store, CmdResult};

#[derive(Subcommand)]
pub enum EntryAction {
    /// "Hasta aquí llegué": a boundary you set
    Boundary {
        /// Tiredness from 1 to 10
        #[arg(long)]
        tiredness: u8,
        /// What you felt in the body
        #[arg(long)]
        body: String,
        #[arg(long, default_value = "")]
        thought: String,
        /// How the people around you reacted
        #[arg(long, default_value = "")]
        reaction: String,
    },
    /// Physical activity
    Physical {
        /// Record that the activity was skipped
        #[arg(long)]
        skipped: bool,
        /// Impact on feeling, thinking and doing
        #[arg(long)]
        note: String,
    },
    /// A coach audio session
    Audio {
        /// Record that the audio was not listened to
        #[arg(long)]
        skipped: bool,
        #[arg(long, default_value = "")]
        emotion: String,
        #[arg(long, default_value = "")]
        body: String,
        #[arg(long, default_value = "")]
        thought: String,
    },
    /// One of your own categories
    Custom {
        /// Category name
        #[arg(long)]
        name: String,
        #[arg(long)]
        note: String,
    },
}

impl From<EntryAction> for EntryDetails {
    fn from(action: EntryAction) -> Self {
        match action {
            EntryAction::Boundary {
                tiredness,
                body,
                thought,
                reaction,
            } => EntryDetails::Boundary {
                tiredness_level: tiredness,
                body_sensation: body,
                thought,
                context_reaction: reaction,
            },
            EntryAction::Physical { skipped, note } => EntryDetails::Physical {
                did_activity: !skipped,
                transformation_note: note,
            },
            EntryAction::Audio {
                skipped,
                emotion,
                body,
                thought,
            } => EntryDetails::Audio {
                listened: !skipped,
                emotion,
                body_sensation: body,
                thought,
            },
            EntryAction::Custom { name, note } => EntryDetails::Custom {
                custom_category_name: name,
                transformation_note: note,
            },
        }
    }
}

pub fn run(action: EntryAction, json: bool) -> CmdResult {
    let (store, _user) = signed_in_store()?;
    let config = Config::load()?;
    let coach = Coach::from_config(&config.feedback);
    if !coach.is_configured() {
        info!("no API key configured, the entry gets the setup hint");
    }

    let submission = block_on(submit(&store, &coach, action.into()))??;

    if json {
        return print_json(&serde_json::json!({
            "entry": submission.entry,
            "events": submission.events,
        }));
    }
    for event in &submission.events {
        print_event(event, false)?;
    }
    if let Some(feedback) = &submission.entry.ai_feedback {
        println!("Coach: {feedback}");
    }
    Ok(())
}
