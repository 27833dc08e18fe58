//! Chronological entry listing.

use chrono::{Local, TimeZone};
use serde::Serialize;

use super::locale::long_date;
use crate::model::{EntryDetails, JournalEntry};

/// One rendered history card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItem {
    pub id: String,
    pub title: String,
    pub date: String,
    /// "Cansancio: N/10" on boundary entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Labelled detail lines, blank fields omitted.
    pub details: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Display title of an entry.
pub fn title(entry: &JournalEntry) -> &str {
    match &entry.details {
        EntryDetails::Boundary { .. } => "Límite Establecido",
        EntryDetails::Physical { .. } => "Actividad Física",
        EntryDetails::Audio { .. } => "Audio Coach",
        EntryDetails::Custom {
            custom_category_name,
            ..
        } if !custom_category_name.is_empty() => custom_category_name.as_str(),
        EntryDetails::Custom { .. } => "Registro Personalizado",
    }
}

fn details(entry: &JournalEntry) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();
    let mut push = |label: &'static str, value: Option<&str>| {
        if let Some(value) = value {
            lines.push((label, value.to_string()));
        }
    };
    push("Cuerpo", entry.body_sensation());
    push("Pensamiento", entry.thought());
    push("Reacción entorno", entry.context_reaction());
    push("Transformación", entry.transformation_note());

    if let EntryDetails::Audio {
        listened, emotion, ..
    } = &entry.details
    {
        let mut value = if *listened { "Sí" } else { "No" }.to_string();
        if !emotion.is_empty() {
            value.push_str(&format!(" ({emotion})"));
        }
        lines.push(("Escuchado", value));
    }
    lines
}

/// All entries newest first, dates in local time.
pub fn history(entries: &[JournalEntry]) -> Vec<HistoryItem> {
    history_in(entries, &Local)
}

pub fn history_in<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> Vec<HistoryItem> {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .into_iter()
        .map(|entry| HistoryItem {
            id: entry.id.clone(),
            title: title(entry).to_string(),
            date: long_date(&entry.date.with_timezone(tz)),
            badge: entry
                .tiredness_level()
                .map(|level| format!("Cansancio: {level}/10")),
            details: details(entry),
            feedback: entry.ai_feedback.clone().filter(|f| !f.is_empty()),
        })
        .collect()
}
