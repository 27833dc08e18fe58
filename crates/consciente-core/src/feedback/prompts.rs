//! Spanish prompt templates for the coach.

use indoc::formatdoc;

use crate::model::{EntryDetails, JournalEntry};

/// Number of most recent entries fed into the weekly summary.
pub const WEEKLY_WINDOW: usize = 10;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Sí"
    } else {
        "No"
    }
}

/// Category-specific description of one entry.
fn entry_context(entry: &JournalEntry) -> String {
    match &entry.details {
        EntryDetails::Boundary {
            tiredness_level,
            body_sensation,
            thought,
            context_reaction,
        } => formatdoc! {"
            El usuario ha registrado un momento de límite (\"Hasta aquí llegué\").
            Nivel de cansancio (1-10): {tiredness_level}
            Sensación corporal: {body_sensation}
            Pensamiento: {thought}
            Reacción del entorno: {context_reaction}
        ",
            tiredness_level = tiredness_level,
            body_sensation = body_sensation,
            thought = thought,
            context_reaction = context_reaction,
        },
        EntryDetails::Physical {
            did_activity,
            transformation_note,
        } => formatdoc! {"
            El usuario ha registrado actividad física.
            ¿Realizó la actividad?: {done}
            Impacto en la transformación (sentir/pensar/hacer): {transformation_note}
        ",
            done = yes_no(*did_activity),
            transformation_note = transformation_note,
        },
        EntryDetails::Audio {
            listened,
            emotion,
            body_sensation,
            thought,
        } => formatdoc! {"
            El usuario ha registrado la escucha de un audio del coach.
            ¿Escuchado?: {heard}
            Emoción/Sensación/Pensamiento al escuchar: {emotion}
            Sensación corporal: {body_sensation}
            Pensamiento: {thought}
        ",
            heard = yes_no(*listened),
            emotion = emotion,
            body_sensation = body_sensation,
            thought = thought,
        },
        EntryDetails::Custom {
            custom_category_name,
            transformation_note,
        } => formatdoc! {"
            Categoría personalizada: {custom_category_name}
            Notas: {transformation_note}
        ",
            custom_category_name = custom_category_name,
            transformation_note = transformation_note,
        },
    }
}

/// Prompt asking for short somatic-coaching feedback on one entry.
pub fn entry_prompt(entry: &JournalEntry) -> String {
    formatdoc! {"
        Actúa como un Coach Personal experto en coaching somático y ontológico.
        Analiza la siguiente entrada del diario del usuario y proporciona un feedback breve, empático y constructivo (máximo 80 palabras).
        Concéntrate en validar sus sentimientos, reforzar el establecimiento de límites saludables y la conexión cuerpo-mente.

        Entrada del usuario:
        {context}
        Respuesta (en español):
    ", context = entry_context(entry)}
}

/// Prompt asking for a motivational summary of the most recent entries.
///
/// `entries` is expected newest first; only the first [`WEEKLY_WINDOW`] are
/// included.
pub fn weekly_prompt(entries: &[JournalEntry]) -> serde_json::Result<String> {
    let recent = &entries[..entries.len().min(WEEKLY_WINDOW)];
    let serialized = serde_json::to_string(recent)?;
    Ok(formatdoc! {"
        Eres un Coach Personal. Revisa estos últimos registros del usuario y dame una conclusión general sobre su progreso en poner límites (\"decir no\"), su conexión corporal y su disciplina.
        Sé motivador. (Máximo 100 palabras).

        Registros: {serialized}
    ", serialized = serialized})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_prompt_carries_fields() {
        let entry = JournalEntry::new(EntryDetails::Boundary {
            tiredness_level: 8,
            body_sensation: "hombros tensos".into(),
            thought: "no puedo más".into(),
            context_reaction: "sorpresa".into(),
        });
        let prompt = entry_prompt(&entry);
        assert!(prompt.contains("Nivel de cansancio (1-10): 8"));
        assert!(prompt.contains("hombros tensos"));
        assert!(prompt.contains("máximo 80 palabras"));
        assert!(prompt.trim_end().ends_with("Respuesta (en español):"));
    }

    #[test]
    fn physical_prompt_renders_yes_no() {
        let entry = JournalEntry::new(EntryDetails::Physical {
            did_activity: false,
            transformation_note: "descansé".into(),
        });
        assert!(entry_prompt(&entry).contains("¿Realizó la actividad?: No"));
    }

    #[test]
    fn custom_prompt_uses_category_name_and_note() {
        let entry = JournalEntry::new(EntryDetails::Custom {
            custom_category_name: "Meditación".into(),
            transformation_note: "10 minutos".into(),
        });
        let prompt = entry_prompt(&entry);
        assert!(prompt.contains("Categoría personalizada: Meditación"));
        assert!(prompt.contains("Notas: 10 minutos"));
    }

    #[test]
    fn weekly_prompt_keeps_only_the_latest_ten() {
        let entries: Vec<_> = (0..12)
            .map(|i| {
                JournalEntry::new(EntryDetails::Custom {
                    custom_category_name: format!("cat-{i:02}"),
                    transformation_note: String::new(),
                })
            })
            .collect();
        let prompt = weekly_prompt(&entries).unwrap();
        assert!(prompt.contains("cat-09"));
        assert!(!prompt.contains("cat-10"));
        assert!(prompt.contains("Máximo 100 palabras"));
    }
}
