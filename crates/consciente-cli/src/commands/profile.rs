use clap::Subcommand;
use consciente_core::model::Biometrics;
use consciente_core::onboarding::{add_custom_action, set_biometrics};

use super::{print_json, signed_in_store, CmdResult};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile
    Show,
    /// Track a custom category
    AddAction {
        name: String,
    },
    /// Replace the stored body data
    Biometrics {
        #[arg(long, default_value = "")]
        age: String,
        #[arg(long, default_value = "")]
        height: String,
        #[arg(long, default_value = "")]
        weight: String,
        #[arg(long, default_value = "")]
        gender: String,
        #[arg(long, default_value = "")]
        activity_level: String,
    },
}

pub fn run(action: ProfileAction, json: bool) -> CmdResult {
    let (store, user) = signed_in_store()?;
    match action {
        ProfileAction::Show => {
            if json {
                return print_json(&user);
            }
            println!("Nombre: {}", user.name);
            if let Some(email) = &user.email {
                println!("Email:  {email}");
            }
            if let Some(bio) = &user.biometrics {
                let fields = [
                    ("Edad", &bio.age),
                    ("Altura", &bio.height),
                    ("Peso", &bio.weight),
                    ("Género", &bio.gender),
                    ("Actividad", &bio.activity_level),
                ];
                for (label, value) in fields.iter().filter(|(_, v)| !v.is_empty()) {
                    println!("{label}: {value}");
                }
            }
            if !user.custom_actions.is_empty() {
                println!("Categorías propias: {}", user.custom_actions.join(", "));
            }
        }
        ProfileAction::AddAction { name } => {
            let added = add_custom_action(&store, &name)?;
            if json {
                return print_json(&store.profile());
            }
            if added {
                println!("Categoría añadida: {}", name.trim());
            } else {
                println!("La categoría ya existe: {}", name.trim());
            }
        }
        ProfileAction::Biometrics {
            age,
            height,
            weight,
            gender,
            activity_level,
        } => {
            let profile = set_biometrics(
                &store,
                Biometrics {
                    age,
                    height,
                    weight,
                    gender,
                    activity_level,
                },
            )?;
            if json {
                print_json(&profile)?;
            } else {
                println!("Datos actualizados.");
            }
        }
    }
    Ok(())
}
