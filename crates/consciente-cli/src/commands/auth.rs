use clap::Subcommand;
use consciente_core::onboarding::{current_user, sign_in, sign_out, SignInMethod};
use consciente_core::Store;

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in as guest, or with an email address
    Login {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address; omit to sign in as guest
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove the local profile
    Logout,
    /// Show who is signed in
    Status,
}

pub fn run(action: AuthAction, json: bool) -> CmdResult {
    let store = Store::open()?;
    match action {
        AuthAction::Login { name, email } => {
            let method = match email {
                Some(address) => SignInMethod::Email(address),
                None => SignInMethod::Guest,
            };
            let profile = sign_in(&store, &name, method)?;
            if json {
                print_json(&profile)?;
            } else {
                println!("Hola, {}.", profile.name);
            }
        }
        AuthAction::Logout => {
            sign_out(&store)?;
            if !json {
                println!("Sesión cerrada.");
            }
        }
        AuthAction::Status => match current_user(&store) {
            Some(profile) if json => print_json(&profile)?,
            Some(profile) => match &profile.email {
                Some(email) => println!("{} <{email}>", profile.name),
                None => println!("{} (invitado)", profile.name),
            },
            None if json => println!("null"),
            None => println!("Sin sesión iniciada."),
        },
    }
    Ok(())
}
