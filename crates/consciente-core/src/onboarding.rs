//! Local sign-in.
//!
//! There is no account system: signing in stores a profile, signing out
//! deletes it. A profile still carrying the default name counts as nobody
//! signed in.

use tracing::info;

use crate::error::{Result, ValidationError};
use crate::model::{Biometrics, UserProfile};
use crate::storage::{KvStore, Store};

/// How the user chose to sign in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInMethod {
    Guest,
    Email(String),
}

/// Store a fresh profile for `name`, replacing any existing one.
///
/// # Errors
/// Blank name, or blank address with [`SignInMethod::Email`].
pub fn sign_in<K: KvStore>(
    store: &Store<K>,
    name: &str,
    method: SignInMethod,
) -> Result<UserProfile> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name").into());
    }
    let email = match method {
        SignInMethod::Guest => None,
        SignInMethod::Email(address) => {
            let address = address.trim();
            if address.is_empty() {
                return Err(ValidationError::MissingField("email").into());
            }
            Some(address.to_string())
        }
    };

    let profile = UserProfile {
        email,
        ..UserProfile::new(name)
    };
    store.save_profile(&profile)?;
    info!(guest = profile.email.is_none(), "signed in");
    Ok(profile)
}

/// The signed-in profile, if any.
pub fn current_user<K: KvStore>(store: &Store<K>) -> Option<UserProfile> {
    Some(store.profile()).filter(UserProfile::is_signed_in)
}

pub fn sign_out<K: KvStore>(store: &Store<K>) -> Result<()> {
    store.clear_profile()?;
    info!("signed out");
    Ok(())
}

/// Register a custom category name on the profile. Returns `false` when it
/// was already present.
pub fn add_custom_action<K: KvStore>(store: &Store<K>, name: &str) -> Result<bool> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("name").into());
    }
    let mut profile = store.load_profile()?;
    if profile.custom_actions.iter().any(|a| a == name) {
        return Ok(false);
    }
    profile.custom_actions.push(name.to_string());
    store.save_profile(&profile)?;
    Ok(true)
}

/// Replace the stored biometrics.
pub fn set_biometrics<K: KvStore>(store: &Store<K>, biometrics: Biometrics) -> Result<UserProfile> {
    let mut profile = store.load_profile()?;
    profile.biometrics = Some(biometrics);
    store.save_profile(&profile)?;
    Ok(profile)
}
