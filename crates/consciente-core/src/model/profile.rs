use serde::{Deserialize, Serialize};

/// Name stored in the default profile; a profile carrying it is treated as
/// "nobody signed in".
pub const DEFAULT_PROFILE_NAME: &str = "Usuario";

/// Optional body data captured during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biometrics {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub activity_level: String,
}

/// The single local user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometrics: Option<Biometrics>,
    /// Names of the custom categories the user tracks.
    #[serde(default)]
    pub custom_actions: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            email: None,
            biometrics: None,
            custom_actions: Vec::new(),
        }
    }
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_signed_in(&self) -> bool {
        !self.name.trim().is_empty() && self.name != DEFAULT_PROFILE_NAME
    }
}
