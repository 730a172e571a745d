use crate::calendar::WeekStart;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Provider {
    Email,
    Google,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct Settings {
    pub(crate) theme: Theme,
    pub(crate) notifications: bool,
    pub(crate) week_starts_on: WeekStart,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            theme: Theme::Auto,
            notifications: true,
            week_starts_on: WeekStart::Monday,
        }
    }
}

/// What the auth provider knows about the signed-in user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Identity {
    pub(crate) uid: String,
    pub(crate) email: String,
    pub(crate) display_name: Option<String>,
    pub(crate) photo_url: Option<String>,
}

impl Identity {
    /// The stand-in identity used while the tracker runs against a local
    /// data file instead of the hosted service.
    pub(crate) fn local() -> Identity {
        Identity {
            uid: "local".to_owned(),
            email: "local@stickercal".to_owned(),
            display_name: None,
            photo_url: None,
        }
    }
}

/// The per-user profile document.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct UserProfile {
    pub(crate) uid: String,
    pub(crate) email: String,
    pub(crate) display_name: Option<String>,
    pub(crate) photo_url: Option<String>,
    pub(crate) provider: Provider,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) updated_at: OffsetDateTime,
    #[serde(default)]
    pub(crate) settings: Settings,
}

impl UserProfile {
    /// Write-is-an-upsert: a missing profile is created with default
    /// settings, while an existing one only has its mutable identity fields
    /// merged in.  `created_at` and `settings` survive the merge.
    pub(crate) fn upsert(
        existing: Option<UserProfile>,
        identity: &Identity,
        provider: Provider,
        now: OffsetDateTime,
    ) -> UserProfile {
        match existing {
            Some(profile) => UserProfile {
                uid: identity.uid.clone(),
                email: identity.email.clone(),
                display_name: identity.display_name.clone(),
                photo_url: identity.photo_url.clone(),
                provider,
                updated_at: now,
                ..profile
            },
            None => UserProfile {
                uid: identity.uid.clone(),
                email: identity.email.clone(),
                display_name: identity.display_name.clone(),
                photo_url: identity.photo_url.clone(),
                provider,
                created_at: now,
                updated_at: now,
                settings: Settings::default(),
            },
        }
    }
}
