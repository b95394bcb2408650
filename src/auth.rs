use std::{fmt, str::FromStr};

use crate::{error::Error, util::redact::redact_value};

/// Signing region, e.g. `us-east-1`.
///
/// Only blank values are rejected here. Whether the region forms a valid
/// hostname is checked when an endpoint is resolved for it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_config("region must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Option<Self> {
        ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok())
            .find_map(|value| Self::new(value).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region({})", self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Long-term or temporary AWS access keys.
///
/// `Debug` output shows only the edges of the key id.
#[derive(Clone)]
pub struct Credentials {
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) session_token: Option<String>,
}

fn non_blank(field: &str, value: String) -> Result<String, Error> {
    if value.trim().is_empty() {
        Err(Error::invalid_config(format!("{field} must not be empty")))
    } else {
        Ok(value)
    }
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Result<Self, Error> {
        Ok(Self {
            access_key_id: non_blank("access key id", access_key_id.into())?,
            secret_access_key: non_blank("secret access key", secret_access_key.into())?,
            session_token: None,
        })
    }

    /// Attaches the session token of temporary credentials.
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Result<Self, Error> {
        self.session_token = Some(non_blank("session token", session_token.into())?);
        Ok(self)
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn is_temporary(&self) -> bool {
        self.session_token.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &redact_value(&self.access_key_id))
            .field("secret_access_key", &"<redacted>")
            .field("temporary", &self.is_temporary())
            .finish()
    }
}

/// How requests are authenticated.
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub enum Auth {
    /// Requests are sent unsigned.
    #[default]
    Anonymous,
    /// Requests are SigV4-signed with fixed credentials.
    Static(Credentials),
}

impl Auth {
    /// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and the optional
    /// `AWS_SESSION_TOKEN`.
    pub fn from_env() -> Result<Self, Error> {
        let var = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
        };
        let (Some(access_key_id), Some(secret_access_key)) =
            (var("AWS_ACCESS_KEY_ID"), var("AWS_SECRET_ACCESS_KEY"))
        else {
            return Err(Error::invalid_config(
                "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must both be set",
            ));
        };

        let creds = Credentials::new(access_key_id, secret_access_key)?;
        let creds = match var("AWS_SESSION_TOKEN") {
            Some(token) => creds.with_session_token(token)?,
            None => creds,
        };
        Ok(creds.into())
    }

    #[cfg(feature = "credentials-profile")]
    pub fn from_profile(profile: impl AsRef<str>) -> Result<Self, Error> {
        crate::credentials::profile::load_profile_credentials(profile.as_ref()).map(Self::Static)
    }

    /// Uses the profile named by `AWS_PROFILE`, or `default`.
    #[cfg(feature = "credentials-profile")]
    pub fn from_profile_env() -> Result<Self, Error> {
        Self::from_profile(crate::credentials::profile::profile_from_env())
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    pub(crate) fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Anonymous => None,
            Self::Static(creds) => Some(creds),
        }
    }
}

impl From<Credentials> for Auth {
    fn from(creds: Credentials) -> Self {
        Self::Static(creds)
    }
}
