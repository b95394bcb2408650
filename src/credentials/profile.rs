//! Shared config and credentials files (`~/.aws/credentials`, `~/.aws/config`).

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{auth::Credentials, error::Error};

type Sections = HashMap<String, HashMap<String, String>>;

pub(crate) fn profile_from_env() -> String {
    std::env::var("AWS_PROFILE")
        .or_else(|_| std::env::var("AWS_DEFAULT_PROFILE"))
        .unwrap_or_else(|_| "default".to_string())
}

/// Non-credential settings read from the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProfileSettings {
    pub(crate) region: Option<String>,
    pub(crate) endpoint_url: Option<String>,
    pub(crate) use_fips: Option<bool>,
    pub(crate) use_dual_stack: Option<bool>,
}

struct ProfileFiles {
    credentials: Sections,
    config: Sections,
}

impl ProfileFiles {
    fn load(require_credentials: bool) -> Result<Self, Error> {
        let credentials = match credentials_path() {
            Ok(path) if require_credentials || path.exists() => read_ini_file(&path)?,
            _ => HashMap::new(),
        };
        let config = match config_path() {
            Ok(path) if path.exists() => read_ini_file(&path)?,
            _ => HashMap::new(),
        };
        Ok(Self {
            credentials,
            config,
        })
    }

    /// Looks in the credentials file first, then in the config file.
    fn get(&self, profile: &str, key: &str) -> Option<String> {
        lookup(&self.credentials, profile, key)
            .or_else(|| lookup(&self.config, &config_section(profile), key))
    }
}

fn config_section(profile: &str) -> String {
    if profile == "default" {
        "default".to_string()
    } else {
        format!("profile {profile}")
    }
}

pub(crate) fn load_profile_credentials(profile: &str) -> Result<Credentials, Error> {
    let files = ProfileFiles::load(true)?;

    let access_key_id = files
        .get(profile, "aws_access_key_id")
        .or_else(|| files.get(profile, "aws_access_key"))
        .ok_or_else(|| Error::invalid_config("missing aws_access_key_id in profile"))?;
    let secret_access_key = files
        .get(profile, "aws_secret_access_key")
        .or_else(|| files.get(profile, "aws_secret_key"))
        .ok_or_else(|| Error::invalid_config("missing aws_secret_access_key in profile"))?;

    let mut creds = Credentials::new(access_key_id, secret_access_key)?;
    if let Some(token) = files.get(profile, "aws_session_token") {
        creds = creds.with_session_token(token)?;
    }

    Ok(creds)
}

pub(crate) fn load_profile_settings(profile: &str) -> Result<ProfileSettings, Error> {
    let files = ProfileFiles::load(false)?;
    Ok(settings_from(&files.config, &config_section(profile)))
}

fn settings_from(config: &Sections, section: &str) -> ProfileSettings {
    ProfileSettings {
        region: lookup(config, section, "region"),
        endpoint_url: lookup(config, section, "endpoint_url"),
        use_fips: lookup(config, section, "use_fips_endpoint").and_then(|v| parse_bool(&v)),
        use_dual_stack: lookup(config, section, "use_dualstack_endpoint")
            .and_then(|v| parse_bool(&v)),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// `override_var` if set, else `~/.aws/<file_name>`.
fn shared_file(override_var: &str, file_name: &str) -> Result<PathBuf, Error> {
    if let Some(path) = std::env::var_os(override_var) {
        return Ok(PathBuf::from(path));
    }
    ["HOME", "USERPROFILE"]
        .into_iter()
        .find_map(std::env::var_os)
        .map(|home| PathBuf::from(home).join(".aws").join(file_name))
        .ok_or_else(|| Error::invalid_config("cannot determine home dir"))
}

fn credentials_path() -> Result<PathBuf, Error> {
    shared_file("AWS_SHARED_CREDENTIALS_FILE", "credentials")
}

fn config_path() -> Result<PathBuf, Error> {
    shared_file("AWS_CONFIG_FILE", "config")
}

fn read_ini_file(path: &Path) -> Result<Sections, Error> {
    std::fs::read_to_string(path)
        .map(|contents| parse_ini(&contents))
        .map_err(|e| {
            Error::invalid_config(format!(
                "failed to read AWS profile file {}: {e}",
                path.display()
            ))
        })
}

/// Keys are lowercased. Lines before the first section header are dropped.
fn parse_ini(contents: &str) -> Sections {
    let mut sections = Sections::new();
    let mut section = None::<&str>;

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with(['#', ';']) {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = Some(header.trim()).filter(|name| !name.is_empty());
            continue;
        }
        let (Some(section), Some((key, value))) = (
            section,
            line.split_once('=').or_else(|| line.split_once(':')),
        ) else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        sections
            .entry(section.to_owned())
            .or_default()
            .insert(key.to_ascii_lowercase(), value.trim().to_owned());
    }

    sections
}

fn lookup(map: &Sections, section: &str, key: &str) -> Option<String> {
    let value = map.get(section)?.get(key)?.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
; comment
[default]
region = us-west-2
aws_access_key_id = AKID
aws_secret_access_key= SECRET
aws_session_token: TOKEN

[profile gov]
region = us-gov-west-1
use_fips_endpoint = true
use_dualstack_endpoint = 0
endpoint_url = http://localhost:4566

ignored = outside
"#;

    #[test]
    fn parses_ini_sections_and_keys() {
        let parsed = parse_ini(CONFIG);

        assert_eq!(
            lookup(&parsed, "default", "aws_access_key_id").as_deref(),
            Some("AKID")
        );
        assert_eq!(
            lookup(&parsed, "default", "aws_session_token").as_deref(),
            Some("TOKEN")
        );
        assert!(lookup(&parsed, "default", "ignored").is_none());
    }

    #[test]
    fn reads_settings_from_named_profile() {
        let parsed = parse_ini(CONFIG);

        let gov = settings_from(&parsed, &config_section("gov"));
        assert_eq!(gov.region.as_deref(), Some("us-gov-west-1"));
        assert_eq!(gov.use_fips, Some(true));
        assert_eq!(gov.use_dual_stack, Some(false));
        assert_eq!(gov.endpoint_url.as_deref(), Some("http://localhost:4566"));

        let default = settings_from(&parsed, &config_section("default"));
        assert_eq!(default.region.as_deref(), Some("us-west-2"));
        assert_eq!(default.use_fips, None);
    }

    #[test]
    fn file_lookup_prefers_credentials_file() {
        let files = ProfileFiles {
            credentials: parse_ini("[dev]\naws_access_key_id = FROM_CREDS\n"),
            config: parse_ini(
                "[profile dev]\naws_access_key_id = FROM_CONFIG\naws_secret_access_key = S\n",
            ),
        };
        assert_eq!(
            files.get("dev", "aws_access_key_id").as_deref(),
            Some("FROM_CREDS")
        );
        assert_eq!(files.get("dev", "aws_secret_access_key").as_deref(), Some("S"));
    }

    #[test]
    fn parses_boolean_settings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" false "), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }
}
