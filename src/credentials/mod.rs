#[cfg(feature = "credentials-profile")]
pub(crate) mod profile;
