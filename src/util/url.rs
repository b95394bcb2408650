use url::Url;

use crate::{
    error::Error,
    util::encode::{aws_percent_encode_path, canonical_query_string},
};

/// Wire URL plus the two strings the signer needs from it.
pub(crate) struct ResolvedUrl {
    pub(crate) url: Url,
    pub(crate) canonical_uri: String,
    pub(crate) canonical_query_string: String,
}

/// Appends an already-encoded request path and query to `endpoint`.
///
/// A path on the endpoint itself stays as a prefix. The signed URI is the
/// wire path encoded once more.
pub(crate) fn resolve_url(
    endpoint: &Url,
    path: &str,
    query_params: &[(String, String)],
) -> Result<ResolvedUrl, Error> {
    if !endpoint.has_host() {
        return Err(Error::invalid_config("endpoint must include host"));
    }

    let prefix = endpoint.path().trim_end_matches('/');
    let separator = if path.starts_with('/') { "" } else { "/" };
    let wire_path = format!("{prefix}{separator}{path}");
    let query = canonical_query_string(query_params);

    let mut url = endpoint.clone();
    url.set_fragment(None);
    url.set_path(&wire_path);
    url.set_query((!query.is_empty()).then_some(query.as_str()));

    Ok(ResolvedUrl {
        url,
        canonical_uri: aws_percent_encode_path(&wire_path),
        canonical_query_string: query,
    })
}
