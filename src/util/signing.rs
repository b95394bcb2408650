//! SigV4 header signing.
//!
//! Every service here signs the double-encoded request path with the
//! service's signing name, which is not always its endpoint prefix
//! (`memorydb` vs `memory-db`, `aps` vs `amp`).

use std::{collections::BTreeMap, fmt};

use hmac::{Hmac, Mac as _};
use http::{HeaderMap, HeaderValue, Method};
use sha2::{Digest as _, Sha256};
use time::OffsetDateTime;

use crate::{
    auth::{Credentials, Region},
    error::Error,
    util::url::ResolvedUrl,
};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

#[derive(Clone, Copy)]
pub(crate) struct SigV4Params<'a> {
    region: &'a Region,
    service: &'a str,
    credentials: &'a Credentials,
    now: OffsetDateTime,
}

impl<'a> SigV4Params<'a> {
    /// `service` is the signing name, which may differ from the endpoint prefix.
    pub(crate) fn new(
        region: &'a Region,
        service: &'a str,
        credentials: &'a Credentials,
        now: OffsetDateTime,
    ) -> Self {
        Self {
            region,
            service,
            credentials,
            now,
        }
    }

    fn scope(&self) -> Scope<'a> {
        Scope {
            date: date_stamp(self.now),
            region: self.region.as_str(),
            service: self.service,
        }
    }
}

/// `<date>/<region>/<service>/aws4_request`
struct Scope<'a> {
    date: String,
    region: &'a str,
    service: &'a str,
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/aws4_request", self.date, self.region, self.service)
    }
}

impl Scope<'_> {
    fn signing_key(&self, secret_access_key: &str) -> Result<Vec<u8>, Error> {
        let mut key = format!("AWS4{secret_access_key}").into_bytes();
        for part in [
            self.date.as_bytes(),
            self.region.as_bytes(),
            self.service.as_bytes(),
            b"aws4_request",
        ] {
            key = hmac_sha256(&key, part)?;
        }
        Ok(key)
    }
}

pub(crate) fn payload_hash(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

/// Adds `x-amz-date`, the session token, `host` and `authorization`.
pub(crate) fn sign_headers(
    method: &Method,
    resolved: &ResolvedUrl,
    headers: &mut HeaderMap,
    payload_hash: &str,
    params: SigV4Params<'_>,
) -> Result<(), Error> {
    let amz_date = amz_datetime(params.now);
    insert(headers, "x-amz-date", &amz_date)?;
    if let Some(token) = params.credentials.session_token() {
        insert(headers, "x-amz-security-token", token)?;
    }
    insert(headers, "host", &host_header(&resolved.url)?)?;

    let signed = signed_header_values(headers);
    let signed_names = signed.keys().map(String::as_str).collect::<Vec<_>>().join(";");
    let canonical_headers: String = signed
        .iter()
        .map(|(name, value)| format!("{name}:{value}\n"))
        .collect();

    let canonical_request = [
        method.as_str(),
        &resolved.canonical_uri,
        &resolved.canonical_query_string,
        &canonical_headers,
        &signed_names,
        payload_hash,
    ]
    .join("\n");

    let scope = params.scope();
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
        payload_hash_str(&canonical_request)
    );
    let key = scope.signing_key(&params.credentials.secret_access_key)?;
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes())?);

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_names}, Signature={signature}",
        params.credentials.access_key_id()
    );
    insert(headers, "authorization", &authorization)
}

fn payload_hash_str(value: &str) -> String {
    payload_hash(value.as_bytes())
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<(), Error> {
    let value = HeaderValue::from_str(value)
        .map_err(|_| Error::signing(format!("invalid {name} header value")))?;
    headers.insert(name, value);
    Ok(())
}

/// `host[:port]`, omitting the scheme's default port.
fn host_header(url: &url::Url) -> Result<String, Error> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::invalid_config("endpoint must include host"))?;
    Ok(match url.port() {
        Some(port) if Some(port) != default_port(url.scheme()) => format!("{host}:{port}"),
        _ => host.to_string(),
    })
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Lowercased name to normalized value for every header that is signed.
///
/// Repeated headers are joined with `,`.
fn signed_header_values(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut signed = BTreeMap::<String, String>::new();
    for (name, value) in headers {
        let name = name.as_str();
        if !is_signed_header(name) {
            continue;
        }
        let Ok(value) = value.to_str() else {
            continue;
        };
        let value = collapse_whitespace(value);
        signed
            .entry(name.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    signed
}

fn is_signed_header(name: &str) -> bool {
    matches!(name, "host" | "content-type" | "content-md5") || name.starts_with("x-amz-")
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(key).map_err(|_| Error::signing("invalid HMAC key"))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn date_stamp(now: OffsetDateTime) -> String {
    format!("{:04}{:02}{:02}", now.year(), u8::from(now.month()), now.day())
}

fn amz_datetime(now: OffsetDateTime) -> String {
    format!(
        "{}T{:02}{:02}{:02}Z",
        date_stamp(now),
        now.hour(),
        now.minute(),
        now.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::url::resolve_url;

    const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

    fn fixture() -> (Region, Credentials, OffsetDateTime) {
        (
            Region::new("us-east-1").unwrap(),
            Credentials::new("AKIDEXAMPLE", SECRET).unwrap(),
            OffsetDateTime::from_unix_timestamp(1_440_938_160).unwrap(),
        )
    }

    fn header<'h>(headers: &'h HeaderMap, name: &str) -> &'h str {
        headers.get(name).unwrap().to_str().unwrap()
    }

    #[test]
    fn matches_get_vanilla_test_vector() {
        let (region, creds, now) = fixture();
        let endpoint = url::Url::parse("https://example.amazonaws.com").unwrap();
        let resolved = resolve_url(&endpoint, "/", &[]).unwrap();

        let mut headers = HeaderMap::new();
        sign_headers(
            &Method::GET,
            &resolved,
            &mut headers,
            &payload_hash(b""),
            SigV4Params::new(&region, "service", &creds, now),
        )
        .unwrap();

        assert_eq!(header(&headers, "x-amz-date"), "20150830T123600Z");
        assert_eq!(
            header(&headers, "authorization"),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn signs_json_rpc_headers_with_signing_name() {
        let (region, creds, now) = fixture();
        let endpoint = url::Url::parse("https://memory-db.us-east-1.amazonaws.com").unwrap();
        let resolved = resolve_url(&endpoint, "/", &[]).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-amz-json-1.1"),
        );
        headers.insert(
            "x-amz-target",
            HeaderValue::from_static("AmazonMemoryDB.DescribeClusters"),
        );
        sign_headers(
            &Method::POST,
            &resolved,
            &mut headers,
            &payload_hash(b"{}"),
            SigV4Params::new(&region, "memorydb", &creds, now),
        )
        .unwrap();

        assert_eq!(
            header(&headers, "authorization"),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/memorydb/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date;x-amz-target, \
             Signature=b2bd02fe0377318690bebe358cb73caea516f2501993c0fec25d7a4d733a30b5"
        );
    }

    #[test]
    fn session_token_is_signed() {
        let (region, creds, now) = fixture();
        let creds = creds.with_session_token("token-1").unwrap();
        let endpoint = url::Url::parse("http://127.0.0.1:8080").unwrap();
        let resolved = resolve_url(&endpoint, "/v1/listjobs", &[]).unwrap();

        let mut headers = HeaderMap::new();
        sign_headers(
            &Method::POST,
            &resolved,
            &mut headers,
            &payload_hash(b"{}"),
            SigV4Params::new(&region, "batch", &creds, now),
        )
        .unwrap();

        assert_eq!(header(&headers, "host"), "127.0.0.1:8080");
        assert_eq!(header(&headers, "x-amz-security-token"), "token-1");
        assert!(
            header(&headers, "authorization")
                .contains("SignedHeaders=host;x-amz-date;x-amz-security-token,")
        );
    }

    #[test]
    fn whitespace_is_collapsed_and_repeats_joined() {
        let mut headers = HeaderMap::new();
        headers.append("x-amz-meta", HeaderValue::from_static("  a   b "));
        headers.append("x-amz-meta", HeaderValue::from_static("c"));
        headers.insert("user-agent", HeaderValue::from_static("awsrest"));

        let signed = signed_header_values(&headers);
        assert_eq!(signed.len(), 1);
        assert_eq!(signed["x-amz-meta"], "a b,c");
    }

    #[test]
    fn default_ports_are_omitted_from_host() {
        let https = url::Url::parse("https://aps.us-east-1.amazonaws.com:443/").unwrap();
        let custom = url::Url::parse("https://localhost:4566/").unwrap();
        assert_eq!(host_header(&https).unwrap(), "aps.us-east-1.amazonaws.com");
        assert_eq!(host_header(&custom).unwrap(), "localhost:4566");
    }
}
