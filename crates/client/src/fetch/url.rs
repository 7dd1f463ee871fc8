//! Provider base URL canonicalization and endpoint layout.

use url::Url;

use super::FetchError;

/// Canonicalize the provider base URL so endpoints can be joined onto it.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Require an http or https scheme
/// 3. Lowercase the host
/// 4. Remove query and fragment
/// 5. Ensure the path ends with `/`
pub fn canonicalize_base(input: &str) -> Result<Url, FetchError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(FetchError::InvalidUrl("empty URL".into()));
    }

    let mut parsed = Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(FetchError::InvalidUrl(format!("unsupported scheme: {scheme}"))),
    }

    if let Some(host) = parsed.host_str() {
        let host = host.to_lowercase();
        parsed
            .set_host(Some(&host))
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    }

    parsed.set_query(None);
    parsed.set_fragment(None);

    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }

    Ok(parsed)
}

/// Endpoint for the most recent comic.
pub fn latest_url(base: &Url) -> Result<Url, FetchError> {
    base.join("info.0.json").map_err(|e| FetchError::InvalidUrl(e.to_string()))
}

/// Endpoint for a comic by identifier.
pub fn comic_url(base: &Url, id: u32) -> Result<Url, FetchError> {
    base.join(&format!("{id}/info.0.json"))
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))
}
