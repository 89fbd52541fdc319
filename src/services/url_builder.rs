// OPAC Search URL Builder
// Rewrites the `request` query parameter of a catalog URL template.
// Everything else in the template (path session id, pds_handle, find_code, find_base)
// is carried over untouched.

use url::Url;

use crate::types::errors::SearchError;

/// Query parameter that carries the search term.
pub const SEARCH_PARAM: &str = "request";

/// Trims `input` and rejects it when nothing is left.
pub fn normalize_term(input: &str) -> Result<&str, SearchError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyTerm);
    }
    Ok(trimmed)
}

/// Parses `template`, mapping parser failures to `MalformedTemplate`.
pub fn parse_template(template: &str) -> Result<Url, SearchError> {
    Url::parse(template).map_err(|e| SearchError::MalformedTemplate {
        template: template.to_string(),
        reason: e.to_string(),
    })
}

/// Builds the catalog search URL for `term` from `template`.
///
/// The first `request` pair is overwritten in place and any later ones are
/// dropped; when the template has none, `request=<term>` is appended. All
/// other pairs keep their order and decoded values. The query is written
/// back form-urlencoded, so spaces become `+` and non-ASCII text is
/// percent-encoded as UTF-8.
pub fn build_search_url(template: &str, term: &str) -> Result<String, SearchError> {
    let mut url = parse_template(template)?;

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (key, value) in url.query_pairs() {
        if key == SEARCH_PARAM {
            if !replaced {
                pairs.push((key.into_owned(), term.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if !replaced {
        pairs.push((SEARCH_PARAM.to_string(), term.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);

    Ok(url.to_string())
}
