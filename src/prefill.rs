//! Pre-selecting services from a page query string.
//!
//! A link such as `?service=UI%2FUX,Branding` opens the form with those
//! services already ticked. Labels outside the offered services are ignored,
//! and the draft is left alone when nothing matches.

use crate::domain::Service;
use crate::models::DraftInput;

/// Query parameter carrying the comma-separated service labels.
pub const SERVICE_PARAM: &str = "service";

/// Read the services named by the `service` query parameter.
///
/// Returns `None` when the parameter is missing, cannot be decoded, or names
/// no offered service.
pub fn services_from_query(query: &str) -> Option<Vec<Service>> {
    let raw = query_param(query, SERVICE_PARAM)?;

    // The value is decoded once more after the query-level decoding
    let decoded = decode_strict(&raw)?;

    let services: Vec<Service> = decoded
        .split(',')
        .map(str::trim)
        .filter_map(Service::from_label)
        .collect();

    if services.is_empty() {
        None
    } else {
        Some(services)
    }
}

/// Replace the draft's service selection with the services named in `query`.
///
/// Returns whether the draft was changed.
pub fn apply_service_prefill(draft: &mut DraftInput, query: &str) -> bool {
    match services_from_query(query) {
        Some(services) => {
            tracing::debug!("Pre-selecting {} service(s) from query", services.len());
            draft.services = Some(
                services
                    .into_iter()
                    .map(|service| service.label().to_string())
                    .collect(),
            );
            true
        }
        None => false,
    }
}

/// First value of `name` in a form-encoded query string (`+` is a space).
fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_form_component(key) == name).then(|| decode_form_component(value))
        })
}

/// Query-level decoding: malformed escapes stay literal and invalid UTF-8
/// becomes U+FFFD.
fn decode_form_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Component decoding that fails on a `%` not followed by two hex digits or
/// on escapes that do not form valid UTF-8.
fn decode_strict(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let well_formed = bytes.iter().enumerate().all(|(i, &byte)| {
        byte != b'%'
            || matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    });
    if !well_formed {
        return None;
    }

    urlencoding::decode(value).ok().map(|decoded| decoded.into_owned())
}
