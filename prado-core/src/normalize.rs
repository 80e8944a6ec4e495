//! Normalization of raw content-store rows into [`Artwork`] records.
//!
//! The backing store returns loosely-typed JSON with inconsistent field
//! names (English and Spanish aliases) and values that may be strings,
//! numbers, arrays, or missing entirely. Everything here is total: every
//! branch has a default, so a malformed row can never propagate a failure.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::Value;

use crate::artwork::Artwork;

/// Build one `Artwork` from a raw record. Never fails.
pub fn normalize_record(record: &Value) -> Artwork {
    let title = first_present(record, &["Title", "Obra", "Name"])
        .map(safe_string)
        .unwrap_or_else(|| "Obra sin título".to_string());
    let artist = first_present(record, &["Author", "Artista"])
        .map(safe_string)
        .unwrap_or_else(|| "Autor desconocido".to_string());

    let chapter = parse_int(record.get("Chapter"));
    let order = parse_int(record.get("Order"));

    let image_url = resolve_image_url(record.get("image_url"), &title);

    let id = match first_present(record, &["id"]) {
        Some(value) => safe_string(value),
        None => random_token(),
    };

    Artwork {
        id,
        title,
        artist,
        chapter,
        chapter_title: format!("Capítulo {chapter}"),
        description: record.get("Description").map(safe_string).unwrap_or_default(),
        image_url,
        year: non_empty(record.get("Year").map(safe_string).unwrap_or_default()),
        order,
        museum_name: non_empty(record.get("Museum").map(safe_string).unwrap_or_default()),
        museum_url: non_empty(record.get("museum_url").map(safe_string).unwrap_or_default()),
    }
}

/// Normalize a full batch and sort it ascending by `order`.
///
/// Sorting happens once here, after the whole batch is normalized; the
/// sort is stable, so records sharing an `order` keep their source order.
pub fn normalize_catalog(records: &[Value]) -> Vec<Artwork> {
    let mut artworks: Vec<Artwork> = records.iter().map(normalize_record).collect();
    artworks.sort_by_key(|artwork| artwork.order);
    artworks
}

/// Deterministic placeholder image for artworks without a usable URL.
pub fn placeholder_image_url(title: &str) -> String {
    format!(
        "https://picsum.photos/seed/{}/800/600",
        urlencoding::encode(title)
    )
}

/// Coerce any JSON value to a display string: null becomes "", arrays are
/// joined with ", ", everything else goes through string conversion.
fn safe_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(safe_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(_) => value.to_string(),
    }
}

/// First alias whose value is present and non-empty.
///
/// Mirrors the source's `a || b || c` fallback chain: null, empty strings,
/// `false`, and `0` all fall through to the next alias.
fn first_present<'a>(record: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|alias| record.get(*alias))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integer coercion with `parseInt` semantics.
///
/// Numbers truncate; strings parse their leading integer; anything else is
/// 0. A source value of literal 0 is indistinguishable from "missing" -
/// both observed source variants collapse the two, and so does this.
fn parse_int(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(|f| f.trunc() as i32).unwrap_or(0),
        Some(Value::String(s)) => leading_int(s),
        _ => 0,
    }
}

fn leading_int(s: &str) -> i32 {
    let trimmed = s.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i32>().map(|v| sign * v).unwrap_or(0)
}

/// Resolve the image field, which is either a URL string or a list of file
/// objects (first element's `url`, then `rawUrl`, then the raw value).
/// Anything that is not a string starting with "http" gets the placeholder.
fn resolve_image_url(value: Option<&Value>, title: &str) -> String {
    let candidate = match value {
        Some(Value::Array(items)) if !items.is_empty() => {
            let first = &items[0];
            first
                .get("url")
                .filter(|v| is_present(v))
                .or_else(|| first.get("rawUrl").filter(|v| is_present(v)))
                .unwrap_or(first)
        }
        Some(v) => v,
        None => &Value::Null,
    };
    match candidate {
        Value::String(url) if url.starts_with("http") => url.clone(),
        _ => placeholder_image_url(title),
    }
}

/// Short random alphanumeric token for records without a source id.
/// Not globally unique - only used for same-session membership lookups.
fn random_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
