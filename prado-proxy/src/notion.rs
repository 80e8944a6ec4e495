//! Notion database client and page flattening.
//!
//! The database query endpoint is paginated: each page carries `results`,
//! `has_more`, and an opaque `next_cursor`. All pages are concatenated
//! before anything downstream sees them. Pages are then flattened from
//! Notion's nested property objects into one flat record per page -
//! `{ id, <property name>: primitive }` - which is the wire shape the web
//! client normalizes from.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE: &str = "https://api.notion.com/v1";

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Notion API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// One page of a database query response.
#[derive(Deserialize)]
struct QueryPage {
    results: Vec<Value>,
    has_more: bool,
    next_cursor: Option<String>,
}

pub struct NotionClient {
    http: reqwest::Client,
    token: String,
    database_id: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(token: String, database_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            database_id,
            base_url: API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(token: String, database_id: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            database_id,
            base_url,
        }
    }

    /// Query the database, following pagination until exhausted.
    pub async fn fetch_all_pages(&self) -> Result<Vec<Value>, NotionError> {
        let url = format!("{}/databases/{}/query", self.base_url, self.database_id);
        let mut all_results = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = Map::new();
            if let Some(cursor) = &cursor {
                body.insert("start_cursor".to_string(), json!(cursor));
            }

            let resp = self
                .http
                .post(&url)
                .bearer_auth(&self.token)
                .header("Notion-Version", NOTION_VERSION)
                .json(&Value::Object(body))
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(NotionError::Api { status, body });
            }

            let page: QueryPage = resp.json().await?;
            all_results.extend(page.results);

            if !page.has_more {
                break;
            }
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                // has_more without a cursor would loop forever
                None => break,
            }
        }

        Ok(all_results)
    }
}

/// Flatten a Notion page into `{ id, <property>: primitive, ... }`.
pub fn flatten_page(page: &Value) -> Value {
    let mut flat = Map::new();
    if let Some(id) = page.get("id") {
        flat.insert("id".to_string(), id.clone());
    }
    if let Some(Value::Object(properties)) = page.get("properties") {
        for (name, property) in properties {
            flat.insert(name.clone(), extract_property_value(property));
        }
    }
    Value::Object(flat)
}

/// Extract the primitive value from one Notion property object.
///
/// Total over whatever shape the API returns: unknown property types map
/// to an empty string, a property with no type tag maps to null.
pub fn extract_property_value(property: &Value) -> Value {
    let Some(kind) = property.get("type").and_then(Value::as_str) else {
        return Value::Null;
    };

    match kind {
        "title" => joined_plain_text(property.get("title")),
        "rich_text" => joined_plain_text(property.get("rich_text")),
        "number" => property.get("number").cloned().unwrap_or(Value::Null),
        "url" => string_or_empty(property.get("url")),
        "select" => string_or_empty(property.get("select").and_then(|s| s.get("name"))),
        "multi_select" => {
            let names = property
                .get("multi_select")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.get("name").and_then(Value::as_str))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            Value::String(names)
        }
        "checkbox" => property.get("checkbox").cloned().unwrap_or(Value::Bool(false)),
        "date" => string_or_empty(property.get("date").and_then(|d| d.get("start"))),
        "files" => {
            let url = property
                .get("files")
                .and_then(Value::as_array)
                .and_then(|files| files.first())
                .and_then(|file| {
                    file.get("file")
                        .and_then(|f| f.get("url"))
                        .or_else(|| file.get("external").and_then(|e| e.get("url")))
                })
                .and_then(Value::as_str)
                .unwrap_or_default();
            Value::String(url.to_string())
        }
        "formula" => {
            let formula = property.get("formula");
            let inner_kind = formula
                .and_then(|f| f.get("type"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            match inner_kind {
                "string" => string_or_empty(formula.and_then(|f| f.get("string"))),
                "number" => formula
                    .and_then(|f| f.get("number"))
                    .cloned()
                    .unwrap_or(Value::Null),
                "boolean" => formula
                    .and_then(|f| f.get("boolean"))
                    .cloned()
                    .unwrap_or(Value::Bool(false)),
                _ => Value::String(String::new()),
            }
        }
        _ => Value::String(String::new()),
    }
}

fn joined_plain_text(fragments: Option<&Value>) -> Value {
    let text = fragments
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("plain_text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();
    Value::String(text)
}

fn string_or_empty(value: Option<&Value>) -> Value {
    let s = value.and_then(Value::as_str).unwrap_or_default();
    Value::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_rich_text_join_plain_text_fragments() {
        let property = json!({
            "type": "title",
            "title": [
                { "plain_text": "La " },
                { "plain_text": "Gloria" }
            ]
        });
        assert_eq!(extract_property_value(&property), json!("La Gloria"));

        let property = json!({ "type": "rich_text", "rich_text": [] });
        assert_eq!(extract_property_value(&property), json!(""));
    }

    #[test]
    fn number_passes_through_including_null() {
        let property = json!({ "type": "number", "number": 7 });
        assert_eq!(extract_property_value(&property), json!(7));

        let property = json!({ "type": "number", "number": null });
        assert_eq!(extract_property_value(&property), Value::Null);
    }

    #[test]
    fn select_and_multi_select_extract_names() {
        let property = json!({ "type": "select", "select": { "name": "Capítulo 3" } });
        assert_eq!(extract_property_value(&property), json!("Capítulo 3"));

        let property = json!({ "type": "select", "select": null });
        assert_eq!(extract_property_value(&property), json!(""));

        let property = json!({
            "type": "multi_select",
            "multi_select": [{ "name": "óleo" }, { "name": "tabla" }]
        });
        assert_eq!(extract_property_value(&property), json!("óleo, tabla"));
    }

    #[test]
    fn checkbox_and_date_extract_primitives() {
        let property = json!({ "type": "checkbox", "checkbox": true });
        assert_eq!(extract_property_value(&property), json!(true));

        let property = json!({ "type": "date", "date": { "start": "1562-01-01" } });
        assert_eq!(extract_property_value(&property), json!("1562-01-01"));

        let property = json!({ "type": "date", "date": null });
        assert_eq!(extract_property_value(&property), json!(""));
    }

    #[test]
    fn files_prefer_hosted_url_then_external() {
        let property = json!({
            "type": "files",
            "files": [{ "file": { "url": "https://example.org/hosted.jpg" } }]
        });
        assert_eq!(
            extract_property_value(&property),
            json!("https://example.org/hosted.jpg")
        );

        let property = json!({
            "type": "files",
            "files": [{ "external": { "url": "https://example.org/ext.jpg" } }]
        });
        assert_eq!(
            extract_property_value(&property),
            json!("https://example.org/ext.jpg")
        );

        let property = json!({ "type": "files", "files": [] });
        assert_eq!(extract_property_value(&property), json!(""));
    }

    #[test]
    fn formula_unwraps_inner_value() {
        let property = json!({
            "type": "formula",
            "formula": { "type": "string", "string": "derivado" }
        });
        assert_eq!(extract_property_value(&property), json!("derivado"));

        let property = json!({
            "type": "formula",
            "formula": { "type": "number", "number": 12 }
        });
        assert_eq!(extract_property_value(&property), json!(12));

        let property = json!({
            "type": "formula",
            "formula": { "type": "boolean", "boolean": false }
        });
        assert_eq!(extract_property_value(&property), json!(false));
    }

    #[test]
    fn unknown_property_types_become_empty_strings() {
        let property = json!({ "type": "relation", "relation": [] });
        assert_eq!(extract_property_value(&property), json!(""));

        let property = json!({});
        assert_eq!(extract_property_value(&property), Value::Null);
    }

    #[test]
    fn flatten_page_keeps_id_and_one_entry_per_property() {
        let page = json!({
            "id": "page-1",
            "object": "page",
            "properties": {
                "Title": { "type": "title", "title": [{ "plain_text": "El Expolio" }] },
                "Chapter": { "type": "number", "number": 4 },
                "museum_url": { "type": "url", "url": "https://example.org" }
            }
        });

        let flat = flatten_page(&page);
        assert_eq!(flat["id"], json!("page-1"));
        assert_eq!(flat["Title"], json!("El Expolio"));
        assert_eq!(flat["Chapter"], json!(4));
        assert_eq!(flat["museum_url"], json!("https://example.org"));
        // Only id + properties survive
        assert_eq!(flat.as_object().unwrap().len(), 4);
    }

    #[test]
    fn flatten_page_without_properties_is_just_the_id() {
        let flat = flatten_page(&json!({ "id": "page-2" }));
        assert_eq!(flat, json!({ "id": "page-2" }));
    }
}
