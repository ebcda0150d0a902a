//! Views over the emote API document.
//!
//! The document is kept as an untyped [`Value`] so it can be written back out unchanged. Reading
//! from it goes through the accessors below, each with a fixed fallback for missing or mistyped
//! fields.
use serde::Deserialize;
use serde_json::Value;

/// `code`/`message` envelope present on every Bilibili API response.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiStatus {
    pub code: i64,
    pub message: String,
}

impl ApiStatus {
    /// Reads the envelope, falling back to `code = 0` and an empty message when it can't be read.
    pub fn from_document(document: &Value) -> Self {
        Self::deserialize(document).unwrap_or_default()
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

const EMPTY: &[Value] = &[];

/// `data.packages`, or an empty slice.
pub fn packages(document: &Value) -> &[Value] {
    document
        .get("data")
        .and_then(|data| data.get("packages"))
        .and_then(Value::as_array)
        .map_or(EMPTY, Vec::as_slice)
}

/// `emote` of a single package, or an empty slice.
pub fn package_emotes(package: &Value) -> &[Value] {
    package
        .get("emote")
        .and_then(Value::as_array)
        .map_or(EMPTY, Vec::as_slice)
}

/// `webp_url` of a single emote, or `""`.
pub fn webp_url(emote: &Value) -> &str {
    string_field(emote, "webp_url")
}

/// Display name (`text`) of a package or an emote, or `""`.
pub fn text(item: &Value) -> &str {
    string_field(item, "text")
}

fn string_field<'a>(item: &'a Value, field: &str) -> &'a str {
    item.get(field).and_then(Value::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_levels_fall_back_to_empty() {
        assert!(packages(&json!({})).is_empty());
        assert!(packages(&json!({ "data": null })).is_empty());
        assert!(packages(&json!({ "data": { "packages": "nope" } })).is_empty());
        assert!(package_emotes(&json!({ "text": "pkg" })).is_empty());
        assert_eq!(webp_url(&json!({ "webp_url": 12 })), "");
        assert_eq!(webp_url(&json!({})), "");
        assert_eq!(text(&json!({ "text": "[doge]" })), "[doge]");
    }

    #[test]
    fn status_envelope() {
        let ok = ApiStatus::from_document(&json!({ "code": 0, "message": "0", "data": {} }));
        assert!(ok.is_ok());

        let failed = ApiStatus::from_document(&json!({ "code": -400, "message": "请求错误" }));
        assert!(!failed.is_ok());
        assert_eq!(failed.message, "请求错误");

        // Unreadable envelopes are treated as success
        let odd = ApiStatus::from_document(&json!({ "code": "x" }));
        assert_eq!(odd, ApiStatus::default());
        assert_eq!(ApiStatus::from_document(&json!([1, 2])), ApiStatus::default());
    }
}
