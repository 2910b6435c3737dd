//! JSON parsing functions for `HuggingFace` API responses.
//!
//! Responses are read field by field so one malformed entry or an
//! unexpected extra field never fails a whole listing.

use crate::error::{HfError, HfResult};
use crate::models::{HfModelInfo, HfModelListing, HfSibling};
use serde_json::Value;

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    value.and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    })
}

fn model_id(json: &Value) -> Option<&str> {
    json.get("id")
        .or_else(|| json.get("modelId"))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

// ============================================================================
// Listing Parsing
// ============================================================================

/// Parse one listing entry. Entries without an id are skipped.
pub fn parse_listing_entry(json: &Value) -> Option<HfModelListing> {
    Some(HfModelListing {
        id: model_id(json)?.to_string(),
        downloads: json.get("downloads").and_then(Value::as_u64),
        likes: json.get("likes").and_then(Value::as_u64),
    })
}

/// Parse a models listing response, preserving rank order.
pub fn parse_listing(json_array: &[Value]) -> Vec<HfModelListing> {
    json_array.iter().filter_map(parse_listing_entry).collect()
}

// ============================================================================
// Model Info Parsing
// ============================================================================

/// Parse a model info response.
///
/// A missing `siblings` key stays `None` rather than becoming an empty
/// listing.
pub fn parse_model_info(json: &Value) -> HfResult<HfModelInfo> {
    if !json.is_object() {
        return Err(HfError::InvalidResponse {
            message: "Expected object for model info response".to_string(),
        });
    }

    let siblings = json.get("siblings").and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(|item| serde_json::from_value::<HfSibling>(item.clone()).ok())
            .collect()
    });

    let model_type = json
        .get("config")
        .and_then(|config| config.get("model_type"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(HfModelInfo {
        id: model_id(json).unwrap_or_default().to_string(),
        siblings,
        model_type,
        tags: string_list(json.get("tags")),
        downloads: json.get("downloads").and_then(Value::as_u64),
        likes: json.get("likes").and_then(Value::as_u64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_listing_keeps_rank_order_and_skips_bad_entries() {
        let response = vec![
            json!({"id": "Qwen/Qwen2-0.5B", "downloads": 900, "likes": 10}),
            json!({"downloads": 5}),
            json!({"modelId": "openai-community/gpt2"}),
        ];

        let listing = parse_listing(&response);

        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].id, "Qwen/Qwen2-0.5B");
        assert_eq!(listing[0].downloads, Some(900));
        assert_eq!(listing[1].id, "openai-community/gpt2");
        assert_eq!(listing[1].likes, None);
    }

    #[test]
    fn test_parse_model_info_full() {
        let response = json!({
            "id": "Qwen/Qwen2-0.5B",
            "downloads": 1234,
            "likes": 56,
            "tags": ["transformers", "qwen2", 7],
            "config": {"model_type": "qwen2", "architectures": ["Qwen2ForCausalLM"]},
            "siblings": [
                {"rfilename": "config.json", "size": 661},
                {"rfilename": "model.safetensors", "size": 988_097_824_u64, "lfs": {"size": 988_097_824_u64}},
                {"rfilename": "README.md"},
                {"size": 3}
            ]
        });

        let info = parse_model_info(&response).unwrap();

        assert_eq!(info.id, "Qwen/Qwen2-0.5B");
        assert_eq!(info.model_type.as_deref(), Some("qwen2"));
        assert_eq!(info.tags.as_deref(), Some(&["transformers".to_string(), "qwen2".to_string()][..]));
        assert_eq!(info.downloads, Some(1234));

        let siblings = info.siblings.unwrap();
        assert_eq!(siblings.len(), 3);
        assert_eq!(siblings[1].size_bytes(), Some(988_097_824));
        assert_eq!(siblings[2].size_bytes(), None);
    }

    #[test]
    fn test_parse_model_info_without_optional_fields() {
        let info = parse_model_info(&json!({"id": "org/bare"})).unwrap();

        assert!(info.siblings.is_none());
        assert!(info.model_type.is_none());
        assert!(info.tags.is_none());
        assert!(info.likes.is_none());
    }

    #[test]
    fn test_parse_model_info_rejects_non_object() {
        let result = parse_model_info(&json!([1, 2]));
        assert!(matches!(result, Err(HfError::InvalidResponse { .. })));
    }
}
