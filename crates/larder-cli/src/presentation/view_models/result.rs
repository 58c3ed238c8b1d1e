use serde::Serialize;

use super::common::{Guidance, StatusBadge};

/// Envelope every command prints: an optional headline badge, the
/// command's own content and follow-up commands worth running next.
///
/// In JSON mode the envelope is printed as-is, so scripts read
/// `content` and may ignore the rest.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::NoticeViewModel;

    fn notice(message: &str) -> NoticeViewModel {
        NoticeViewModel {
            message: message.to_string(),
        }
    }

    #[test]
    fn test_bare_result_serializes_content_only() {
        let result = CommandResultViewModel::new(notice("Kept Milk"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"content": {"message": "Kept Milk"}}));
    }

    #[test]
    fn test_suggestions_keep_insertion_order() {
        let result = CommandResultViewModel::new(notice("No item matches 'x'"))
            .with_badge(StatusBadge::warning("Item not found"))
            .with_suggestion(Guidance::new("List items").with_command("larder list"))
            .with_suggestion(Guidance::new("Add it"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["badge"]["level"], "warning");
        assert_eq!(json["suggestions"][0]["command"], "larder list");
        assert_eq!(json["suggestions"][1]["command"], serde_json::Value::Null);
    }
}
