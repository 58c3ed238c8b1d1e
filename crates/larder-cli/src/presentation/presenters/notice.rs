use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, NoticeViewModel, StatusBadge,
};

/// Edit or delete of an id that does not exist (any more). Not an error:
/// the item is already gone.
pub fn present_not_found(query: &str) -> CommandResultViewModel<NoticeViewModel> {
    CommandResultViewModel::new(NoticeViewModel::new(format!(
        "No item matches '{}'; nothing changed",
        query
    )))
    .with_badge(StatusBadge::warning("Item not found"))
    .with_suggestion(Guidance::new("See current ids").with_command("larder list"))
}

pub fn present_notice(
    badge: StatusBadge,
    message: impl Into<String>,
) -> CommandResultViewModel<NoticeViewModel> {
    CommandResultViewModel::new(NoticeViewModel::new(message)).with_badge(badge)
}
