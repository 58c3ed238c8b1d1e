use larder_runtime::{ConfigStatus, InitResult};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, InitResultViewModel, StatusBadge,
};

pub fn present_init_result(result: InitResult) -> CommandResultViewModel<InitResultViewModel> {
    let (status, label) = match result.config_status {
        ConfigStatus::Created => ("created", "Configuration created"),
        ConfigStatus::Overwritten => ("overwritten", "Configuration overwritten"),
    };

    let vm = InitResultViewModel {
        config_path: result.config_path.display().to_string(),
        config_status: status.to_string(),
        backend: result.backend.to_string(),
        storage_path: result.storage_path.display().to_string(),
        item_count: result.item_count,
    };

    let mut out = CommandResultViewModel::new(vm).with_badge(StatusBadge::success(label));
    out = if result.item_count == 0 {
        out.with_suggestion(
            Guidance::new("Add an item").with_command("larder add \"Milk\" --date tomorrow"),
        )
    } else {
        out.with_suggestion(Guidance::new("Browse your shelves").with_command("larder ui"))
    };
    out
}
