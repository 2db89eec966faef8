use dioxus::prelude::*;
use dioxus_logger::tracing::{Level, warn};

use table_filters_ui::api;
use table_filters_ui::components::TableGroupsFilter;
use table_filters_ui::types::TableConfig;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut config = use_signal(TableConfig::default);
    let mut selected_groups = use_signal(Vec::<i64>::new);

    // Load table scope on mount
    use_future(move || async move {
        match api::get_config().await {
            Some(loaded) => config.set(loaded),
            None => warn!("host returned no table config; groups filter stays empty"),
        }
    });

    let cfg = config();
    let selected_label = if selected_groups.read().is_empty() {
        "none".to_string()
    } else {
        format!("{:?}", *selected_groups.read())
    };

    rsx! {
        main { class: "table-toolbar",
            TableGroupsFilter {
                value: selected_groups(),
                on_change: move |ids: Vec<i64>| selected_groups.set(ids),
                project_id: cfg.project_id,
                organisation_id: cfg.organisation_id,
            }
            div { class: "text-sm text-muted", "Selected groups: {selected_label}" }
        }
    }
}
