//! Plain-text rendering of the final group state.

use tabby::{Item, TabAccordion, TabAccordions, View};
use tabby_dom::Document;

/// Render every group, in name order, followed by the location hash.
pub(crate) fn render(document: &Document, groups: &TabAccordions) -> String {
    let window = document.window();
    let mut out = format!("viewport {}x{}\n", window.width, window.height);

    if groups.is_empty() {
        out.push_str("no groups found\n");
    }
    for (name, group) in groups.groups() {
        out.push_str(&render_group(document, name, group));
    }

    let hash = document.hash();
    out.push_str(&format!(
        "hash {}\n",
        if hash.is_empty() { "(none)" } else { hash }
    ));
    out
}

fn render_group(document: &Document, name: &str, group: &TabAccordion) -> String {
    let mut out = format!(
        "group {name}: {} view, active {}\n",
        group.view(),
        group.active().unwrap_or("(none)")
    );

    for view in View::ALL {
        for (panel, item) in group.items().bucket(view).iter() {
            out.push_str(&format!(
                "  {:<9} {panel:<16} {}\n",
                view.as_str(),
                item_state(document, group, item)
            ));
        }
    }
    out
}

fn item_state(document: &Document, group: &TabAccordion, item: &Item) -> String {
    let settings = group.settings();
    let trigger = if document.has_class(item.trigger, &settings.active_trigger_class) {
        "trigger active"
    } else {
        "trigger idle"
    };
    let trigger_display = document.display(item.trigger);

    let Some(panel) = item.panel else {
        return format!("{trigger} ({trigger_display}), panel missing");
    };
    let panel_state = if document.has_class(panel, &settings.active_content_class) {
        "panel open"
    } else {
        "panel closed"
    };
    format!(
        "{trigger} ({trigger_display}), {panel_state} ({})",
        document.display(panel)
    )
}
