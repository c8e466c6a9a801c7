//! The per-group state machine.

use log::{debug, trace};
use tabby_dom::{Display, NodeId};

use crate::attrs;
use crate::config::Settings;
use crate::dom::Dom;
use crate::index::{sort_items, Item, ItemIndex};
use crate::view::{check_view, View};

/// Mutable state of a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    view: View,
    active: Option<String>,
}

impl ControllerState {
    pub fn view(&self) -> View {
        self.view
    }

    /// Most recently opened panel.
    ///
    /// In accordion view several panels can be open at once; this only
    /// remembers the last one.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

/// Controller for one group of triggers and panels.
///
/// Built by [`crate::TabAccordions`] during discovery, or directly with
/// [`TabAccordion::new`]. Construction classifies the group's triggers, picks
/// the initial view, applies it, and restores a deep-linked panel.
#[derive(Debug, Clone)]
pub struct TabAccordion {
    group: String,
    settings: Settings,
    items: ItemIndex,
    state: ControllerState,
    /// Only responsive groups react to resizes.
    listens_for_resize: bool,
}

impl TabAccordion {
    pub fn new(dom: &mut dyn Dom, group: impl Into<String>, settings: Settings) -> Self {
        let group = group.into();

        let triggers = dom.query_data_eq(attrs::GROUP, &group);
        let items = sort_items(dom, &triggers);
        let view = check_view(settings.view, dom.viewport_width(), settings.breakpoint);

        debug!(
            "group {group:?}: {} tabs, {} accordions, starting as {view}",
            items.tabs().len(),
            items.accordions().len()
        );

        let mut controller = Self {
            listens_for_resize: settings.is_responsive(),
            group,
            settings,
            items,
            state: ControllerState { view, active: None },
        };

        if controller.settings.hide_panels {
            controller.close_all(dom);
        }

        controller.set_view(dom);

        if controller.settings.deep_linking {
            controller.restore_from_hash(dom);
        }

        controller
    }

    // Accessors

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn items(&self) -> &ItemIndex {
        &self.items
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn active(&self) -> Option<&str> {
        self.state.active()
    }

    pub fn listens_for_resize(&self) -> bool {
        self.listens_for_resize
    }

    /// Whether `name` can be opened in the current view.
    pub fn can_open(&self, name: &str) -> bool {
        !name.is_empty()
            && self
                .items
                .get(self.state.view, name)
                .is_some_and(|item| item.panel.is_some())
    }

    // Public operations

    /// Open `name` in the current view.
    ///
    /// Tabs close the previously active panel first; accordion panels open
    /// independently. Unknown names and items without a panel are ignored
    /// without touching the page. Returns whether a panel was opened.
    pub fn open(&mut self, dom: &mut dyn Dom, name: &str) -> bool {
        let view = self.state.view;
        if !self.can_open(name) {
            debug!("group {:?}: nothing to open for {name:?} in {view} view", self.group);
            return false;
        }

        if view == View::Tab
            && let Some(previous) = self.state.active.take()
        {
            self.close_in(dom, &previous, view);
        }

        self.open_in(dom, name, view)
    }

    /// Close `name` in the current view. Unknown names are ignored.
    pub fn close(&mut self, dom: &mut dyn Dom, name: &str) {
        self.close_in(dom, name, self.state.view);
    }

    /// Close every item of both buckets, whatever the current view.
    pub fn close_all(&mut self, dom: &mut dyn Dom) {
        for view in View::ALL {
            for (_, item) in self.items.bucket(view).iter() {
                close_item(dom, &self.settings, *item, view);
            }
        }
        self.state.active = None;
    }

    // Events

    /// React to a click on `target`.
    ///
    /// Matches the nearest trigger of this group at or above `target`, opens
    /// its panel and, with deep linking, writes the panel name to the
    /// location hash. Returns whether the click hit one of this group's
    /// triggers.
    pub fn handle_click(&mut self, dom: &mut dyn Dom, target: NodeId) -> bool {
        let Some(trigger) = dom.closest_data_eq(target, attrs::GROUP, &self.group) else {
            return false;
        };
        let name = dom.data(trigger, attrs::PANEL).unwrap_or_default();

        trace!("group {:?}: click on trigger for {name:?}", self.group);
        self.open(dom, &name);

        if self.settings.deep_linking && !name.is_empty() {
            dom.set_location_hash(&name);
        }
        true
    }

    /// Re-evaluate the view after the viewport settled on a new size.
    ///
    /// Returns whether the view changed. Groups with a fixed view never do.
    pub fn handle_resize(&mut self, dom: &mut dyn Dom) -> bool {
        if !self.listens_for_resize {
            return false;
        }

        let previous = self.state.view;
        let view = check_view(None, dom.viewport_width(), self.settings.breakpoint);
        if view == previous {
            return false;
        }

        debug!("group {:?}: switching from {previous} to {view}", self.group);
        self.state.view = view;
        self.set_view(dom);
        true
    }

    /// Open the panel named by the location hash, if any.
    fn restore_from_hash(&mut self, dom: &mut dyn Dom) {
        let hash = dom.location_hash();
        let name = hash.strip_prefix('#').unwrap_or(&hash);
        if name.is_empty() {
            return;
        }

        debug!("group {:?}: restoring {name:?} from location hash", self.group);
        self.open(dom, name);
    }

    // Views

    fn set_view(&mut self, dom: &mut dyn Dom) {
        match self.state.view {
            View::Accordion => self.set_up_accordions(dom),
            View::Tab => self.set_up_tabs(dom),
        }
    }

    fn set_up_accordions(&mut self, dom: &mut dyn Dom) {
        self.close_all(dom);
        self.add_accordion_aria(dom);

        if self.settings.hide_tabs {
            self.toggle_triggers(dom, View::Tab, Display::None);
        }
        if self.settings.hide_accordions {
            self.toggle_triggers(dom, View::Accordion, Display::Block);
        }
    }

    fn set_up_tabs(&mut self, dom: &mut dyn Dom) {
        self.close_all(dom);
        self.add_tab_aria(dom);

        if let Some(first) = self.items.tabs().first().map(str::to_string) {
            self.open_in(dom, &first, View::Tab);
        }

        if self.settings.hide_tabs {
            self.toggle_triggers(dom, View::Tab, Display::Block);
        }
        if self.settings.hide_accordions {
            self.toggle_triggers(dom, View::Accordion, Display::None);
        }
    }

    fn toggle_triggers(&self, dom: &mut dyn Dom, view: View, display: Display) {
        for (_, item) in self.items.bucket(view).iter() {
            dom.set_display(item.trigger, display);
        }
    }

    fn add_accordion_aria(&self, dom: &mut dyn Dom) {
        for (name, item) in self.items.accordions().iter() {
            if item.panel.is_some() {
                dom.set_attribute(item.trigger, attrs::ARIA_CONTROLS, name);
            }
        }
    }

    fn add_tab_aria(&self, dom: &mut dyn Dom) {
        for (name, item) in self.items.tabs().iter() {
            let Some(panel) = item.panel else {
                continue;
            };
            let tab_id = attrs::tab_id(name);

            dom.set_attribute(item.trigger, attrs::ARIA_CONTROLS, name);
            dom.set_id(item.trigger, &tab_id);

            dom.set_attribute(panel, attrs::ROLE, attrs::ROLE_TABPANEL);
            dom.set_attribute(panel, attrs::ARIA_LABELEDBY, &tab_id);
        }
    }

    // Items

    fn open_in(&mut self, dom: &mut dyn Dom, name: &str, view: View) -> bool {
        let Some(item) = self.items.get(view, name).copied() else {
            return false;
        };
        let Some(panel) = item.panel else {
            return false;
        };

        dom.add_class(item.trigger, &self.settings.active_trigger_class);
        dom.set_attribute(item.trigger, view.aria_state(), "true");

        dom.add_class(panel, &self.settings.active_content_class);
        if self.settings.hide_panels {
            dom.set_display(panel, Display::Block);
        }

        trace!("group {:?}: opened {name:?} ({view})", self.group);
        self.state.active = Some(name.to_string());
        true
    }

    fn close_in(&mut self, dom: &mut dyn Dom, name: &str, view: View) {
        let Some(item) = self.items.get(view, name).copied() else {
            return;
        };

        close_item(dom, &self.settings, item, view);

        if self.state.active.as_deref() == Some(name) {
            self.state.active = None;
        }
    }
}

fn close_item(dom: &mut dyn Dom, settings: &Settings, item: Item, view: View) {
    dom.remove_class(item.trigger, &settings.active_trigger_class);
    dom.set_attribute(item.trigger, view.aria_state(), "false");

    if let Some(panel) = item.panel {
        dom.remove_class(panel, &settings.active_content_class);
        if settings.hide_panels {
            dom.set_display(panel, Display::None);
        }
    }
}
