//! Trigger classification.
//!
//! Triggers are sorted into two buckets keyed by panel name. The first
//! trigger seen for a panel is its tab; any later trigger for the same panel
//! is its accordion header. `data-tabby-trigger-type` overrides both rules,
//! which allows layouts where accordion headers come first in the markup.

use std::collections::HashMap;

use log::{trace, warn};
use tabby_dom::NodeId;

use crate::attrs;
use crate::dom::Dom;
use crate::view::View;

/// A trigger and the panel it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub trigger: NodeId,
    /// `None` when no element has the panel's id. Such items stay indexed
    /// but are never opened.
    pub panel: Option<NodeId>,
}

/// Panel name → item, in first-insertion order.
///
/// Inserting a name again replaces its item but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    entries: Vec<(String, Item)>,
    positions: HashMap<String, usize>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the replaced item.
    pub fn insert(&mut self, name: impl Into<String>, item: Item) -> Option<Item> {
        let name = name.into();
        match self.positions.get(&name) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, item)),
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, item));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.positions.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// First name inserted.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(name, _)| name.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.entries.iter().map(|(name, item)| (name.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both buckets of a group.
#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
    tab: Bucket,
    accordion: Bucket,
}

impl ItemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, view: View) -> &Bucket {
        match view {
            View::Tab => &self.tab,
            View::Accordion => &self.accordion,
        }
    }

    pub fn bucket_mut(&mut self, view: View) -> &mut Bucket {
        match view {
            View::Tab => &mut self.tab,
            View::Accordion => &mut self.accordion,
        }
    }

    pub fn get(&self, view: View, name: &str) -> Option<&Item> {
        self.bucket(view).get(name)
    }

    pub fn tabs(&self) -> &Bucket {
        &self.tab
    }

    pub fn accordions(&self) -> &Bucket {
        &self.accordion
    }

    /// Total number of indexed items across both buckets.
    pub fn len(&self) -> usize {
        self.tab.len() + self.accordion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty() && self.accordion.is_empty()
    }
}

/// Classify `triggers` (in document order) into an [`ItemIndex`].
///
/// Triggers without a panel name are skipped. An unrecognised
/// `data-tabby-trigger-type` is ignored and the default rule applies.
pub fn sort_items(dom: &dyn Dom, triggers: &[NodeId]) -> ItemIndex {
    let mut index = ItemIndex::new();

    for &trigger in triggers {
        let Some(panel_name) = dom.data(trigger, attrs::PANEL).filter(|name| !name.is_empty())
        else {
            warn!("trigger {trigger} has no data-{}, skipping", attrs::PANEL);
            continue;
        };

        let mut view = if index.tab.contains(&panel_name) {
            View::Accordion
        } else {
            View::Tab
        };

        if let Some(forced) = dom.data(trigger, attrs::TRIGGER_TYPE) {
            match forced.parse() {
                Ok(forced) => view = forced,
                Err(e) => warn!("trigger {trigger}: ignoring data-{}: {e}", attrs::TRIGGER_TYPE),
            }
        }

        let item = Item {
            trigger,
            panel: dom.element_by_id(&panel_name),
        };
        if item.panel.is_none() {
            warn!("no panel with id {panel_name:?} for trigger {trigger}");
        }

        trace!("{panel_name:?} -> {view}");
        index.bucket_mut(view).insert(panel_name, item);
    }

    index
}

#[cfg(test)]
mod tests {
    use tabby_dom::{Document, Element};

    use super::*;

    fn trigger(id: &str, panel: &str) -> Element {
        Element::button()
            .id(id)
            .data(attrs::GROUP, "faq")
            .data(attrs::PANEL, panel)
    }

    fn sort(doc: &Document) -> ItemIndex {
        let triggers = doc.query_data_eq(attrs::GROUP, "faq");
        sort_items(doc, &triggers)
    }

    #[test]
    fn test_bucket_keeps_first_position_on_overwrite() {
        let doc = Document::new(
            Element::div()
                .child(Element::div().id("x"))
                .child(Element::div().id("y"))
                .child(Element::div().id("z")),
        );
        let x = doc.element_by_id("x").unwrap();
        let y = doc.element_by_id("y").unwrap();
        let z = doc.element_by_id("z").unwrap();

        let mut bucket = Bucket::new();
        bucket.insert("a", Item { trigger: x, panel: None });
        bucket.insert("b", Item { trigger: y, panel: None });
        let replaced = bucket.insert("a", Item { trigger: z, panel: None });

        assert_eq!(replaced.map(|item| item.trigger), Some(x));
        assert_eq!(bucket.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(bucket.get("a").unwrap().trigger, z);
        assert_eq!(bucket.first(), Some("a"));
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn test_first_trigger_is_tab_later_is_accordion() {
        let doc = Document::new(
            Element::div()
                .child(trigger("t-a", "a"))
                .child(trigger("t-b", "b"))
                .child(trigger("h-a", "a"))
                .child(Element::section().id("a"))
                .child(Element::section().id("b")),
        );

        let index = sort(&doc);

        assert_eq!(index.tabs().names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(index.accordions().names().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(
            index.get(View::Accordion, "a").unwrap().trigger,
            doc.element_by_id("h-a").unwrap()
        );
        assert_eq!(
            index.get(View::Tab, "a").unwrap().panel,
            doc.element_by_id("a")
        );
    }

    #[test]
    fn test_third_trigger_overwrites_accordion_entry() {
        let doc = Document::new(
            Element::div()
                .child(trigger("t-a", "a"))
                .child(trigger("h-a", "a"))
                .child(trigger("h-a-2", "a"))
                .child(Element::section().id("a")),
        );

        let index = sort(&doc);

        assert_eq!(index.accordions().len(), 1);
        assert_eq!(
            index.get(View::Accordion, "a").unwrap().trigger,
            doc.element_by_id("h-a-2").unwrap()
        );
    }

    #[test]
    fn test_explicit_type_overrides_default() {
        let doc = Document::new(
            Element::div()
                .child(trigger("h-a", "a").data(attrs::TRIGGER_TYPE, "accordion"))
                .child(trigger("t-a", "a"))
                .child(trigger("t-b", "b").data(attrs::TRIGGER_TYPE, "tab"))
                .child(trigger("t-b-2", "b").data(attrs::TRIGGER_TYPE, "tab"))
                .child(Element::section().id("a"))
                .child(Element::section().id("b")),
        );

        let index = sort(&doc);

        assert_eq!(
            index.get(View::Accordion, "a").unwrap().trigger,
            doc.element_by_id("h-a").unwrap()
        );
        assert_eq!(
            index.get(View::Tab, "a").unwrap().trigger,
            doc.element_by_id("t-a").unwrap()
        );
        // Forced into the tab bucket twice: the later one replaces the earlier.
        assert_eq!(
            index.get(View::Tab, "b").unwrap().trigger,
            doc.element_by_id("t-b-2").unwrap()
        );
        assert!(!index.accordions().contains("b"));
    }

    #[test]
    fn test_unknown_type_falls_back_to_default_rule() {
        let doc = Document::new(
            Element::div()
                .child(trigger("t-a", "a").data(attrs::TRIGGER_TYPE, "carousel"))
                .child(Element::section().id("a")),
        );

        let index = sort(&doc);

        assert!(index.tabs().contains("a"));
        assert!(index.accordions().is_empty());
    }

    #[test]
    fn test_missing_panel_is_indexed_without_panel() {
        let doc = Document::new(Element::div().child(trigger("t-ghost", "ghost")));

        let index = sort(&doc);

        let item = index.get(View::Tab, "ghost").unwrap();
        assert_eq!(item.panel, None);
    }

    #[test]
    fn test_trigger_without_panel_name_is_skipped() {
        let doc = Document::new(
            Element::div()
                .child(Element::button().data(attrs::GROUP, "faq"))
                .child(trigger("t-a", "a").data(attrs::PANEL, "")),
        );

        assert!(sort(&doc).is_empty());
    }
}
