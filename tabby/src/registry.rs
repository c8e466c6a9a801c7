//! Group discovery.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use log::{debug, info, warn};
use tabby_dom::NodeId;

use crate::attrs;
use crate::config::{Settings, SettingsOverrides};
use crate::controller::TabAccordion;
use crate::dom::Dom;

/// All groups of a document, one controller per group name.
///
/// Base settings are given up front; each group's own settings attribute is
/// merged over them when its controller is built.
#[derive(Debug, Clone, Default)]
pub struct TabAccordions {
    base: Settings,
    groups: BTreeMap<String, TabAccordion>,
}

impl TabAccordions {
    pub fn new(base: Settings) -> Self {
        Self {
            base,
            groups: BTreeMap::new(),
        }
    }

    /// Scan `dom` for groups and build a controller for each new one.
    ///
    /// Empty group names are skipped, and a group seen before (in this scan
    /// or an earlier one) keeps its existing controller. Returns the number
    /// of groups added.
    pub fn discover(&mut self, dom: &mut dyn Dom) -> usize {
        let mut added = 0;

        for node in dom.query_data(attrs::GROUP) {
            let Some(name) = dom.data(node, attrs::GROUP) else {
                continue;
            };
            if name.is_empty() || self.groups.contains_key(&name) {
                continue;
            }

            let overrides = group_settings(dom, &name);
            self.add_group(dom, name, &overrides);
            added += 1;
        }

        info!("discovered {added} new tab groups ({} total)", self.groups.len());
        added
    }

    /// Build a controller for `name` and register it, replacing any
    /// controller already registered under that name.
    pub fn add_group(
        &mut self,
        dom: &mut dyn Dom,
        name: impl Into<String>,
        overrides: &SettingsOverrides,
    ) -> &mut TabAccordion {
        let name = name.into();
        let settings = self.base.merged(overrides);
        let controller = TabAccordion::new(dom, name.clone(), settings);

        match self.groups.entry(name) {
            Entry::Occupied(mut entry) => {
                debug!("replacing controller for group {:?}", entry.key());
                entry.insert(controller);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(controller),
        }
    }

    // Accessors

    pub fn base_settings(&self) -> &Settings {
        &self.base
    }

    pub fn get(&self, name: &str) -> Option<&TabAccordion> {
        self.groups.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TabAccordion> {
        self.groups.get_mut(name)
    }

    /// Controllers ordered by group name.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &TabAccordion)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether any group reacts to viewport resizes.
    pub fn responsive(&self) -> bool {
        self.groups.values().any(TabAccordion::listens_for_resize)
    }

    // Events

    /// Offer a click to every group. Returns the names of the groups whose
    /// triggers were hit.
    pub fn handle_click(&mut self, dom: &mut dyn Dom, target: NodeId) -> Vec<String> {
        self.groups
            .iter_mut()
            .filter_map(|(name, group)| group.handle_click(dom, target).then(|| name.clone()))
            .collect()
    }

    /// Let every responsive group re-evaluate its view. Returns the names of
    /// the groups that switched.
    pub fn handle_resize(&mut self, dom: &mut dyn Dom) -> Vec<String> {
        self.groups
            .iter_mut()
            .filter_map(|(name, group)| group.handle_resize(dom).then(|| name.clone()))
            .collect()
    }
}

/// Overrides declared in the group's `data-tabby-group-<group>` attribute.
///
/// A missing attribute gives no overrides. So does a malformed one, after a
/// warning: bad settings never keep a group from starting.
pub fn group_settings(dom: &dyn Dom, group: &str) -> SettingsOverrides {
    let key = attrs::group_settings_key(group);

    let Some(raw) = dom
        .query_data(&key)
        .into_iter()
        .next()
        .and_then(|node| dom.data(node, &key))
    else {
        return SettingsOverrides::default();
    };

    match SettingsOverrides::from_json(&raw) {
        Ok(overrides) => overrides,
        Err(e) => {
            warn!("group {group:?}: ignoring settings: {e}");
            SettingsOverrides::default()
        }
    }
}
