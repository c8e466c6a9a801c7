//! Responsive tab/accordion groups.
//!
//! A group is a set of trigger/panel pairs marked up with `data-tabby-*`
//! attributes. Each group is driven by a [`TabAccordion`] controller which
//! shows its panels as tabs on wide viewports and as an accordion below the
//! configured breakpoint. [`TabAccordions`] discovers the groups of a
//! document, and [`Runtime`] feeds them host events.

pub mod attrs;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod index;
pub mod view;

mod controller;
mod registry;
mod runtime;

pub use config::{Settings, SettingsOverrides};
pub use controller::{ControllerState, TabAccordion};
pub use debounce::{DebounceTicks, Debouncer, RESIZE_QUIET_PERIOD};
pub use dom::Dom;
pub use error::Error;
pub use index::{Bucket, Item, ItemIndex};
pub use registry::{group_settings, TabAccordions};
pub use runtime::{Runtime, RuntimeOutput};
pub use view::View;
