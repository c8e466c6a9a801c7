//! Event loop driving the groups of an in-memory document.

use std::time::Duration;

use log::{debug, info, trace};
use tabby_dom::{Document, Event};
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::debounce::{DebounceTicks, Debouncer, RESIZE_QUIET_PERIOD};
use crate::registry::TabAccordions;

/// Owns a document and its groups, and applies host events to them one at a
/// time.
#[derive(Debug)]
pub struct Runtime {
    document: Document,
    groups: TabAccordions,
    resize: Debouncer,
    ticks: DebounceTicks,
}

/// What a runtime leaves behind once its event channel closes.
#[derive(Debug)]
pub struct RuntimeOutput {
    pub document: Document,
    pub groups: TabAccordions,
}

impl Runtime {
    /// Discover the groups of `document`, merging each group's settings
    /// attribute over `settings`.
    pub fn new(mut document: Document, settings: Settings) -> Self {
        let mut groups = TabAccordions::new(settings);
        groups.discover(&mut document);

        let (resize, ticks) = Debouncer::new(RESIZE_QUIET_PERIOD);
        Self {
            document,
            groups,
            resize,
            ticks,
        }
    }

    /// Use a different resize quiet period.
    pub fn with_quiet_period(mut self, delay: Duration) -> Self {
        let (resize, ticks) = Debouncer::new(delay);
        self.resize = resize;
        self.ticks = ticks;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn groups(&self) -> &TabAccordions {
        &self.groups
    }

    /// Process events until the sender side is dropped.
    ///
    /// A resize recheck still pending at that point is applied before
    /// returning.
    pub async fn run(self, mut events: mpsc::Receiver<Event>) -> RuntimeOutput {
        let Runtime {
            mut document,
            mut groups,
            mut resize,
            mut ticks,
        } = self;

        info!("runtime started with {} groups", groups.len());

        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        break;
                    };
                    handle_event(&mut document, &mut groups, &mut resize, event);
                }
                Some(generation) = ticks.recv() => {
                    if resize.fire(generation) {
                        recheck_views(&mut document, &mut groups);
                    }
                }
            }
        }

        if resize.cancel() {
            debug!("flushing pending resize recheck");
            recheck_views(&mut document, &mut groups);
        }

        info!("runtime stopped");
        RuntimeOutput { document, groups }
    }
}

fn handle_event(
    document: &mut Document,
    groups: &mut TabAccordions,
    resize: &mut Debouncer,
    event: Event,
) {
    trace!("event: {event:?}");
    match event {
        Event::Click { target } => {
            let hit = groups.handle_click(document, target);
            if !hit.is_empty() {
                debug!("click on {target} handled by {hit:?}");
            }
        }
        Event::Resize { width, height } => {
            document.resize(width, height);
            if groups.responsive() {
                resize.schedule();
            }
        }
    }
}

fn recheck_views(document: &mut Document, groups: &mut TabAccordions) {
    let switched = groups.handle_resize(document);
    if !switched.is_empty() {
        debug!(
            "viewport {}px: {switched:?} switched view",
            document.window().width
        );
    }
}
