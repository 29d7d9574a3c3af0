//! Update-cycle dispatch between the launcher and the renderers.
//!
//! The launcher decides when widgets refresh and hands over a batch of
//! instance ids. [`dispatch_update`] renders each one independently and
//! passes the template back through [`WidgetHost`].
//!
//! # Fault Isolation
//!
//! Every instance is rendered inside `catch_unwind`. A panic costs that one
//! instance its update for this cycle (the launcher keeps showing the previous
//! view); the rest of the batch is still delivered.

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::Level;

use crate::host_log;
use crate::store::PreferenceStore;
use crate::view::ViewTemplate;
use crate::widgets::WidgetProvider;

/// Launcher-assigned id of one placed widget.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WidgetInstanceId(pub i32);

impl fmt::Display for WidgetInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// Receiver of finished views.
pub trait WidgetHost {
    /// Show `view` on the widget identified by `instance`.
    fn update_widget(&mut self, instance: WidgetInstanceId, view: ViewTemplate);
}

/// Outcome of one update batch.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct UpdateSummary {
    /// Instances that received a new view.
    pub updated: usize,
    /// Instances left as they were because rendering faulted.
    pub skipped: usize,
}

/// Render and deliver a view for every id in `instances`, in order.
pub fn dispatch_update<P, H>(
    provider: &P,
    store: &dyn PreferenceStore,
    host: &mut H,
    instances: &[WidgetInstanceId],
) -> UpdateSummary
where
    P: WidgetProvider + ?Sized,
    H: WidgetHost + ?Sized,
{
    let mut summary = UpdateSummary::default();

    for &instance in instances {
        match panic::catch_unwind(AssertUnwindSafe(|| provider.render(store, instance))) {
            Ok(view) => {
                host.update_widget(instance, view);
                summary.updated += 1;
            }
            Err(_) => {
                host_log!(Level::Error, "Widget {instance}: render faulted, keeping previous view");
                summary.skipped += 1;
            }
        }
    }

    host_log!(
        Level::Debug,
        "Update batch done: {} updated, {} skipped",
        summary.updated,
        summary.skipped
    );
    summary
}

/// Host that keeps the latest view per instance in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    views: BTreeMap<WidgetInstanceId, ViewTemplate>,
    deliveries: usize,
}

impl RecordingHost {
    pub fn new() -> Self { Self::default() }

    /// Latest view delivered for `instance`.
    pub fn view(&self, instance: WidgetInstanceId) -> Option<&ViewTemplate> { self.views.get(&instance) }

    /// Latest views, ordered by instance id.
    pub fn views(&self) -> impl Iterator<Item = (WidgetInstanceId, &ViewTemplate)> {
        self.views.iter().map(|(&id, view)| (id, view))
    }

    /// Total `update_widget` calls, including repeated ids.
    pub const fn deliveries(&self) -> usize { self.deliveries }
}

impl WidgetHost for RecordingHost {
    fn update_widget(&mut self, instance: WidgetInstanceId, view: ViewTemplate) {
        self.views.insert(instance, view);
        self.deliveries += 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
