//! Alert inbox screen model.

use crate::filter::AlertFilter;
use crate::model::alert::{Alert, AlertPatch};
use crate::model::record::RecordId;
use crate::service::list_view::ListView;
use crate::store::record_store::StoreResult;
use crate::summary::AlertSummary;
use chrono::NaiveDate;
use log::info;

/// Alert inbox: every alert plus the current inbox filter.
pub type AlertService = ListView<Alert, AlertFilter>;

impl ListView<Alert, AlertFilter> {
    /// Marks an alert resolved by `resolved_by` on `on`.
    ///
    /// Returns `Ok(false)` when no alert has `id`.
    pub fn resolve(
        &mut self,
        id: RecordId,
        resolved_by: &str,
        on: NaiveDate,
    ) -> StoreResult<bool> {
        let changed = self.update(id, &AlertPatch::resolve(resolved_by, on))?;
        if changed {
            info!("event=alert_resolve module=service status=ok id={id}");
        }
        Ok(changed)
    }

    /// Clears the resolution of an alert.
    pub fn reopen(&mut self, id: RecordId) -> StoreResult<bool> {
        self.update(id, &AlertPatch::reopen())
    }

    /// Deletes an alert from the inbox.
    pub fn dismiss(&mut self, id: RecordId) -> Option<Alert> {
        let removed = self.remove(id);
        if removed.is_some() {
            info!("event=alert_dismiss module=service status=ok id={id}");
        }
        removed
    }

    /// Header counts over every alert, ignoring the filter.
    pub fn summary(&self) -> AlertSummary {
        AlertSummary::from_alerts(self.store().as_slice())
    }

    /// Unresolved critical alerts, in store order.
    pub fn open_critical(&self) -> Vec<Alert> {
        self.store()
            .iter()
            .filter(|alert| alert.is_critical_open())
            .cloned()
            .collect()
    }
}
