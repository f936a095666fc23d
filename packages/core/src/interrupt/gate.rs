//! Maintenance gate decision logic.

use crate::{MaintenanceStatus, Viewer};

/// Decides whether the full-screen maintenance block is shown.
///
/// The gate holds the latest fetched maintenance row and viewer identity;
/// both are overwritten wholesale on every fetch, so the rendered decision
/// always tracks the most recent read (latest wins) regardless of event
/// delivery order.
#[derive(Debug, Default)]
pub struct MaintenanceGate {
    status: Option<MaintenanceStatus>,
    viewer: Option<Viewer>,
}

impl MaintenanceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the last fetched maintenance row.
    pub fn set_status(&mut self, status: Option<MaintenanceStatus>) {
        self.status = status;
    }

    /// Replace the resolved viewer identity.
    pub fn set_viewer(&mut self, viewer: Option<Viewer>) {
        self.viewer = viewer;
    }

    /// The latest maintenance row, for rendering the overlay content.
    pub fn status(&self) -> Option<&MaintenanceStatus> {
        self.status.as_ref()
    }

    /// Whether the blocking overlay is shown.
    ///
    /// Blocks only when maintenance is active AND the viewer is resolved AND
    /// the viewer is not the administrator. An unresolved viewer fails open:
    /// suppressing the block is safer than locking out an admin whose
    /// identity has not loaded yet.
    pub fn is_blocking(&self) -> bool {
        let active = self.status.as_ref().is_some_and(|s| s.is_active);
        let non_admin_viewer = self.viewer.as_ref().is_some_and(|v| !v.is_admin);
        active && non_admin_viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_ADMIN_EMAIL;

    fn active_status() -> MaintenanceStatus {
        MaintenanceStatus {
            is_active: true,
            message: "Upgrading".to_string(),
            expected_downtime: "30 minutes".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn blocks_resolved_non_admin() {
        let mut gate = MaintenanceGate::new();
        gate.set_status(Some(active_status()));
        gate.set_viewer(Some(Viewer::resolve("player@example.com", DEFAULT_ADMIN_EMAIL)));
        assert!(gate.is_blocking());
    }

    #[test]
    fn admin_is_exempt() {
        let mut gate = MaintenanceGate::new();
        gate.set_status(Some(active_status()));
        gate.set_viewer(Some(Viewer::resolve(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_EMAIL)));
        assert!(!gate.is_blocking());
    }

    #[test]
    fn unknown_viewer_fails_open() {
        let mut gate = MaintenanceGate::new();
        gate.set_status(Some(active_status()));
        gate.set_viewer(None);
        assert!(!gate.is_blocking());
    }

    #[test]
    fn inactive_maintenance_never_blocks() {
        let mut gate = MaintenanceGate::new();
        gate.set_status(Some(MaintenanceStatus::default()));
        gate.set_viewer(Some(Viewer::resolve("player@example.com", DEFAULT_ADMIN_EMAIL)));
        assert!(!gate.is_blocking());
    }

    #[test]
    fn latest_fetched_row_wins() {
        let mut gate = MaintenanceGate::new();
        gate.set_viewer(Some(Viewer::resolve("player@example.com", DEFAULT_ADMIN_EMAIL)));

        // Two toggles observed out of order: each fetch replaces the row
        // wholesale, so the last fetch decides.
        gate.set_status(Some(active_status()));
        assert!(gate.is_blocking());
        gate.set_status(Some(MaintenanceStatus::default()));
        assert!(!gate.is_blocking());
    }
}
