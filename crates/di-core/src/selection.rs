//! Per-session selection state
//!
//! Holds which panels are enabled, their order and their column bindings.
//! Mutated only through discrete [`SelectionEvent`]s applied between render
//! passes; a pass only ever reads it. No operation here fails: bindings that
//! turn out to be invalid are caught at resolution time by the panel
//! renderer.

use serde::{Deserialize, Serialize};

use crate::panel::{PanelKind, PanelRequest, Role, RoleBindings};
use crate::table::DataTable;

/// One catalog entry in the user's ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEntry {
    pub kind: PanelKind,
    pub enabled: bool,
    pub bindings: RoleBindings,
    pub fit_line: bool,
}

impl PanelEntry {
    fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            enabled: true,
            bindings: RoleBindings::default(),
            fit_line: false,
        }
    }
}

/// Discrete user-interaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    TogglePanel(PanelKind),
    MovePanelUp(PanelKind),
    MovePanelDown(PanelKind),
    Bind {
        panel: PanelKind,
        role: Role,
        column: Option<String>,
    },
    SetFitLine {
        panel: PanelKind,
        enabled: bool,
    },
}

/// The user's current choices, one instance per active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    panels: Vec<PanelEntry>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            panels: PanelKind::CATALOG.iter().copied().map(PanelEntry::new).collect(),
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All catalog entries in the user's chosen order.
    pub fn entries(&self) -> &[PanelEntry] {
        &self.panels
    }

    pub fn entry(&self, kind: PanelKind) -> Option<&PanelEntry> {
        self.panels.iter().find(|e| e.kind == kind)
    }

    fn entry_mut(&mut self, kind: PanelKind) -> Option<&mut PanelEntry> {
        self.panels.iter_mut().find(|e| e.kind == kind)
    }

    /// Enabled panels, in order, as resolution requests.
    pub fn requests(&self) -> Vec<PanelRequest> {
        self.panels
            .iter()
            .filter(|e| e.enabled)
            .map(|e| PanelRequest {
                kind: e.kind,
                bindings: e.bindings.clone(),
                fit_line: e.fit_line,
            })
            .collect()
    }

    /// Apply one user-interaction event. Infallible; unknown combinations
    /// are ignored.
    pub fn apply(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::TogglePanel(kind) => {
                if let Some(entry) = self.entry_mut(kind) {
                    entry.enabled = !entry.enabled;
                    tracing::debug!(?kind, enabled = entry.enabled, "panel toggled");
                }
            }
            SelectionEvent::MovePanelUp(kind) => {
                if let Some(idx) = self.panels.iter().position(|e| e.kind == kind) {
                    if idx > 0 {
                        self.panels.swap(idx, idx - 1);
                    }
                }
            }
            SelectionEvent::MovePanelDown(kind) => {
                if let Some(idx) = self.panels.iter().position(|e| e.kind == kind) {
                    if idx + 1 < self.panels.len() {
                        self.panels.swap(idx, idx + 1);
                    }
                }
            }
            SelectionEvent::Bind { panel, role, column } => {
                if let Some(entry) = self.entry_mut(panel) {
                    entry.bindings.set(role, column);
                }
            }
            SelectionEvent::SetFitLine { panel, enabled } => {
                if let Some(entry) = self.entry_mut(panel) {
                    entry.fit_line = enabled;
                }
            }
        }
    }

    /// Reconcile bindings with a freshly ingested table.
    ///
    /// Bindings naming columns the new table does not have are cleared, then
    /// unset axis roles default to the first two numeric columns (left unset
    /// when fewer than two exist) and unset pie roles to the first
    /// non-numeric and first numeric column.
    pub fn seed_defaults(&mut self, table: &DataTable) {
        let numeric = table.numeric_columns();
        let default_x = numeric.first().cloned();
        let default_y = if numeric.len() >= 2 {
            Some(numeric[1].clone())
        } else {
            None
        };
        let default_category = table
            .all_columns()
            .iter()
            .find(|c| !table.is_numeric_column(c))
            .cloned();

        for entry in &mut self.panels {
            for role in [Role::X, Role::Y, Role::Category, Role::Value] {
                if let Some(column) = entry.bindings.get(role) {
                    if !table.has_column(column) {
                        entry.bindings.set(role, None);
                    }
                }
            }

            match entry.kind {
                PanelKind::Scatter | PanelKind::Line | PanelKind::Bar => {
                    // Axis defaults follow the first two numeric columns and
                    // stay unset when fewer than two exist.
                    if default_y.is_some() {
                        if entry.bindings.x.is_none() {
                            entry.bindings.x = default_x.clone();
                        }
                        if entry.bindings.y.is_none() {
                            entry.bindings.y = default_y.clone();
                        }
                    }
                }
                PanelKind::Pie => {
                    if entry.bindings.category.is_none() {
                        entry.bindings.category = default_category.clone();
                    }
                    if entry.bindings.value.is_none() {
                        entry.bindings.value = default_x.clone();
                    }
                }
                PanelKind::Preview | PanelKind::Stats | PanelKind::Heatmap => {}
            }
        }
    }
}
