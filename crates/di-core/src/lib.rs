//! Core types for the dashboard: the table model, the panel catalog and
//! the per-session selection state.

pub mod panel;
pub mod selection;
pub mod table;

pub use panel::{PanelKind, PanelRequest, Role, RoleBindings};
pub use selection::{PanelEntry, SelectionEvent, SelectionState};
pub use table::DataTable;
