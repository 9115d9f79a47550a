//! The fixed panel catalog and column role bindings

use serde::{Deserialize, Serialize};

/// One visual or tabular output unit in the dashboard.
///
/// Declaration order is the default display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    Preview,
    Stats,
    Scatter,
    Line,
    Bar,
    Pie,
    Heatmap,
}

impl PanelKind {
    /// The full catalog, in default display order.
    pub const CATALOG: [PanelKind; 7] = [
        PanelKind::Preview,
        PanelKind::Stats,
        PanelKind::Scatter,
        PanelKind::Line,
        PanelKind::Bar,
        PanelKind::Pie,
        PanelKind::Heatmap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::Preview => "Data Preview",
            PanelKind::Stats => "Summary Statistics",
            PanelKind::Scatter => "Scatter Plot",
            PanelKind::Line => "Line Chart",
            PanelKind::Bar => "Bar Chart",
            PanelKind::Pie => "Pie Chart",
            PanelKind::Heatmap => "Correlation Heatmap",
        }
    }

    /// Roles this panel kind reads from its bindings.
    pub fn roles(&self) -> &'static [Role] {
        match self {
            PanelKind::Scatter | PanelKind::Line | PanelKind::Bar => &[Role::X, Role::Y],
            PanelKind::Pie => &[Role::Category, Role::Value],
            PanelKind::Preview | PanelKind::Stats | PanelKind::Heatmap => &[],
        }
    }
}

/// Semantic role a table column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    X,
    Y,
    Category,
    Value,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::X => "X axis",
            Role::Y => "Y axis",
            Role::Category => "Category",
            Role::Value => "Value",
        }
    }
}

/// Assignment of table columns to the semantic roles a panel may need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBindings {
    pub x: Option<String>,
    pub y: Option<String>,
    pub category: Option<String>,
    pub value: Option<String>,
}

impl RoleBindings {
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::X => self.x.as_deref(),
            Role::Y => self.y.as_deref(),
            Role::Category => self.category.as_deref(),
            Role::Value => self.value.as_deref(),
        }
    }

    pub fn set(&mut self, role: Role, column: Option<String>) {
        match role {
            Role::X => self.x = column,
            Role::Y => self.y = column,
            Role::Category => self.category = column,
            Role::Value => self.value = column,
        }
    }
}

/// User intent for one panel: the kind plus its bindings and capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRequest {
    pub kind: PanelKind,
    pub bindings: RoleBindings,
    /// Overlay a least-squares fit on a scatter plot. Fail-soft: a
    /// degenerate fit drops the overlay and records the reason, it does
    /// not skip the panel.
    pub fit_line: bool,
}

impl PanelRequest {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            bindings: RoleBindings::default(),
            fit_line: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_kind_once() {
        for kind in PanelKind::CATALOG {
            assert_eq!(
                PanelKind::CATALOG.iter().filter(|k| **k == kind).count(),
                1
            );
        }
    }

    #[test]
    fn bindings_roundtrip_through_roles() {
        let mut bindings = RoleBindings::default();
        bindings.set(Role::X, Some("a".to_string()));
        bindings.set(Role::Category, Some("c".to_string()));
        assert_eq!(bindings.get(Role::X), Some("a"));
        assert_eq!(bindings.get(Role::Category), Some("c"));
        assert_eq!(bindings.get(Role::Y), None);
        bindings.set(Role::X, None);
        assert_eq!(bindings.get(Role::X), None);
    }
}
