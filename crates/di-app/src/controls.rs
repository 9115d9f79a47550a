//! Selection controls: panel toggles, ordering and column bindings
//!
//! Widgets never mutate the selection directly; they emit events that are
//! applied after the whole panel list has been walked, so a render pass
//! only ever sees a settled state.

use egui::Ui;

use di_core::{DataTable, PanelEntry, PanelKind, Role, SelectionEvent, SelectionState};

pub fn selection_panel(ui: &mut Ui, selection: &mut SelectionState, table: &DataTable) {
    ui.heading("Panels");
    ui.label("Choose which panels appear and in what order.");
    ui.separator();

    let mut events: Vec<SelectionEvent> = Vec::new();
    let entry_count = selection.entries().len();

    for (idx, entry) in selection.entries().iter().enumerate() {
        ui.horizontal(|ui| {
            let mut enabled = entry.enabled;
            if ui.checkbox(&mut enabled, entry.kind.label()).changed() {
                events.push(SelectionEvent::TogglePanel(entry.kind));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(idx + 1 < entry_count, egui::Button::new("⬇").small())
                    .clicked()
                {
                    events.push(SelectionEvent::MovePanelDown(entry.kind));
                }
                if ui
                    .add_enabled(idx > 0, egui::Button::new("⬆").small())
                    .clicked()
                {
                    events.push(SelectionEvent::MovePanelUp(entry.kind));
                }
            });
        });

        if entry.enabled {
            binding_controls(ui, entry, table, &mut events);
        }
        ui.add_space(4.0);
    }

    for event in events {
        selection.apply(event);
    }
}

fn binding_controls(
    ui: &mut Ui,
    entry: &PanelEntry,
    table: &DataTable,
    events: &mut Vec<SelectionEvent>,
) {
    ui.indent(entry.kind.label(), |ui| {
        for &role in entry.kind.roles() {
            ui.horizontal(|ui| {
                ui.label(role.label());
                binding_combo(ui, entry, role, table, events);
            });
        }

        if entry.kind == PanelKind::Scatter {
            let mut fit = entry.fit_line;
            if ui.checkbox(&mut fit, "Trend line").changed() {
                events.push(SelectionEvent::SetFitLine {
                    panel: entry.kind,
                    enabled: fit,
                });
            }
        }
    });
}

fn binding_combo(
    ui: &mut Ui,
    entry: &PanelEntry,
    role: Role,
    table: &DataTable,
    events: &mut Vec<SelectionEvent>,
) {
    let current = entry.bindings.get(role).unwrap_or("—").to_string();

    egui::ComboBox::from_id_source((entry.kind, role))
        .selected_text(current)
        .width(140.0)
        .show_ui(ui, |ui| {
            for column in role_columns(entry.kind, role, table) {
                let selected = entry.bindings.get(role) == Some(column.as_str());
                if ui.selectable_label(selected, column).clicked() && !selected {
                    events.push(SelectionEvent::Bind {
                        panel: entry.kind,
                        role,
                        column: Some(column.clone()),
                    });
                }
            }
        });
}

/// Columns the widget offers for a role: numeric-only roles never list a
/// text column, so an invalid pick cannot be made here.
fn role_columns<'a>(kind: PanelKind, role: Role, table: &'a DataTable) -> &'a [String] {
    match (kind, role) {
        (PanelKind::Bar, Role::X) | (_, Role::Category) => table.all_columns(),
        _ => table.numeric_columns(),
    }
}
