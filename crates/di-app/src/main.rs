//! Data Insight Dashboard application entry point

use anyhow::Result;
use eframe::egui;
use tracing::{error, info};

use di_core::{DataTable, SelectionState};
use di_views::{run_pass, ArtifactRenderer};

mod controls;
mod draw;

const SELECTION_STORAGE_KEY: &str = "dashboard_selection";

/// One uploaded table and its provenance.
struct Session {
    file_name: String,
    table: DataTable,
}

/// Main application state
struct DashboardApp {
    /// Current uploaded table, if any.
    session: Option<Session>,

    /// The user's panel selection; survives uploads and restarts.
    selection: SelectionState,

    /// Last ingest failure, shown until the next successful upload.
    upload_error: Option<String>,
}

impl DashboardApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let selection = cc
            .storage
            .and_then(|storage| storage.get_string(SELECTION_STORAGE_KEY))
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();

        Self {
            session: None,
            selection,
            upload_error: None,
        }
    }

    /// Prompt for a CSV file and ingest it.
    ///
    /// An ingest failure leaves the session in its pre-upload state; the
    /// user can simply try again.
    fn open_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .pick_file()
        else {
            return;
        };

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.csv")
            .to_string();

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(file = %file_name, %err, "could not read uploaded file");
                self.upload_error = Some(format!("Could not read {file_name}: {err}"));
                return;
            }
        };

        match di_data::ingest(&bytes) {
            Ok(table) => {
                info!(
                    file = %file_name,
                    rows = table.num_rows(),
                    columns = table.num_columns(),
                    "table loaded"
                );
                self.selection.seed_defaults(&table);
                self.session = Some(Session { file_name, table });
                self.upload_error = None;
            }
            Err(err) => {
                error!(file = %file_name, %err, "ingest failed");
                self.upload_error = Some(err.to_string());
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Data Insight Dashboard");
                ui.separator();
                if ui.button("Upload CSV…").clicked() {
                    self.open_file();
                }
                if let Some(session) = &self.session {
                    ui.label(format!(
                        "{} — {} rows × {} columns",
                        session.file_name,
                        session.table.num_rows(),
                        session.table.num_columns()
                    ));
                }
            });
            if let Some(message) = &self.upload_error {
                ui.colored_label(egui::Color32::from_rgb(250, 100, 100), message);
            }
        });

        if let Some(session) = &self.session {
            egui::SidePanel::left("controls")
                .default_width(260.0)
                .show(ctx, |ui| {
                    controls::selection_panel(ui, &mut self.selection, &session.table);
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    // One full resolve-and-render pass per frame; the
                    // selection was only mutated before this point.
                    let outcomes = run_pass(&session.table, &self.selection, &mut ArtifactRenderer);
                    for outcome in &outcomes {
                        draw::panel(ui, outcome);
                        ui.add_space(12.0);
                    }
                });
            });
        } else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("Upload a CSV to see charts and explore visually.");
                });
            });
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(&self.selection) {
            storage.set_string(SELECTION_STORAGE_KEY, json);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting Data Insight Dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Data Insight Dashboard",
        options,
        Box::new(|cc| Box::new(DashboardApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
