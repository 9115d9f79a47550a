//! Panel drawing: artifacts in, egui widgets out

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use di_views::extract::display_value;
use di_views::{
    BarEntry, ColumnSummary, HeatCell, PanelArtifact, PanelOutcome, PieSlice,
};

const PLOT_HEIGHT: f32 = 260.0;

/// Draw one pass outcome: a rendered artifact, or the skip reason in its
/// place.
pub fn panel(ui: &mut Ui, outcome: &PanelOutcome<PanelArtifact>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        match outcome {
            PanelOutcome::Skipped { kind, reason } => {
                ui.strong(kind.label());
                ui.weak(format!("Skipped: {reason}"));
            }
            PanelOutcome::Rendered { kind, artifact } => {
                ui.strong(kind.label());
                ui.push_id(kind.label(), |ui| artifact_ui(ui, artifact));
            }
        }
    });
}

fn artifact_ui(ui: &mut Ui, artifact: &PanelArtifact) {
    match artifact {
        PanelArtifact::Points {
            x_label,
            y_label,
            points,
            color,
            trend,
            trend_note,
        } => {
            Plot::new("scatter")
                .legend(Legend::default())
                .height(PLOT_HEIGHT)
                .show(ui, |plot_ui| {
                    plot_ui.points(
                        Points::new(PlotPoints::from(points.clone()))
                            .color(*color)
                            .radius(2.5)
                            .name(format!("{y_label} vs {x_label}")),
                    );
                    if let Some(endpoints) = trend {
                        plot_ui.line(
                            Line::new(PlotPoints::from(endpoints.to_vec()))
                                .color(Color32::WHITE)
                                .name("trend"),
                        );
                    }
                });
            if let Some(note) = trend_note {
                ui.weak(format!("Trend line unavailable: {note}"));
            }
        }
        PanelArtifact::Series {
            x_label,
            y_label,
            points,
            color,
        } => {
            Plot::new("line")
                .legend(Legend::default())
                .height(PLOT_HEIGHT)
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::from(points.clone()))
                            .color(*color)
                            .name(format!("{y_label} over {x_label}")),
                    );
                });
        }
        PanelArtifact::Bars { bars, .. } => bar_chart(ui, bars),
        PanelArtifact::Slices { slices } => pie(ui, slices),
        PanelArtifact::Heatmap { columns, cells } => heatmap(ui, columns, cells),
        PanelArtifact::Rows { head } => preview_table(ui, head),
        PanelArtifact::Summary { columns } => summary_table(ui, columns),
    }
}

fn bar_chart(ui: &mut Ui, bars: &[BarEntry]) {
    let chart_bars: Vec<Bar> = bars
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::new(i as f64, entry.value)
                .width(0.6)
                .name(entry.label.clone())
                .fill(entry.color)
        })
        .collect();

    Plot::new("bars")
        .legend(Legend::default())
        .height(PLOT_HEIGHT)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(chart_bars));
        });
}

fn pie(ui: &mut Ui, slices: &[PieSlice]) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(220.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for slice in slices {
        let sweep = slice.fraction * std::f64::consts::TAU;
        // Triangle fan: stays well-formed for slices past a half turn.
        let steps = ((sweep / 0.05).ceil() as usize).max(2);
        let mut prev = arc_point(center, radius, start);
        for step in 1..=steps {
            let angle = start + sweep * step as f64 / steps as f64;
            let next = arc_point(center, radius, angle);
            painter.add(egui::Shape::convex_polygon(
                vec![center, prev, next],
                slice.color,
                Stroke::NONE,
            ));
            prev = next;
        }
        start += sweep;
    }

    for slice in slices {
        ui.horizontal(|ui| {
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter_at(swatch).rect_filled(swatch, 2.0, slice.color);
            ui.label(format!(
                "{} — {:.1}% ({})",
                slice.label,
                slice.fraction * 100.0,
                slice.value
            ));
        });
    }
}

fn arc_point(center: Pos2, radius: f32, angle: f64) -> Pos2 {
    center + Vec2::new(angle.cos() as f32, angle.sin() as f32) * radius
}

fn heatmap(ui: &mut Ui, columns: &[String], cells: &[Vec<HeatCell>]) {
    let n = columns.len();
    let label_margin = 90.0;
    let cell_size = ((ui.available_width() - label_margin - 40.0) / n as f32).clamp(24.0, 56.0);

    let size = Vec2::new(
        label_margin + cell_size * n as f32,
        label_margin + cell_size * n as f32,
    );
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let origin = rect.min + Vec2::splat(label_margin);

    for (i, row) in cells.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let cell_rect = Rect::from_min_size(
                origin + Vec2::new(j as f32 * cell_size, i as f32 * cell_size),
                Vec2::splat(cell_size),
            );

            match cell.color {
                Some(color) => {
                    painter.rect_filled(cell_rect, 0.0, color);
                    let text_color = if cell.value.abs() > 0.5 {
                        Color32::WHITE
                    } else {
                        Color32::BLACK
                    };
                    painter.text(
                        cell_rect.center(),
                        Align2::CENTER_CENTER,
                        format!("{:.2}", cell.value),
                        FontId::proportional(10.0),
                        text_color,
                    );
                }
                None => {
                    // Undefined correlation: blank cell, not a fake zero.
                    painter.rect_filled(cell_rect, 0.0, Color32::from_gray(60));
                    painter.text(
                        cell_rect.center(),
                        Align2::CENTER_CENTER,
                        "–",
                        FontId::proportional(10.0),
                        Color32::GRAY,
                    );
                }
            }
        }
    }

    for (i, name) in columns.iter().enumerate() {
        painter.text(
            Pos2::new(
                origin.x + (i as f32 + 0.5) * cell_size,
                origin.y - 5.0,
            ),
            Align2::CENTER_BOTTOM,
            name,
            FontId::proportional(10.0),
            Color32::GRAY,
        );
        painter.text(
            Pos2::new(
                origin.x - 5.0,
                origin.y + (i as f32 + 0.5) * cell_size,
            ),
            Align2::RIGHT_CENTER,
            name,
            FontId::proportional(10.0),
            Color32::GRAY,
        );
    }
}

fn preview_table(ui: &mut Ui, head: &arrow::record_batch::RecordBatch) {
    let schema = head.schema();
    let num_columns = head.num_columns();

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0), num_columns)
        .header(20.0, |mut header| {
            for field in schema.fields() {
                header.col(|ui| {
                    ui.strong(field.name());
                });
            }
        })
        .body(|mut body| {
            for row in 0..head.num_rows() {
                body.row(18.0, |mut table_row| {
                    for col in 0..num_columns {
                        let text = display_value(head.column(col).as_ref(), row);
                        table_row.col(|ui| {
                            ui.label(text.clone());
                        });
                    }
                });
            }
        });
}

fn summary_table(ui: &mut Ui, columns: &[ColumnSummary]) {
    const HEADERS: [&str; 12] = [
        "Column", "Count", "Mean", "Std Dev", "Min", "Q1", "Median", "Q3", "Max", "Unique",
        "Top", "Freq",
    ];

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(50.0), HEADERS.len())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for summary in columns {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&summary.name);
                    });
                    row.col(|ui| {
                        ui.label(summary.count.to_string());
                    });

                    let numeric_cells: [Option<f64>; 7] = match &summary.numeric {
                        Some(n) => [
                            Some(n.mean),
                            Some(n.std_dev),
                            Some(n.min),
                            Some(n.q1),
                            Some(n.median),
                            Some(n.q3),
                            Some(n.max),
                        ],
                        None => [None; 7],
                    };
                    for cell in numeric_cells {
                        row.col(|ui| match cell {
                            Some(value) => {
                                ui.label(format!("{value:.2}"));
                            }
                            None => {
                                ui.label("-");
                            }
                        });
                    }

                    match &summary.categorical {
                        Some(c) => {
                            row.col(|ui| {
                                ui.label(c.unique.to_string());
                            });
                            row.col(|ui| {
                                ui.label(&c.top);
                            });
                            row.col(|ui| {
                                ui.label(c.freq.to_string());
                            });
                        }
                        None => {
                            for _ in 0..3 {
                                row.col(|ui| {
                                    ui.label("-");
                                });
                            }
                        }
                    }
                });
            }
        });
}
