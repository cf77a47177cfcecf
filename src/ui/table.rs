use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{
    format_euro, CityCostRecord, COL_CINEMA, COL_CITY, COL_COST_INDEX, COL_MEAL, COL_RENT,
    COL_TRANSPORT_PASS,
};

const ROW_HEIGHT: f32 = 18.0;

/// Tabular view of the cities in range, every source column plus the total.
pub fn working_set_table(ui: &mut Ui, records: &[&CityCostRecord]) {
    let headers = [
        COL_CITY,
        COL_COST_INDEX,
        COL_MEAL,
        COL_TRANSPORT_PASS,
        COL_RENT,
        COL_CINEMA,
        "Total Student Cost",
    ];

    TableBuilder::new(ui)
        .id_salt("working_set")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(90.0))
        .columns(Column::auto().at_least(70.0), headers.len() - 1)
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let r = records[row.index()];
                let cells = [
                    r.city.clone(),
                    r.cost_index.to_string(),
                    format_euro(r.meal),
                    format_euro(r.transport_pass),
                    format_euro(r.rent),
                    format_euro(r.cinema),
                    format_euro(r.total_student_cost),
                ];
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
