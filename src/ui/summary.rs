use eframe::egui::{self, RichText, Ui};

use crate::data::model::{format_euro, CityCostRecord};

/// Key/value overview of the selected city.
pub fn city_overview(ui: &mut Ui, record: &CityCostRecord) {
    ui.heading(format!("Cost Overview for {}", record.city));

    let rows = [
        ("Cost of Living Index", format!("{}", record.cost_index)),
        ("Monthly Rent", format_euro(record.rent)),
        ("Monthly Transport", format_euro(record.transport_pass)),
        ("Meal Cost (Inexpensive Restaurant)", format_euro(record.meal)),
        ("Cinema Ticket", format_euro(record.cinema)),
    ];

    egui::Grid::new("city_overview")
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            for (label, value) in rows {
                ui.strong(label);
                ui.label(value);
                ui.end_row();
            }
            ui.strong("Estimated Total Monthly Student Cost");
            ui.label(RichText::new(format_euro(record.total_student_cost)).strong());
            ui.end_row();
        });
}
