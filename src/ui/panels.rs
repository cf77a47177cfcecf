use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::Handle;
use crate::data::model::format_euro;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: city selector and cost range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let (Some(dataset), Some(bounds), Some(range)) =
        (&state.dataset, state.cost_bounds(), state.cost_range)
    else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let cities: Vec<String> = dataset.city_names().map(str::to_string).collect();

    // ---- City selector ----
    ui.strong("Select a city");
    let current = state.selected_city.clone().unwrap_or_default();
    let mut chosen = current.clone();
    egui::ComboBox::from_id_salt("city_select")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for city in &cities {
                ui.selectable_value(&mut chosen, city.clone(), city);
            }
        });
    if chosen != current {
        state.select_city(&chosen);
    }

    ui.separator();

    // ---- Cost range: two linked sliders ----
    ui.strong("Filter by Total Student Cost (€)");
    // Without smart_aim the track ends land exactly on the bounds.
    let mut lo = range.lo;
    let mut hi = range.hi;
    let lo_changed = ui
        .add(
            egui::Slider::new(&mut lo, bounds.lo..=bounds.hi)
                .smart_aim(false)
                .text("min")
                .prefix("€"),
        )
        .changed();
    let hi_changed = ui
        .add(
            egui::Slider::new(&mut hi, bounds.lo..=bounds.hi)
                .smart_aim(false)
                .text("max")
                .prefix("€"),
        )
        .changed();

    if lo_changed {
        state.drag_cost_range(Handle::Min, lo);
    } else if hi_changed {
        state.drag_cost_range(Handle::Max, hi);
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("Reset").clicked() {
            state.reset_cost_range();
        }
        ui.label(format!("{} – {}", format_euro(bounds.lo), format_euro(bounds.hi)));
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_reload = state.source_path.is_some();
            if ui.add_enabled(can_reload, egui::Button::new("Reload")).clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} cities loaded, {} in range",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open cost of living data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
