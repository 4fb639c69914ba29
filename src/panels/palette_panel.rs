use crate::ColoringApp;
use crate::color::{ColorCategory, FillColor, PaletteMode};

const SWATCH_SIZE: f32 = 32.0;

pub fn palette_panel(app: &mut ColoringApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("palette_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mode = app.editor.palette().mode();
            for category in ColorCategory::ALL {
                let selected = mode == PaletteMode::Seasonal(category);
                if ui.selectable_label(selected, category.name()).clicked() {
                    app.editor.palette_mut().select_category(category);
                }
            }
            let recent_selected = mode == PaletteMode::Recent;
            if ui.selectable_label(recent_selected, "Recent").clicked() {
                app.editor.palette_mut().show_recent();
            }

            ui.separator();

            let mut custom = app.editor.color().to_color32();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut custom,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                app.editor.set_color(FillColor::from_color32(custom));
            }
            if ui.button("Keep color").clicked() {
                let color = app.editor.color();
                app.editor.palette_mut().select_custom(color);
            }
        });

        ui.horizontal_wrapped(|ui| {
            let current = app.editor.color();
            for color in app.editor.palette().swatches() {
                let stroke = if color == current {
                    egui::Stroke::new(3.0, ui.visuals().selection.stroke.color)
                } else {
                    egui::Stroke::new(1.0, egui::Color32::GRAY)
                };
                let swatch = egui::Button::new("")
                    .fill(color.to_color32())
                    .stroke(stroke)
                    .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE));
                if ui.add(swatch).on_hover_text(color.to_string()).clicked() {
                    app.editor.set_color(color);
                    app.editor.palette_mut().remember(color);
                }
            }
        });
    });
}
