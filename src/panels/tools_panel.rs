use crate::ColoringApp;
use crate::tool::Tool;

pub fn tools_panel(app: &mut ColoringApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.editor.tool();
            for tool in Tool::ALL {
                if ui.selectable_label(active == tool, tool.name()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.editor.select_tool(tool);
                }
            }

            if app.editor.tool().draws_strokes() {
                let mut width = app.editor.brush_width();
                if ui
                    .add(egui::Slider::new(&mut width, 1.0..=64.0).text("Width"))
                    .changed()
                {
                    app.editor.set_brush_width(width);
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.editor.can_undo();
                let can_redo = app.editor.can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.editor.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.editor.redo();
                }
            });

            if ui
                .add_enabled(app.editor.can_reset(), egui::Button::new("Reset"))
                .clicked()
            {
                app.show_reset_confirm = true;
            }
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Save as");
                let mut path = app.export_path.display().to_string();
                if ui.text_edit_singleline(&mut path).changed() {
                    app.export_path = path.into();
                }
            });
            if ui
                .add_enabled(app.editor.has_artwork(), egui::Button::new("Save PNG"))
                .clicked()
            {
                app.save_page();
            }

            ui.separator();
            ui.label(format!("Zoom: {:.0}%", app.editor.viewport().scale() * 100.0));
            if let Some(history) = app.editor.history() {
                ui.label(format!(
                    "History: {} / {}",
                    history.cursor().map_or(0, |c| c + 1),
                    history.len()
                ));
            }
            if let Some(status) = &app.status {
                ui.separator();
                ui.label(status);
            }
        });
}
