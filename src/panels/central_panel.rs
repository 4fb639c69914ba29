use crate::ColoringApp;

pub fn central_panel(app: &mut ColoringApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let view = ui.available_rect_before_wrap();
        ui.allocate_rect(view, egui::Sense::click_and_drag());

        let Some(size) = app.editor.artwork_size() else {
            ui.centered_and_justified(|ui| {
                ui.label("Drop a PNG or JPEG line drawing here to start coloring");
            });
            return;
        };

        if app.needs_fit {
            app.editor.fit_to_view(view.size());
            app.needs_fit = false;
        }

        // Ctrl+scroll and trackpad pinch; touch pinches go through the gesture controller
        let hovered = ui.rect_contains_pointer(view);
        let zoom = ctx.input(|i| if i.multi_touch().is_none() { i.zoom_delta() } else { 1.0 });
        if hovered && !app.input.has_touches() && zoom != 1.0 {
            app.editor.viewport_mut().apply_pinch(zoom);
        }

        let canvas_rect = app.editor.viewport().canvas_rect(view, size);
        app.editor.set_canvas_rect(canvas_rect);

        for event in app.input.process_input(ctx, view, ui.layer_id()) {
            app.editor.handle_touch(&event);
        }

        let painter = ui.painter_at(view);
        app.renderer.paint(ctx, &painter, &app.editor, canvas_rect);
    });
}
