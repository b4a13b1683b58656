use egui::{Button, Context, Frame, RichText, Ui, Visuals};

/// Ancho máximo del contenido central
pub const MAX_CONTENT_WIDTH: f32 = 760.0;

pub fn top_panel(ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(RichText::new("📐 Геометрия Квест ✨").size(30.0).strong());
            ui.label(RichText::new("Изучай формулы через приключения!").weak());
            ui.add_space(6.0);
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Тёмная тема").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Светлая тема").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Tarjeta con el fondo de ventana y margen interior fijo
pub fn card(ui: &mut Ui, inner: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style())
        .fill(ui.visuals().window_fill())
        .inner_margin(egui::Margin::symmetric(16, 12))
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho). El derecho se omite si es `None`.
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: Option<&str>,
) -> (bool, bool) {
    let buttons = if right_label.is_some() { 2.0 } else { 1.0 };
    let btn_w = (panel_width - 8.0 * (buttons - 1.0)) / buttons;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 40.0], Button::new(left_label))
            .clicked();
        if let Some(label) = right_label {
            clicked_right = ui.add_sized([btn_w, 40.0], Button::new(label)).clicked();
        }
    });
    (clicked_left, clicked_right)
}
