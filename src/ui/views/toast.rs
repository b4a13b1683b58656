//! Toasts de acierto, fallo y logros

use crate::QuestApp;
use crate::model::{Notification, NotificationKind};
use crate::ui::helpers::{GOLD, GREEN, RED};
use egui::{Align2, Color32, Context, Id, RichText, Vec2};
use std::time::Duration;

pub fn ui_toasts(app: &mut QuestApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let visible = app.toasts.tick(now);
    if visible.is_empty() {
        return;
    }

    egui::Area::new(Id::new("toasts"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-20.0, -40.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for (notification, alpha) in &visible {
                toast_frame(ui, notification, *alpha);
                ui.add_space(6.0);
            }
        });

    // Mantener el repintado mientras haya animación
    ctx.request_repaint_after(Duration::from_millis(33));
}

fn toast_frame(ui: &mut egui::Ui, notification: &Notification, alpha: f32) {
    let accent = match notification.kind {
        NotificationKind::Success => GREEN,
        NotificationKind::Failure => RED,
        NotificationKind::Achievement => GOLD,
    };
    let bg = ui.visuals().window_fill();

    egui::Frame::NONE
        .fill(apply_alpha(bg, alpha))
        .stroke(egui::Stroke::new(2.0, apply_alpha(accent, alpha)))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(300.0);
            ui.set_max_width(360.0);
            ui.label(
                RichText::new(&notification.title)
                    .color(apply_alpha(accent, alpha))
                    .strong()
                    .size(16.0),
            );
            if let Some(description) = &notification.description {
                ui.label(
                    RichText::new(description)
                        .color(apply_alpha(ui.visuals().text_color(), alpha))
                        .size(13.0),
                );
            }
        });
}

fn apply_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * alpha) as u8,
    )
}
