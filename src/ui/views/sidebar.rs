use crate::QuestApp;
use crate::ui::helpers::{GOLD, GREEN};
use crate::ui::layout::card;
use egui::{Button, Color32, Frame, RichText, Ui};

pub fn ui_sidebar(app: &mut QuestApp, ui: &mut Ui) {
    ui.columns(2, |cols| {
        ui_achievements(app, &mut cols[0]);
        ui_reference(app, &mut cols[1]);
    });
}

fn ui_achievements(app: &QuestApp, ui: &mut Ui) {
    card(ui, |ui| {
        ui.label(RichText::new("🏅 Достижения").size(22.0).strong());
        ui.add_space(8.0);

        for achievement in &app.session.achievements {
            let (fill, stroke) = if achievement.unlocked {
                (Color32::from_rgb(254, 249, 195), GOLD)
            } else {
                (Color32::TRANSPARENT, Color32::GRAY)
            };
            Frame::default()
                .fill(fill)
                .stroke(egui::Stroke::new(1.5, stroke))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(10, 6))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let (icon, title) = if achievement.unlocked {
                            (
                                RichText::new(achievement.icon).size(28.0),
                                RichText::new(achievement.title)
                                    .strong()
                                    .color(Color32::from_rgb(113, 63, 18)),
                            )
                        } else {
                            // bloqueado: todo en gris
                            (
                                RichText::new(achievement.icon).size(28.0).color(Color32::GRAY),
                                RichText::new(achievement.title).strong().weak(),
                            )
                        };
                        ui.label(icon);
                        ui.vertical(|ui| {
                            ui.label(title);
                            ui.label(RichText::new(achievement.description).small().weak());
                        });
                    });
                });
            ui.add_space(6.0);
        }
    });
}

fn ui_reference(app: &mut QuestApp, ui: &mut Ui) {
    card(ui, |ui| {
        ui.label(RichText::new("📖 Справочник формул").size(22.0).strong());
        ui.add_space(8.0);
        let width = ui.available_width();
        if ui
            .add(Button::new("📚 Открыть справочник").min_size(egui::vec2(width, 36.0)))
            .clicked()
        {
            app.open_formulas();
        }

        ui.add_space(14.0);
        ui.label(RichText::new("Уровни:").strong());
        ui.add_space(4.0);
        for row in app.level_rows() {
            let text = RichText::new(row.label());
            let text = if row.completed { text.color(GREEN) } else { text };
            ui.label(text);
        }
    });
}
