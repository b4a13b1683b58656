use crate::QuestApp;
use crate::app::queries::level_icon;
use crate::ui::helpers::{GREEN, RED, answer_button, badge, difficulty_color};
use crate::ui::layout::{card, two_button_row};
use egui::{Button, Color32, Frame, RichText, Ui};

pub fn ui_quiz(app: &mut QuestApp, ui: &mut Ui) {
    let Some(level) = app.current_level().cloned() else {
        ui.label("Нет уровней");
        return;
    };
    let level_idx = app.session.current_level;

    card(ui, |ui| {
        let panel_width = ui.available_width();

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    badge(ui, level.topic.label(), Color32::from_rgb(71, 85, 105));
                    badge(ui, level.difficulty.label(), difficulty_color(level.difficulty));
                });
                ui.add_space(4.0);
                ui.label(RichText::new(&level.title).size(26.0).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(level_icon(level_idx)).size(40.0));
            });
        });
        ui.add_space(10.0);

        if let Some(formula) = &level.formula {
            Frame::default()
                .fill(Color32::from_rgb(243, 232, 255))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new("Формула:")
                                    .strong()
                                    .color(Color32::from_rgb(88, 28, 135)),
                            );
                            ui.code(formula);
                        });
                    });
                });
            ui.add_space(10.0);
        }

        ui.label(RichText::new(&level.question).size(19.0));
        ui.add_space(10.0);

        // Respuestas
        for row in app.answer_rows() {
            if answer_button(ui, &row, panel_width) {
                app.select_answer(row.index);
            }
            ui.add_space(4.0);
        }

        if let Some(correct) = app.session.last_check_correct(&app.catalog) {
            ui.add_space(6.0);
            let (heading, color) = if correct {
                ("🎉 Отлично!", GREEN)
            } else {
                ("💡 Объяснение:", RED)
            };
            Frame::default()
                .stroke(egui::Stroke::new(2.0, color))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(heading).strong().size(18.0));
                    ui.label(&level.explanation);
                });
        }

        ui.add_space(10.0);

        // Botones de control
        if !app.session.revealed {
            let check = ui.add_enabled(
                app.can_check(),
                Button::new(RichText::new("✔ Проверить ответ").size(17.0))
                    .min_size(egui::vec2(panel_width, 40.0)),
            );
            if check.clicked() {
                app.check_answer();
            }
        } else {
            let next_label = app.has_next_level().then_some("Следующий уровень ➡");
            let (retry, next) =
                two_button_row(ui, panel_width, "⟲ Попробовать снова", next_label);
            if retry {
                app.retry_level();
            }
            if next {
                app.next_level();
            }
        }
    });
}
