use crate::QuestApp;
use crate::ui::layout::card;
use egui::{ProgressBar, RichText, Ui};

pub fn ui_score(app: &QuestApp, ui: &mut Ui) {
    let board = app.score_board();

    ui.columns(3, |cols| {
        stat(&mut cols[0], "🏆", "Очки", board.score.to_string());
        stat(&mut cols[1], "🎯", "Прогресс", board.progress_label());
        stat(&mut cols[2], "🔥", "Серия", board.streak_label());
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Общий прогресс").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{}%", board.percent)).strong());
        });
    });
    ui.add(ProgressBar::new(app.progress_fraction()).desired_height(10.0));
}

fn stat(ui: &mut Ui, icon: &str, caption: &str, value: String) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(28.0));
            ui.vertical(|ui| {
                ui.label(RichText::new(caption).weak());
                ui.label(RichText::new(value).size(22.0).strong());
            });
        });
    });
}
