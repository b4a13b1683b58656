// src/ui/helpers.rs
use crate::model::Difficulty;
use crate::view_models::{AnswerMark, AnswerRow};
use egui::{Button, Color32, Frame, RichText, Ui, Vec2};

pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const PURPLE: Color32 = Color32::from_rgb(139, 92, 246);
pub const GOLD: Color32 = Color32::from_rgb(234, 179, 8);

/// Botón de respuesta a ancho completo. Verde/rojo tras revelar.
pub fn answer_button(ui: &mut Ui, row: &AnswerRow, width: f32) -> bool {
    let text = RichText::new(row.label()).size(17.0);
    let (text, fill) = match row.mark {
        AnswerMark::Correct => (text.color(Color32::WHITE), Some(GREEN)),
        AnswerMark::Wrong => (text.color(Color32::WHITE), Some(RED)),
        AnswerMark::None if row.selected => (text.color(Color32::WHITE), Some(PURPLE)),
        AnswerMark::None => (text, None),
    };
    let mut button = Button::new(text).min_size(Vec2::new(width, 44.0));
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    ui.add_enabled(row.enabled, button).clicked()
}

/// Etiqueta pequeña con fondo de color
pub fn badge(ui: &mut Ui, text: &str, fill: Color32) {
    Frame::default()
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::WHITE).small().strong());
        });
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => Color32::from_rgb(100, 116, 139),
        Difficulty::Medium => PURPLE,
        Difficulty::Hard => RED,
    }
}
