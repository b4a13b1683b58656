mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuestApp;
use eframe::{App, Frame};
use egui::{CentralPanel, Context, ScrollArea};
use layout::{MAX_CONTENT_WIDTH, bottom_panel, top_panel};

impl App for QuestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // CABECERA
        top_panel(ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(MAX_CONTENT_WIDTH);
                        views::score::ui_score(self, ui);
                        ui.add_space(12.0);
                        views::quiz::ui_quiz(self, ui);
                        ui.add_space(12.0);
                        views::sidebar::ui_sidebar(self, ui);
                    });
                });
        });

        if self.show_formulas {
            views::formulas::ui_formulas(self, ctx);
        }

        views::toast::ui_toasts(self, ctx);
    }
}
