use crate::QuestApp;
use crate::model::Topic;
use crate::ui::layout::card;
use egui::{Context, Id, Modal, RichText, ScrollArea};

/// Chuleta de fórmulas en un modal con una pestaña por tema
pub fn ui_formulas(app: &mut QuestApp, ctx: &Context) {
    let response = Modal::new(Id::new("formula_reference")).show(ctx, |ui| {
        ui.set_width(560.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("📖 Справочник формул геометрии").size(22.0).strong());
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for topic in Topic::ALL {
                ui.selectable_value(&mut app.formula_tab, topic, topic.label());
            }
        });
        ui.separator();

        ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
            for entry in app.catalog.formulas_for(app.formula_tab) {
                card(ui, |ui| {
                    ui.label(RichText::new(&entry.title).strong());
                    ui.code(&entry.formula);
                    ui.label(RichText::new(&entry.note).small().weak());
                });
                ui.add_space(6.0);
            }
        });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.button("Закрыть").clicked()).inner
    });

    if response.inner || response.should_close() {
        app.close_formulas();
    }
}
