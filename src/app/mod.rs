use crate::data::Catalog;
use crate::error::CatalogError;
use crate::model::Topic;
use crate::session::Session;
use egui::Visuals;

// Submódulos
pub mod actions;
pub mod queries;
pub mod toasts;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{AnswerMark, AnswerRow, LevelRow, ScoreBoard};
pub use toasts::ToastQueue;

pub struct QuestApp {
    pub catalog: Catalog,
    pub session: Session,
    pub show_formulas: bool,
    pub formula_tab: Topic,
    pub toasts: ToastQueue,
}

impl QuestApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, CatalogError> {
        cc.egui_ctx.set_visuals(Visuals::light());
        let catalog = Catalog::embedded()?;
        log::info!("Геометрия Квест: {} niveles cargados", catalog.len());
        Ok(Self::with_catalog(catalog))
    }

    /// Creador para `eframe::run_native` y `WebRunner`
    pub fn boxed(
        cc: &eframe::CreationContext<'_>,
    ) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Box::new(Self::new(cc)?))
    }

    /// Construye la app sin contexto egui (tests y arranque)
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: Session::default(),
            show_formulas: false,
            formula_tab: Topic::Triangles,
            toasts: ToastQueue::default(),
        }
    }
}
