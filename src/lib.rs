pub mod app;
pub mod data;
pub mod error;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuestApp;
pub use data::Catalog;
pub use error::CatalogError;
pub use session::{Session, Step};

/// Título de la ventana y nombre de la app para eframe
pub const APP_TITLE: &str = "Геометрия Квест";
