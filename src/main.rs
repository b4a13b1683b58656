#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use geometry_quest::{APP_TITLE, QuestApp};
    use tracing_subscriber::EnvFilter;

    // RUST_LOG manda; por defecto info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 860.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(QuestApp::boxed),
    )
}

// En WASM el arranque lo hace `web::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
