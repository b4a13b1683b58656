use crate::QuestApp;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Id del `<canvas>` en el index.html
const CANVAS_ID: &str = "geometry_quest_canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if let Err(e) = eframe::WebLogger::init(log::LevelFilter::Info) {
        // solo falla si ya hay otro logger instalado, que recibe este aviso
        log::warn!("WebLogger no inicializado: {e}");
    }

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = find_canvas() else {
            log::error!("No se encontró el canvas #{CANVAS_ID}");
            return;
        };
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(QuestApp::boxed),
            )
            .await;
        if let Err(e) = result {
            log::error!("No se pudo arrancar la app: {e:?}");
        }
    });
    Ok(())
}

fn find_canvas() -> Option<web_sys::HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into()
        .ok()
}
