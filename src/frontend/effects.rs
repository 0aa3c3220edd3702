use js_sys::{Object, Reflect};
use log::warn;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // canvas-confetti, loaded by index.html
    #[wasm_bindgen(catch, js_namespace = window, js_name = confetti)]
    fn confetti(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Fires the confetti burst shown when a pair is found.
pub fn celebrate(ticks: u32) {
    let options = Object::new();
    if let Err(e) = Reflect::set(&options, &JsValue::from_str("ticks"), &JsValue::from(ticks)) {
        warn!("could not build confetti options: {:?}", e);
        return;
    }
    if let Err(e) = confetti(&options) {
        warn!("confetti unavailable: {:?}", e);
    }
}
