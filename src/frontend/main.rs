use wasm_logger;

mod app;
mod config;
mod effects;
mod icons;
mod play;
mod start;
mod tile;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
