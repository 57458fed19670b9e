use crate::app::App;

mod app;
mod browser;
mod components;
mod logging;

fn main() {
    logging::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
