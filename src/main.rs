mod audio;
mod catalog;
mod components;
mod host;
mod model;
mod session;
mod state;
mod storage;
mod util;

fn main() {
    yew::Renderer::<components::App>::new().render();
}
