mod app;
mod disclaimer;
mod theme;

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Unable to init logger");
    yew::Renderer::<app::App>::new().render();
}
