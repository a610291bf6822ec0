use dioxus::prelude::*;

// Pulling in the api crate registers its server functions with the
// fullstack server that dioxus::launch starts here.
#[allow(unused_imports)]
use api as _;

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
