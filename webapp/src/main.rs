#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
mod state;

mod components;
use components::navigation::NavBar;

mod home;
use home::Dashboard;

mod products;
use products::Products;

mod categories;
use categories::Categories;

mod pages;
use pages::Pages;

mod links;
use links::Navigation;

mod settings;
use settings::Settings;

mod export;
use export::Export;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Dashboard {},
        #[route("/products")]
        Products {},
        #[route("/categories")]
        Categories {},
        #[route("/pages")]
        Pages {},
        #[route("/navigation")]
        Navigation {},
        #[route("/settings")]
        Settings {},
        #[route("/export")]
        Export {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::BUILDER_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
