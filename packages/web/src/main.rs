use dioxus::prelude::*;

use ui::AppProviders;
use views::{
    Dashboard, Dispatch, Estimates, Inventory, Invoices, Jobs, Managers, Reports, Scheduling,
    Settings, Techs, TimeTracking, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/users")]
    Users {},
    #[route("/managers")]
    Managers {},
    #[route("/techs")]
    Techs {},
    #[route("/jobs")]
    Jobs {},
    #[route("/scheduling")]
    Scheduling {},
    #[route("/dispatch")]
    Dispatch {},
    #[route("/estimates")]
    Estimates {},
    #[route("/invoices")]
    Invoices {},
    #[route("/inventory")]
    Inventory {},
    #[route("/reports")]
    Reports {},
    #[route("/time-tracking")]
    TimeTracking {},
    #[route("/settings")]
    Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProviders {
            Router::<Route> {}
        }
    }
}
