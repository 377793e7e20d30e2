//! Placeholder screens for the product areas that are not built yet.
//! One parametrized view, one thin route component per page.

use dioxus::prelude::*;

use ui::icons::FaHelmetSafety;
use ui::Icon;

use super::shell::AppShell;

#[component]
fn ComingSoonView(title: String) -> Element {
    rsx! {
        AppShell {
            title: "{title}",
            div {
                class: "coming-soon",
                Icon { icon: FaHelmetSafety, width: 32, height: 32 }
                h2 { "Coming soon" }
                p { "The {title} area is under construction." }
            }
        }
    }
}

#[component]
pub fn Jobs() -> Element {
    rsx! { ComingSoonView { title: "Jobs" } }
}

#[component]
pub fn Scheduling() -> Element {
    rsx! { ComingSoonView { title: "Scheduling" } }
}

#[component]
pub fn Dispatch() -> Element {
    rsx! { ComingSoonView { title: "Dispatch" } }
}

#[component]
pub fn Estimates() -> Element {
    rsx! { ComingSoonView { title: "Estimates" } }
}

#[component]
pub fn Invoices() -> Element {
    rsx! { ComingSoonView { title: "Invoices" } }
}

#[component]
pub fn Inventory() -> Element {
    rsx! { ComingSoonView { title: "Inventory" } }
}

#[component]
pub fn Reports() -> Element {
    rsx! { ComingSoonView { title: "Reports" } }
}

#[component]
pub fn TimeTracking() -> Element {
    rsx! { ComingSoonView { title: "Time Tracking" } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { ComingSoonView { title: "Settings" } }
}
