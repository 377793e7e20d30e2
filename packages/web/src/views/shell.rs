use dioxus::prelude::*;

use ui::icons::{FaGaugeHigh, FaScrewdriverWrench, FaUsers};
use ui::{Icon, NotificationCenter};

use crate::Route;

/// Dashboard chrome: sidebar navigation plus a header with the page title
/// and the notification bell. Every screen renders inside this shell.
#[component]
pub fn AppShell(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "app-shell",

            aside {
                class: "app-sidebar",
                div {
                    class: "app-brand",
                    Icon { icon: FaScrewdriverWrench, width: 18, height: 18 }
                    span { "FieldOps" }
                }

                nav {
                    class: "app-nav",

                    div { class: "app-nav-section", "Overview" }
                    Link { to: Route::Dashboard {}, class: "app-nav-link",
                        Icon { icon: FaGaugeHigh, width: 14, height: 14 }
                        "Dashboard"
                    }

                    div { class: "app-nav-section", "Team" }
                    Link { to: Route::Users {}, class: "app-nav-link",
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        "Users"
                    }
                    Link { to: Route::Managers {}, class: "app-nav-link", "Managers" }
                    Link { to: Route::Techs {}, class: "app-nav-link", "Techs" }

                    div { class: "app-nav-section", "Operations" }
                    Link { to: Route::Jobs {}, class: "app-nav-link", "Jobs" }
                    Link { to: Route::Scheduling {}, class: "app-nav-link", "Scheduling" }
                    Link { to: Route::Dispatch {}, class: "app-nav-link", "Dispatch" }

                    div { class: "app-nav-section", "Billing" }
                    Link { to: Route::Estimates {}, class: "app-nav-link", "Estimates" }
                    Link { to: Route::Invoices {}, class: "app-nav-link", "Invoices" }

                    div { class: "app-nav-section", "Company" }
                    Link { to: Route::Inventory {}, class: "app-nav-link", "Inventory" }
                    Link { to: Route::Reports {}, class: "app-nav-link", "Reports" }
                    Link { to: Route::TimeTracking {}, class: "app-nav-link", "Time Tracking" }
                    Link { to: Route::Settings {}, class: "app-nav-link", "Settings" }
                }
            }

            div {
                class: "app-main",
                header {
                    class: "app-header",
                    h1 { class: "app-title", "{title}" }
                    NotificationCenter {}
                }
                main {
                    class: "app-content",
                    {children}
                }
            }
        }
    }
}
