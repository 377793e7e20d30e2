use dioxus::prelude::*;

use ui::icons::{FaLocationDot, FaUsers, FaWrench};
use ui::{use_account_roster, use_locate_feed, use_work_order_feed, AccountScope, Icon};

use super::shell::AppShell;

/// Landing screen: headline counts from the cached collections.
#[component]
pub fn Dashboard() -> Element {
    let accounts = use_account_roster(AccountScope::All);
    let locates = use_locate_feed();
    let work_orders = use_work_order_feed();

    let team = count_label(accounts.collection.items.read().len(), (accounts.collection.loading)());
    let locate_count = count_label(locates.items.read().len(), (locates.loading)());
    let order_count = count_label(work_orders.items.read().len(), (work_orders.loading)());

    rsx! {
        AppShell {
            title: "Dashboard",
            div {
                class: "stat-grid",
                StatCard { label: "Team members", value: team, icon: StatIcon::Team }
                StatCard { label: "Locate requests", value: locate_count, icon: StatIcon::Locates }
                StatCard { label: "Work orders today", value: order_count, icon: StatIcon::Orders }
            }
        }
    }
}

fn count_label(count: usize, loading: bool) -> String {
    if loading && count == 0 {
        "—".to_string()
    } else {
        count.to_string()
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    Team,
    Locates,
    Orders,
}

#[component]
fn StatCard(label: String, value: String, icon: StatIcon) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span {
                class: "stat-card-icon",
                if icon == StatIcon::Team {
                    Icon { icon: FaUsers, width: 18, height: 18 }
                } else if icon == StatIcon::Locates {
                    Icon { icon: FaLocationDot, width: 18, height: 18 }
                } else {
                    Icon { icon: FaWrench, width: 18, height: 18 }
                }
            }
            div {
                class: "stat-card-body",
                span { class: "stat-card-value", "{value}" }
                span { class: "stat-card-label", "{label}" }
            }
        }
    }
}
