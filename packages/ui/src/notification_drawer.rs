//! Notification bell and drawer.
//!
//! The drawer shows the aggregated feed from the two upstream sources
//! (see [`crate::feed`]). The feed is recomputed on every render from the
//! live collections, so the 30-day window and the day grouping always
//! reflect the current evaluation time.

use chrono::Utc;
use dioxus::prelude::*;

use api::{LocateRequest, WorkOrder};

use crate::cache::{keys, CollectionCache};
use crate::feed::{aggregate, NotificationKind};
use crate::fetch::{use_locate_feed, use_work_order_feed};
use crate::icons::{FaBell, FaLocationDot, FaWrench, FaXmark};
use crate::Icon;

const DRAWER_CSS: Asset = asset!("/assets/styling/notification_drawer.css");

/// Bell toggle plus the drawer panel. Mount once in the app header.
#[component]
pub fn NotificationCenter() -> Element {
    let mut open = use_signal(|| false);
    let mut locate_cache = use_context::<Signal<CollectionCache<LocateRequest>>>();
    let mut order_cache = use_context::<Signal<CollectionCache<WorkOrder>>>();

    let locates = use_locate_feed();
    let work_orders = use_work_order_feed();

    let feed = aggregate(&locates.items.read(), &work_orders.items.read(), Utc::now());
    let loading = (locates.loading)() || (work_orders.loading)();
    let failed = locates.error.read().is_some() || work_orders.error.read().is_some();

    rsx! {
        document::Stylesheet { href: DRAWER_CSS }

        button {
            class: "drawer-bell",
            title: "Notifications",
            onclick: move |_| {
                let value = open();
                open.set(!value);
            },
            Icon { icon: FaBell, width: 16, height: 16 }
            if feed.total > 0 {
                span { class: "drawer-bell-badge", "{feed.total}" }
            }
        }

        if open() {
            div {
                class: "drawer-panel",
                div {
                    class: "drawer-header",
                    span { class: "drawer-title", "Notifications" }
                    span { class: "drawer-total", "{feed.total} total" }
                    button {
                        class: "drawer-close",
                        onclick: move |_| open.set(false),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }

                if loading && feed.entries.is_empty() {
                    div { class: "drawer-placeholder", "Loading..." }
                } else if failed && feed.entries.is_empty() {
                    div {
                        class: "drawer-placeholder",
                        p { "Couldn't load notifications." }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| {
                                locate_cache.write().invalidate(keys::LOCATES);
                                order_cache.write().invalidate(keys::WORK_ORDERS_TODAY);
                            },
                            "Retry"
                        }
                    }
                } else if feed.groups.is_empty() {
                    div { class: "drawer-placeholder", "You're all caught up." }
                } else {
                    div {
                        class: "drawer-groups",
                        for group in feed.groups.iter() {
                            div {
                                key: "{group.label}",
                                class: "drawer-group",
                                div { class: "drawer-day", "{group.label}" }
                                for entry in group.entries.iter() {
                                    div {
                                        key: "{entry.id}",
                                        class: "drawer-entry {entry.kind.accent()}",
                                        span {
                                            class: "drawer-entry-icon",
                                            if entry.kind == NotificationKind::Locate {
                                                Icon { icon: FaLocationDot, width: 14, height: 14 }
                                            } else {
                                                Icon { icon: FaWrench, width: 14, height: 14 }
                                            }
                                        }
                                        div {
                                            class: "drawer-entry-body",
                                            div {
                                                class: "drawer-entry-head",
                                                span { class: "drawer-entry-title", "{entry.title}" }
                                                span { class: "drawer-entry-time", "{entry.time_label}" }
                                            }
                                            p { class: "drawer-entry-text", "{entry.description}" }
                                            if !entry.address.is_empty() {
                                                p { class: "drawer-entry-detail", "{entry.address.street}" }
                                            }
                                            if let Some(ref wo) = entry.work_order {
                                                p { class: "drawer-entry-detail", "WO #{wo}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
