//! This crate contains the shared UI for the FieldOps dashboard: the
//! client-side list-management core (filtering, pagination, caching,
//! confirmation flows, notification aggregation) and the Dioxus components
//! built on top of it.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod collection;
pub use collection::{filter_rows, page_slice, ListViewState, Searchable, PAGE_SIZE_OPTIONS};

pub mod cache;
pub use cache::{keys, CollectionCache};

pub mod confirm;
pub use confirm::{ConfirmationFlow, FlowStage};

pub mod feed;
pub use feed::{
    aggregate, parse_address, DayGroup, FeedNotification, NotificationFeed, NotificationKind,
    ParsedAddress,
};

mod fetch;
pub use fetch::{use_locate_feed, use_remote_collection, use_work_order_feed, RemoteCollection};

mod accounts;
pub use accounts::{
    use_account_roster, use_accounts, AccountForm, AccountScope, AccountsHandle, EditorTarget,
    RosterHandle,
};

mod time;
pub use time::{now_secs, sleep_secs};

mod modal;
pub use modal::ModalOverlay;

mod data_table;
pub use data_table::{Column, DataTable};

mod account_dialog;
pub use account_dialog::AccountDialog;

mod notification_drawer;
pub use notification_drawer::NotificationCenter;

mod providers;
pub use providers::AppProviders;
