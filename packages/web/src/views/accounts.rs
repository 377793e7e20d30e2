//! Account management screens.
//!
//! `Users` (super-admin, full CRUD), `Managers` (full CRUD scoped to the
//! manager role) and `Techs` (read-only roster for dispatchers). The CRUD
//! screens wire `use_accounts` to the generic table and the three dialog
//! flows; the roster wires `use_account_roster` to the table alone.

use dioxus::prelude::*;

use api::Account;
use ui::components::{Button, ButtonVariant};
use ui::{
    use_account_roster, use_accounts, AccountDialog, AccountScope, AccountsHandle, Column,
    DataTable, EditorTarget, ModalOverlay,
};

use super::shell::AppShell;

#[component]
pub fn Users() -> Element {
    rsx! {
        ManagedAccounts { title: "User Management", scope: AccountScope::All }
    }
}

#[component]
pub fn Managers() -> Element {
    rsx! {
        ManagedAccounts { title: "Managers", scope: AccountScope::Managers }
    }
}

#[component]
pub fn Techs() -> Element {
    let roster = use_account_roster(AccountScope::Techs);
    let failed =
        roster.collection.error.read().is_some() && roster.collection.items.read().is_empty();

    rsx! {
        AppShell {
            title: "Techs",
            if failed {
                div {
                    class: "screen-error",
                    "Couldn't load accounts. Reload the page to try again."
                }
            }
            DataTable::<Account> {
                rows: roster.page_rows(),
                columns: roster_columns(),
                loading: (roster.collection.loading)(),
                page: roster.view.read().page,
                page_size: roster.view.read().page_size,
                total: roster.total(),
                search: roster.view.read().query.clone(),
                search_placeholder: "Search techs...",
                on_search: {
                    let mut view = roster.view;
                    move |query: String| view.write().set_query(query)
                },
                on_page_change: {
                    let mut view = roster.view;
                    move |page| view.write().set_page(page)
                },
                on_page_size_change: {
                    let mut view = roster.view;
                    move |size| view.write().set_page_size(size)
                },
            }
        }
    }
}

/// Full CRUD screen over one account scope.
#[component]
fn ManagedAccounts(title: String, scope: AccountScope) -> Element {
    let handle = use_accounts(scope);
    let mut view = handle.roster.view;
    let failed = handle.roster.collection.error.read().is_some()
        && handle.roster.collection.items.read().is_empty();

    rsx! {
        AppShell {
            title: "{title}",

            if failed {
                div {
                    class: "screen-error",
                    "Couldn't load accounts. Reload the page to try again."
                }
            }

            div {
                class: "screen-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| handle.open_create(),
                    "Add account"
                }
            }

            DataTable::<Account> {
                rows: handle.roster.page_rows(),
                columns: managed_columns(handle),
                loading: (handle.roster.collection.loading)(),
                page: view.read().page,
                page_size: view.read().page_size,
                total: handle.roster.total(),
                search: view.read().query.clone(),
                search_placeholder: "Search by name, email or role...",
                on_search: move |query: String| view.write().set_query(query),
                on_page_change: move |page| view.write().set_page(page),
                on_page_size_change: move |size| view.write().set_page_size(size),
                on_row_click: move |account: Account| handle.open_edit(account),
            }
        }

        EditorModal { handle }
        DeleteModal { handle }
        ToggleModal { handle }
    }
}

fn roster_columns() -> Vec<Column<Account>> {
    vec![
        Column::new("name", "Name", |a: &Account| a.name.clone()),
        Column::new("email", "Email", |a: &Account| a.email.clone()),
        Column::new("status", "Status", |a: &Account| {
            if a.is_active { "Active".into() } else { "Inactive".into() }
        }),
        Column::new("created", "Created", created_label),
    ]
}

fn managed_columns(handle: AccountsHandle) -> Vec<Column<Account>> {
    let status = Callback::new(move |account: Account| {
        let busy = handle.is_busy(&account.id);
        let target = account.clone();
        rsx! {
            button {
                class: if account.is_active { "status-pill status-active" } else { "status-pill status-inactive" },
                disabled: busy,
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    handle.open_toggle(target.clone());
                },
                if account.is_active { "Active" } else { "Inactive" }
            }
        }
    });

    let actions = Callback::new(move |account: Account| {
        let for_edit = account.clone();
        let for_delete = account;
        rsx! {
            div {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        handle.open_edit(for_edit.clone());
                    },
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        handle.open_delete(for_delete.clone());
                    },
                    "Delete"
                }
            }
        }
    });

    vec![
        Column::new("name", "Name", |a: &Account| a.name.clone()),
        Column::new("email", "Email", |a: &Account| a.email.clone()),
        Column::new("role", "Role", |a: &Account| a.role.label().to_string()),
        Column::new("status", "Status", |a: &Account| {
            if a.is_active { "Active".into() } else { "Inactive".into() }
        })
        .render(status),
        Column::new("created", "Created", created_label),
        Column::new("actions", "", |_: &Account| String::new())
            .render(actions)
            .align_end(),
    ]
}

fn created_label(account: &Account) -> String {
    account
        .created_at
        .map(|t| t.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

#[component]
fn EditorModal(handle: AccountsHandle) -> Element {
    if !handle.editor.read().is_open() {
        return rsx! {};
    }
    let editing = match handle.editor.read().target() {
        Some(EditorTarget::Edit(account)) => Some(account.clone()),
        _ => None,
    };
    let busy = handle.editor.read().in_flight();

    rsx! {
        ModalOverlay {
            on_close: move |_| handle.close_editor(),
            AccountDialog {
                editing,
                form: handle.form,
                busy,
                on_submit: move |_| handle.submit_editor(),
                on_cancel: move |_| handle.close_editor(),
            }
        }
    }
}

#[component]
fn DeleteModal(handle: AccountsHandle) -> Element {
    if !handle.remover.read().is_open() {
        return rsx! {};
    }
    let name = handle
        .remover
        .read()
        .target()
        .map(|a| a.name.clone())
        .unwrap_or_default();
    let busy = handle.remover.read().in_flight();

    rsx! {
        ModalOverlay {
            on_close: move |_| handle.close_delete(),
            div {
                class: "dialog-body",
                h2 { class: "dialog-title", "Delete Account" }
                p {
                    class: "dialog-text",
                    "Delete "
                    strong { "{name}" }
                    "? This cannot be undone."
                }
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: busy,
                        onclick: move |_| handle.confirm_delete(),
                        if busy { "Deleting..." } else { "Delete" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| handle.close_delete(),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn ToggleModal(handle: AccountsHandle) -> Element {
    if !handle.toggler.read().is_open() {
        return rsx! {};
    }
    let (name, deactivating) = handle
        .toggler
        .read()
        .target()
        .map(|a| (a.name.clone(), a.is_active))
        .unwrap_or_default();
    let busy = handle.toggler.read().in_flight();

    rsx! {
        ModalOverlay {
            on_close: move |_| handle.close_toggle(),
            div {
                class: "dialog-body",
                h2 {
                    class: "dialog-title",
                    if deactivating { "Deactivate Account" } else { "Activate Account" }
                }
                p {
                    class: "dialog-text",
                    if deactivating {
                        "Deactivate "
                    } else {
                        "Activate "
                    }
                    strong { "{name}" }
                    "? They will "
                    if deactivating {
                        "lose access immediately."
                    } else {
                        "regain access immediately."
                    }
                }
                div {
                    class: "dialog-actions",
                    Button {
                        variant: if deactivating { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                        disabled: busy,
                        onclick: move |_| handle.confirm_toggle(),
                        if busy { "Working..." } else if deactivating { "Deactivate" } else { "Activate" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| handle.close_toggle(),
                        "Cancel"
                    }
                }
            }
        }
    }
}
