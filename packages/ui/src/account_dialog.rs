use dioxus::prelude::*;

use api::{Account, AccountRole};

use crate::accounts::AccountForm;
use crate::components::{Button, ButtonVariant, Input, Label};

/// Create/edit form for one account.
///
/// Submit stays disabled until the required fields are present: name and
/// email always, the credential only when creating — on edit a blank
/// credential means "keep the current one" and is omitted from the
/// payload.
#[component]
pub fn AccountDialog(
    /// `None` for create, `Some` for edit.
    editing: Option<Account>,
    form: Signal<AccountForm>,
    /// True while the submit is in flight; disables both buttons.
    busy: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let creating = editing.is_none();
    let mut form = form;
    let can_submit = form.read().is_valid(creating) && !busy;

    rsx! {
        div {
            class: "dialog-body",
            h2 {
                class: "dialog-title",
                if creating { "New Account" } else { "Edit Account" }
            }

            div {
                class: "dialog-field",
                Label { html_for: "account-name", "Name" }
                Input {
                    id: "account-name",
                    r#type: "text",
                    placeholder: "Full name",
                    value: form.read().name.clone(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
            }

            div {
                class: "dialog-field",
                Label { html_for: "account-email", "Email" }
                Input {
                    id: "account-email",
                    r#type: "email",
                    placeholder: "name@company.com",
                    value: form.read().email.clone(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
            }

            div {
                class: "dialog-field",
                Label { html_for: "account-password", "Password" }
                Input {
                    id: "account-password",
                    r#type: "password",
                    placeholder: if creating { "Required".to_string() } else { "Leave blank to keep current".to_string() },
                    value: form.read().password.clone(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
            }

            div {
                class: "dialog-field",
                Label { html_for: "account-role", "Role" }
                select {
                    id: "account-role",
                    class: "input",
                    value: "{form.read().role.as_str()}",
                    onchange: move |evt| {
                        form.write().role = match evt.value().as_str() {
                            "manager" => AccountRole::Manager,
                            "superadmin" => AccountRole::Superadmin,
                            _ => AccountRole::Tech,
                        };
                    },
                    option { value: "tech", "Tech" }
                    option { value: "manager", "Manager" }
                    option { value: "superadmin", "Super Admin" }
                }
            }

            div {
                class: "dialog-field dialog-field-inline",
                input {
                    id: "account-active",
                    r#type: "checkbox",
                    checked: form.read().is_active,
                    onchange: move |evt| form.write().is_active = evt.checked(),
                }
                Label { html_for: "account-active", "Active" }
            }

            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !can_submit,
                    onclick: move |_| on_submit.call(()),
                    if busy { "Saving..." } else if creating { "Create" } else { "Save changes" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
