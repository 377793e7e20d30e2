//! # Account management hooks
//!
//! [`use_accounts`] is the mutation coordinator behind every account
//! screen: it owns the collection read path, the list view state, the
//! dialog flows (edit / delete / toggle-status) and the four write
//! operations. State only changes after the server confirms a write —
//! there is no optimistic update — and a confirmed write invalidates the
//! cached collection so every consumer re-reads authoritative state.
//!
//! [`use_account_roster`] is the read-only subset used by screens that
//! list accounts without managing them.

use std::collections::HashSet;

use dioxus::prelude::*;

use api::{Account, AccountRole, AccountUpdate, ApiClient, NewAccount};

use crate::cache::{keys, CollectionCache};
use crate::collection::{filter_rows, page_slice, ListViewState};
use crate::components::{use_toast, ToastHandle, ToastOptions};
use crate::confirm::ConfirmationFlow;
use crate::fetch::{use_remote_collection, RemoteCollection};

/// Which slice of the account collection a screen works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountScope {
    All,
    Managers,
    Techs,
}

impl AccountScope {
    pub fn cache_key(&self) -> &'static str {
        match self {
            AccountScope::All => keys::USERS_ALL,
            AccountScope::Managers => keys::USERS_MANAGER,
            AccountScope::Techs => keys::USERS_TECH,
        }
    }

    /// Role segment for the scoped `/users/{role}` route, `None` for all.
    pub fn role(&self) -> Option<AccountRole> {
        match self {
            AccountScope::All => None,
            AccountScope::Managers => Some(AccountRole::Manager),
            AccountScope::Techs => Some(AccountRole::Tech),
        }
    }
}

/// What the editor dialog is doing.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorTarget {
    Create,
    Edit(Account),
}

/// The editor dialog's form fields.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: AccountRole,
    pub is_active: bool,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: AccountRole::Tech,
            is_active: true,
        }
    }
}

impl AccountForm {
    pub fn from_account(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
            password: String::new(),
            role: account.role,
            is_active: account.is_active,
        }
    }

    /// Name and email are always required; the credential only when
    /// creating (blank on edit means "keep the current one").
    pub fn is_valid(&self, creating: bool) -> bool {
        let base = !self.name.trim().is_empty() && !self.email.trim().is_empty();
        base && (!creating || !self.password.trim().is_empty())
    }

    fn create_payload(&self) -> NewAccount {
        NewAccount {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
            is_active: self.is_active,
        }
    }

    fn update_payload(&self) -> AccountUpdate {
        AccountUpdate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            is_active: self.is_active,
            password: if self.password.trim().is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
        }
    }
}

/// Read-only list handle: collection + view state + the derived slices.
#[derive(Clone, Copy, PartialEq)]
pub struct RosterHandle {
    pub collection: RemoteCollection<Account>,
    pub view: Signal<ListViewState>,
}

impl RosterHandle {
    /// Rows matching the current search query.
    pub fn filtered(&self) -> Vec<Account> {
        filter_rows(&self.collection.items.read(), &self.view.read().query)
    }

    /// The filtered rows visible on the current page.
    pub fn page_rows(&self) -> Vec<Account> {
        let view = self.view.read();
        page_slice(&self.filtered(), view.page, view.page_size)
    }

    /// Filtered row count, for the pagination footer.
    pub fn total(&self) -> usize {
        self.filtered().len()
    }
}

/// Everything an account management screen needs. `Copy`, so it can move
/// into row callbacks and dialog handlers without ceremony.
#[derive(Clone, Copy, PartialEq)]
pub struct AccountsHandle {
    scope: AccountScope,
    client: Signal<ApiClient>,
    cache: Signal<CollectionCache<Account>>,
    toast: ToastHandle,
    pub roster: RosterHandle,
    pub form: Signal<AccountForm>,
    pub editor: Signal<ConfirmationFlow<EditorTarget>>,
    pub remover: Signal<ConfirmationFlow<Account>>,
    pub toggler: Signal<ConfirmationFlow<Account>>,
    busy_ids: Signal<HashSet<String>>,
}

impl AccountsHandle {
    // -- dialog lifecycle ---------------------------------------------

    pub fn open_create(mut self) {
        self.form.set(AccountForm::default());
        self.editor.write().open(EditorTarget::Create);
    }

    pub fn open_edit(mut self, account: Account) {
        self.form.set(AccountForm::from_account(&account));
        self.editor.write().open(EditorTarget::Edit(account));
    }

    pub fn close_editor(mut self) {
        self.editor.write().cancel();
    }

    pub fn open_delete(mut self, account: Account) {
        self.remover.write().open(account);
    }

    pub fn close_delete(mut self) {
        self.remover.write().cancel();
    }

    pub fn open_toggle(mut self, account: Account) {
        self.toggler.write().open(account);
    }

    pub fn close_toggle(mut self) {
        self.toggler.write().cancel();
    }

    /// Whether a mutation for this account id is still in flight.
    /// Controls that would start another one are disabled meanwhile.
    pub fn is_busy(&self, id: &str) -> bool {
        self.busy_ids.read().contains(id)
    }

    // -- mutations ----------------------------------------------------

    /// Submit the editor dialog (create or update, depending on how it
    /// was opened).
    pub fn submit_editor(mut self) {
        let Some(target) = self.editor.write().begin() else {
            return;
        };
        spawn(async move {
            match target {
                EditorTarget::Create => self.run_create().await,
                EditorTarget::Edit(account) => self.run_update(account).await,
            }
        });
    }

    async fn run_create(mut self) {
        let form = (self.form)();
        if !form.is_valid(true) {
            self.editor.write().fail();
            return;
        }
        let client = (self.client)();
        match client.create_account(&form.create_payload()).await {
            Ok(()) => {
                self.invalidate();
                self.editor.write().succeed();
                self.form.set(AccountForm::default());
                // The new record is inserted server-side at the top.
                self.roster.view.write().reset_page();
                self.toast.success("Account created", ToastOptions::new());
            }
            Err(e) => {
                tracing::error!("create account failed: {}", e);
                self.editor.write().fail();
                self.toast.error(format!("Create failed: {e}"), ToastOptions::new());
            }
        }
    }

    async fn run_update(mut self, account: Account) {
        let form = (self.form)();
        if !form.is_valid(false) {
            self.editor.write().fail();
            return;
        }
        let client = (self.client)();
        match client.update_account(&account.id, &form.update_payload()).await {
            Ok(()) => {
                self.invalidate();
                self.editor.write().succeed();
                self.form.set(AccountForm::default());
                self.toast.success("Account updated", ToastOptions::new());
            }
            Err(e) => {
                tracing::error!("update account {} failed: {}", account.id, e);
                self.editor.write().fail();
                self.toast.error(format!("Update failed: {e}"), ToastOptions::new());
            }
        }
    }

    /// Confirm the delete dialog.
    pub fn confirm_delete(mut self) {
        let Some(account) = self.remover.write().begin() else {
            return;
        };
        spawn(async move {
            let client = (self.client)();
            match client.delete_account(&account.id).await {
                Ok(()) => {
                    // What this screen will show once the row is gone.
                    let remaining = self.roster.total().saturating_sub(1);
                    self.invalidate();
                    self.remover.write().succeed();
                    self.roster.view.write().retreat_if_empty(remaining);
                    self.toast.success("Account deleted", ToastOptions::new());
                }
                Err(e) => {
                    tracing::error!("delete account {} failed: {}", account.id, e);
                    self.remover.write().fail();
                    self.toast.error(format!("Delete failed: {e}"), ToastOptions::new());
                }
            }
        });
    }

    /// Confirm the toggle-status dialog. A second confirmation for the
    /// same id while one is in flight is a no-op.
    pub fn confirm_toggle(mut self) {
        let Some(account) = self.toggler.write().begin() else {
            return;
        };
        if !self.busy_ids.write().insert(account.id.clone()) {
            self.toggler.write().fail();
            return;
        }
        spawn(async move {
            let client = (self.client)();
            let result = client.toggle_account_status(&account.id).await;
            self.busy_ids.write().remove(&account.id);
            match result {
                Ok(()) => {
                    self.invalidate();
                    self.toggler.write().succeed();
                    self.toast.success("Status updated", ToastOptions::new());
                }
                Err(e) => {
                    tracing::error!("toggle account {} failed: {}", account.id, e);
                    self.toggler.write().fail();
                    self.toast.error(format!("Status change failed: {e}"), ToastOptions::new());
                }
            }
        });
    }

    /// Sequenced strictly after a confirmed write: drop the cached
    /// collection so every consumer re-reads server state.
    fn invalidate(mut self) {
        self.cache.write().invalidate(self.scope.cache_key());
    }
}

/// Full account management for one scope.
pub fn use_accounts(scope: AccountScope) -> AccountsHandle {
    let roster = use_account_roster(scope);
    let client = use_context::<ApiClient>();
    let client = use_signal(|| client);
    let cache = use_context::<Signal<CollectionCache<Account>>>();
    let toast = use_toast();
    let form = use_signal(AccountForm::default);
    let editor = use_signal(ConfirmationFlow::new);
    let remover = use_signal(ConfirmationFlow::new);
    let toggler = use_signal(ConfirmationFlow::new);
    let busy_ids = use_signal(HashSet::new);

    AccountsHandle {
        scope,
        client,
        cache,
        toast,
        roster,
        form,
        editor,
        remover,
        toggler,
        busy_ids,
    }
}

/// Read-only account listing for one scope: fetch, search, paginate.
pub fn use_account_roster(scope: AccountScope) -> RosterHandle {
    let client = use_context::<ApiClient>();
    let collection = use_remote_collection(scope.cache_key(), move || {
        let client = client.clone();
        async move { client.list_accounts(scope.role()).await }
    });
    let view = use_signal(ListViewState::default);

    RosterHandle { collection, view }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_all_fields_including_credential() {
        let mut form = AccountForm::default();
        assert!(!form.is_valid(true));

        form.name = "Jane Doe".into();
        form.email = "jane@x.com".into();
        assert!(!form.is_valid(true));
        assert!(form.is_valid(false));

        form.password = "secret".into();
        assert!(form.is_valid(true));
    }

    #[test]
    fn whitespace_only_fields_do_not_validate() {
        let form = AccountForm {
            name: "  ".into(),
            email: "jane@x.com".into(),
            password: "secret".into(),
            ..AccountForm::default()
        };
        assert!(!form.is_valid(true));
    }

    #[test]
    fn blank_credential_is_omitted_from_update_payload() {
        let form = AccountForm {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            password: "   ".into(),
            role: AccountRole::Manager,
            is_active: true,
        };
        assert_eq!(form.update_payload().password, None);

        let form = AccountForm {
            password: "new-secret".into(),
            ..form
        };
        assert_eq!(form.update_payload().password.as_deref(), Some("new-secret"));
    }

    #[test]
    fn scopes_map_to_routes_and_cache_keys() {
        assert_eq!(AccountScope::All.role(), None);
        assert_eq!(AccountScope::Techs.role(), Some(AccountRole::Tech));
        assert_eq!(AccountScope::Managers.cache_key(), keys::USERS_MANAGER);
        assert_ne!(AccountScope::All.cache_key(), AccountScope::Techs.cache_key());
    }
}
