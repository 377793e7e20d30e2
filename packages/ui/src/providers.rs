use dioxus::prelude::*;

use api::{Account, ApiClient, LocateRequest, WorkOrder};

use crate::cache::CollectionCache;
use crate::components::ToastProvider;

/// Root provider: the API client, one collection cache per record type,
/// and the toast stack. Wrap the router with this component.
#[component]
pub fn AppProviders(
    /// Backend root; defaults to the build-time configured URL.
    #[props(default)]
    base_url: Option<String>,
    children: Element,
) -> Element {
    use_context_provider(|| match base_url {
        Some(url) => ApiClient::new(url),
        None => ApiClient::from_env(),
    });
    use_context_provider(|| Signal::new(CollectionCache::<Account>::new()));
    use_context_provider(|| Signal::new(CollectionCache::<LocateRequest>::new()));
    use_context_provider(|| Signal::new(CollectionCache::<WorkOrder>::new()));

    rsx! {
        ToastProvider {
            {children}
        }
    }
}
