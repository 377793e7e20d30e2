//! # API crate — REST client for the FieldOps backend
//!
//! Everything the dashboard knows about the backend lives here: the domain
//! models, the endpoint wrappers, and the normalization of the backend's
//! not-quite-consistent list payloads. The UI crates never touch `reqwest`
//! directly — they go through [`ApiClient`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — thin async wrapper over `reqwest` with one method per backend route |
//! | [`error`] | [`ApiError`] — network / status / decode / unexpected-shape taxonomy |
//! | [`models`] | [`Account`] and its write payloads, plus the two feed source records ([`LocateRequest`], [`WorkOrder`]) |
//! | [`normalize`] | [`decode_list`] — tagged decode of the three tolerated list shapes |

pub mod client;
pub mod error;
pub mod models;
pub mod normalize;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::{
    Account, AccountRole, AccountUpdate, LocateRequest, NewAccount, WorkOrder,
};
pub use normalize::decode_list;
