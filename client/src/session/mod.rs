//! # Session Management
//!
//! The client-side state machine over `{Anonymous, Authenticating,
//! Authenticated}`:
//!
//! ```text
//!  Anonymous ──login/register──▶ Authenticating ──ok──▶ Authenticated
//!      ▲                              │                      │
//!      └────────────failure───────────┘                      │
//!      └─────────────────logout / any 401────────────────────┘
//! ```
//!
//! - [`state`]: [`Session`] and the types the UI reads
//! - [`store`]: token persistence ([`TokenStore`])
//! - [`manager`]: [`SessionManager`], which drives the transitions

pub mod manager;
pub mod state;
pub mod store;

pub use manager::SessionManager;
pub use state::{chat_title, AuthPhase, Notice, NoticeLevel, Session, View};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
