//! RETS session lifecycle: construction, digest authorization, and the
//! mutable state shared with protocol-action handlers.
//!
//! # Session lifecycle
//!
//! ```text
//! Client                                  RETS Server
//!    |                                        |
//!    |  construct Session (validate options,  |
//!    |  derive Login URL, assemble headers)   |
//!    |                                        |
//!    |---- POST Login (headers snapshot) ---->|
//!    |<--- RETS-Session-ID + capabilities ----|
//!    |                                        |
//!    |  set_session_id() / replace_capabilities()
//!    |  (digest header refreshed)             |
//!    |                                        |
//!    |---- Search / GetMetadata / ... ------->|  authenticated requests
//!    |                                        |
//!    |---- Logout --------------------------->|
//!    |  clear_session()                       |
//! ```
//!
//! The HTTP transport and the action handlers themselves live outside this
//! crate; they read [`Session::headers`] and [`Session::login_url`], and
//! push back session-id and capability updates through the `set_*` /
//! `replace_*` / `clear_session` methods.
//!
//! # RETS-UA-Authorization
//!
//! Each outbound request carries a digest header derived from the session's
//! own state with the chained-MD5 scheme of RETS 1.8 §3 (see the `auth`
//! module). The header is computed unconditionally, including on the
//! very first pre-session request: the upstream specification leaves that
//! case ambiguous, some servers require the header before authentication is
//! established, and none are known to reject it.

mod auth;
mod capabilities;
#[allow(clippy::module_inception)]
mod session;

pub use capabilities::{CapabilityUrls, LOGIN_CAPABILITY};
pub use session::{Credentials, Session, SessionState};
