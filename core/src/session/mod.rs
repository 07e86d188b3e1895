//! Session representation: who is signed in for the current browser.
//!
//! The session lives entirely in the `auth-user` cookie. [`SessionCodec`]
//! turns an identity into a cookie value and back, [`SessionStore`] tracks the
//! active identity for one request and produces the cookies that create or
//! destroy it.

pub mod codec;
pub mod store;

pub use codec::SessionCodec;
pub use store::{SessionCookie, SessionStore};
