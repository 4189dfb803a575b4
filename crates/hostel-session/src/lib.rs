//! Cookie-referenced server-side sessions and the role gate built on them.

pub mod cookie;
pub mod identity;
pub mod session;
