//! Bring up a compose service group, wait for its database to accept work,
//! run a one-shot import inside it, and bring the group back down.

pub mod config;
pub mod docker;
pub mod runner;
pub mod status;
