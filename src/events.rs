//! Event identifiers attached to log lines as the `event` field, so log
//! pipelines can filter on a stable key instead of the message text.

pub const SYSTEM_STARTUP: &str = "SYSTEM_STARTUP";
pub const SYSTEM_SHUTDOWN: &str = "SYSTEM_SHUTDOWN";
pub const USER_LOOKUP_RECEIVED: &str = "USER_LOOKUP_RECEIVED";
pub const USER_LOOKUP: &str = "USER_LOOKUP";
pub const USER_LOOKUP_FAILED: &str = "USER_LOOKUP_FAILED";
