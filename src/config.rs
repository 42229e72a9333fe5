// SPDX-License-Identifier: MPL-2.0

pub const APP_ID: &str = "io.github.sethcottle.Perch";
pub const APP_NAME: &str = "Perch";

/// Filter contexts as the server names them. A rule only applies in the
/// contexts it lists.
pub mod context {
    pub const HOME: &str = "home";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const PUBLIC: &str = "public";
    pub const THREAD: &str = "thread";
    pub const ACCOUNT: &str = "account";

    pub const ALL: &[&str] = &[HOME, NOTIFICATIONS, PUBLIC, THREAD, ACCOUNT];
}
