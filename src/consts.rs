pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Grouped by functional area.

    // =============================================================================
    // PAGINATION
    // =============================================================================

    /// Rows shown when a paginated list is first displayed or its filter changes.
    pub const INITIAL_PAGE_SIZE: usize = 4;

    /// Rows added by each "load more".
    pub const PAGE_SIZE_STEP: usize = 4;

    // =============================================================================
    // NOTIFICATIONS & ACTIVITY LOG
    // =============================================================================

    /// How long a notification stays on screen before it is dismissed.
    pub const NOTIFICATION_TTL_SECS: u64 = 4;

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // VALIDATION
    // =============================================================================

    /// Minimum accepted password length for users and shop accounts.
    pub const MIN_PASSWORD_LEN: usize = 6;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Admin API endpoints, relative to the base URL.
    pub mod endpoints {
        pub const USERS: &str = "api/admin/users";
        pub const SHOP_ACCOUNTS: &str = "api/admin/shop-accounts";
    }

    pub mod network {
        use std::time::Duration;

        /// TCP connect timeout for admin API requests (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout for admin API requests (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 15;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // TERMINAL UI
    // =============================================================================

    /// How long the splash screen is shown before the dashboard (seconds)
    pub const SPLASH_SECS: u64 = 2;

    /// Key poll interval of the UI loop (milliseconds)
    pub const UI_TICK_MS: u64 = 100;
}
