/// Backend used when no `server_url` is configured.
pub const DEFAULT_SERVER_URL: &str = "https://localhost:7176";

/// Request timeout used when no `timeout_secs` is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Display format for canonical dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
