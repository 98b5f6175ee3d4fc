pub const SITE_NAME: &str = "Ludoteca Tan";

/// Page sizes offered by the pagination control; the first one is the default.
pub const PAGE_SIZES: [u64; 3] = [5, 10, 25];

/// Auto-dismiss delay of a notification. Only the web build has a timer
/// backend; desktop and mobile builds dismiss notifications on click.
#[cfg(feature = "web")]
pub const NOTIFICATION_TIMEOUT_MS: u32 = 4_000;
