use std::sync::OnceLock;
use time::{OffsetDateTime, UtcOffset};

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Captures the local UTC offset.
///
/// The offset can only be determined reliably while the process is single
/// threaded, so call this before spawning any threads (e.g. the Ctrl-C handler).
pub fn capture_local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(capture_local_offset())
}

/// Joins ids as `1, 2, 3`.
pub fn join_ids<T: ToString>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
