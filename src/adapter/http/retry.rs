//! HTTP Retry Logic
//!
//! リトライ間隔の計算とステータスコードの分類

pub const INITIAL_RETRY_DELAY_MS: u64 = 300;
pub const MAX_RETRY_DELAY_MS: u64 = 5000;

/// Statuses worth retrying (gateway and server hiccups)
pub const RETRYABLE_STATUSES: &[u16] = &[500, 502, 503, 504];

/// Calculate retry delay with exponential backoff
pub fn calculate_retry_delay(retry_count: u32) -> u64 {
    let shift = retry_count.saturating_sub(1).min(16);
    std::cmp::min(INITIAL_RETRY_DELAY_MS << shift, MAX_RETRY_DELAY_MS)
}

/// Check if an HTTP status should be retried
pub fn is_retryable_status(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}
