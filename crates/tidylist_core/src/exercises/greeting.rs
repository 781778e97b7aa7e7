//! Delayed greeting.

use std::time::Duration;

const GUEST_NAME: &str = "Guest";

/// Resolves to `Hello, <name>!` once `delay_ms` has elapsed.
///
/// Missing or blank names greet `Guest`; negative delays resolve
/// immediately.
pub async fn delayed_greeting(name: Option<&str>, delay_ms: i64) -> String {
    let name = name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(GUEST_NAME);
    let delay = Duration::from_millis(u64::try_from(delay_ms).unwrap_or(0));

    tokio::time::sleep(delay).await;
    format!("Hello, {name}!")
}
