//! Entity identifier generation.
//!
//! # Invariants
//! - Issued ids are strictly increasing for the lifetime of the process.
//! - Ids track wall-clock milliseconds while creation is slower than 1/ms,
//!   and fall back to `last + 1` under bursts instead of colliding.
//! - Once `i64::MAX` has been issued or observed, no further id is issued.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier shared by all persisted entities.
pub type EntityId = i64;

static LAST_ISSUED_ID: AtomicI64 = AtomicI64::new(0);

/// The id space is used up: the largest issued or stored id is `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdExhausted;

impl Display for IdExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity id space exhausted")
    }
}

impl Error for IdExhausted {}

/// Issues a fresh entity id.
///
/// # Errors
/// - `IdExhausted` when the last issued or observed id is `i64::MAX`.
pub fn next_entity_id() -> Result<EntityId, IdExhausted> {
    let now = now_epoch_ms();
    let mut last = LAST_ISSUED_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last.checked_add(1).ok_or(IdExhausted)?);
        match LAST_ISSUED_ID.compare_exchange_weak(
            last,
            candidate,
            Ordering::AcqRel,
            Ordering::Relaxed,
        ) {
            Ok(_) => return Ok(candidate),
            Err(observed) => last = observed,
        }
    }
}

/// Records an id that already exists in storage so it is never reissued.
pub fn observe_entity_id(id: EntityId) {
    LAST_ISSUED_ID.fetch_max(id, Ordering::AcqRel);
}

/// Current wall-clock time as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
