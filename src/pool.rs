//! A process-wide free list of limb buffers.
//!
//! Division and a few other hot paths need short-lived scratch vectors; the
//! pool lets them reuse allocations instead of hitting the allocator on
//! every call. Buffers returned by [`get`] have the requested length but
//! unspecified contents — callers must assume garbage.

use crate::Limb;
use std::sync::Mutex;

static POOL: Mutex<Vec<Vec<Limb>>> = Mutex::new(Vec::new());

/// Upper bound on pooled buffers, so the free list cannot grow without
/// limit under bursty use.
const MAX_POOLED: usize = 16;

/// Fetch a scratch buffer of length `n` limbs. Contents are unspecified.
pub(crate) fn get(n: usize) -> Vec<Limb> {
    let recycled = POOL
        .lock()
        .expect("nat pool poisoned")
        .pop()
        .unwrap_or_default();
    let mut buf = recycled;
    buf.resize(n, Limb::ZERO);
    buf
}

/// Return a scratch buffer to the pool for reuse.
pub(crate) fn put(buf: Vec<Limb>) {
    let mut pool = POOL.lock().expect("nat pool poisoned");
    if pool.len() < MAX_POOLED {
        pool.push(buf);
    }
}
