//! Reference identifiers for `<use>`-based expansion.
//!
//! Ids have the form `s-<n>-<suffix>`. The counter is monotonic for the lifetime of a registry and
//! the suffix is random per registry, so documents produced in different sessions can be inlined
//! into the same page without id collisions.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

const SUFFIX_LEN: usize = 6;

#[derive(Debug)]
pub struct ReferenceRegistry {
    next: AtomicU64,
    suffix: String,
}

impl Default for ReferenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceRegistry {
    /// Creates a registry with a random alphanumeric suffix.
    pub fn new() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self::with_suffix(&hex[..SUFFIX_LEN])
    }

    /// Creates a registry with a fixed suffix. Intended for deterministic output in tests and
    /// fixture generation.
    pub fn with_suffix(suffix: &str) -> Self {
        Self {
            next: AtomicU64::new(0),
            suffix: suffix.to_string(),
        }
    }

    /// The process-wide registry used when no explicit registry is supplied.
    pub fn global() -> &'static ReferenceRegistry {
        static GLOBAL: OnceLock<ReferenceRegistry> = OnceLock::new();
        GLOBAL.get_or_init(ReferenceRegistry::new)
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let id = format!("s-{n}-{}", self.suffix);
        tracing::trace!(id = %id, "minted reference id");
        id
    }

    /// Restarts numbering from zero. Only meant for deterministic tests; ids minted before the
    /// reset may be handed out again.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}
