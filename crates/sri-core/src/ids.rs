use std::sync::atomic::{AtomicU64, Ordering};

use crate::clock::Clock;

/// Produces session identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// `session_<unix millis>_<9 random chars>`, the format the intake flow has
/// always used for new sessions.
pub struct SessionIdGenerator<C> {
    clock: C,
}

impl<C: Clock> SessionIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for SessionIdGenerator<C> {
    fn next_id(&self) -> String {
        let millis = self.clock.now().as_millisecond();
        let entropy = uuid::Uuid::new_v4().simple().to_string();
        format!("session_{millis}_{}", &entropy[..9])
    }
}

/// Deterministic ids (`<prefix>_1`, `<prefix>_2`, ...).
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}_{n}", self.prefix)
    }
}
