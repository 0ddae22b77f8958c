use crate::Score;

/// Abstract persistent slot holding the high score.
///
/// Both operations are infallible by contract: loading from a missing or
/// corrupt slot yields 0 and storing is best-effort. Implementations report
/// degraded persistence through the `log` facade instead of surfacing
/// errors into the session.
pub trait ScoreSlot {
    fn load(&mut self) -> Score;
    fn store(&mut self, value: Score);
}

/// Slot that lives and dies with the process. Used in tests and by
/// frontends that do not persist anything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySlot {
    value: Score,
}

impl MemorySlot {
    pub fn new(value: Score) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Score {
        self.value
    }
}

impl ScoreSlot for MemorySlot {
    fn load(&mut self) -> Score {
        self.value
    }

    fn store(&mut self, value: Score) {
        self.value = value;
    }
}
