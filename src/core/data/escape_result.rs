/// Outcome of iterating a single point.
///
/// `Escaped` always carries an iteration strictly below the iteration budget
/// it was computed with; an orbit that first exceeds the threshold on the
/// final permitted iteration is reported as `Bounded`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeResult {
    Escaped { iteration: u32 },
    Bounded,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped(&self) -> bool {
        matches!(self, Self::Escaped { .. })
    }

    #[must_use]
    pub fn iteration(&self) -> Option<u32> {
        match self {
            Self::Escaped { iteration } => Some(*iteration),
            Self::Bounded => None,
        }
    }
}
