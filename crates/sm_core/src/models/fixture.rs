use serde::{Deserialize, Serialize};

/// Sentinel result for fixtures that have not been played yet.
pub const PENDING_RESULT: &str = "Pending";

/// A scheduled match between two registered teams.
///
/// Teams are referenced by id rather than owned; the registry guarantees
/// both ids resolved at scheduling time. `date` and `venue` are free text,
/// no format is enforced. Only `result` is mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fixture {
    pub id: u32,
    pub team_a: u32,
    pub team_b: u32,
    pub date: String,
    pub venue: String,
    pub result: String,
}

impl Fixture {
    pub fn new(
        id: u32,
        team_a: u32,
        team_b: u32,
        date: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            id,
            team_a,
            team_b,
            date: date.into(),
            venue: venue.into(),
            result: PENDING_RESULT.to_string(),
        }
    }

    /// Overwrite the result. Callers may do this any number of times.
    pub fn set_result(&mut self, result: impl Into<String>) {
        self.result = result.into();
    }

    pub fn is_pending(&self) -> bool {
        self.result == PENDING_RESULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fixture_starts_pending() {
        let fixture = Fixture::new(100, 1, 2, "01-01-2030", "Stadium");
        assert!(fixture.is_pending());
        assert_eq!(fixture.result, PENDING_RESULT);
    }

    #[test]
    fn test_result_can_be_overwritten_repeatedly() {
        let mut fixture = Fixture::new(100, 1, 2, "01-01-2030", "Stadium");
        fixture.set_result("Draw");
        fixture.set_result("Tigers Won");
        assert_eq!(fixture.result, "Tigers Won");
        assert!(!fixture.is_pending());
    }
}
