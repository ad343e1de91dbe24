//! Experience - Amount grammar of the exp actions

/// What an experience amount counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpUnit {
    Points,
    Levels,
}

/// Signed change to a player's experience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceChange {
    pub amount: i32,
    pub unit: ExpUnit,
}

impl ExperienceChange {
    /// Parse `N` (points) or `NL` (levels)
    ///
    /// Anything that is not a positive whole number yields `None`; the
    /// exp actions treat that as "nothing to do", not as an error.
    pub fn parse_positive(text: &str) -> Option<ExperienceChange> {
        let text = text.trim().to_ascii_lowercase();
        let (digits, unit) = match text.strip_suffix('l') {
            Some(rest) => (rest.trim_end(), ExpUnit::Levels),
            None => (text.as_str(), ExpUnit::Points),
        };

        let amount = digits.parse::<i32>().ok().filter(|amount| *amount > 0)?;
        Some(ExperienceChange { amount, unit })
    }

    /// Same change, taken instead of given
    pub fn negated(self) -> ExperienceChange {
        ExperienceChange {
            amount: -self.amount,
            unit: self.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_and_levels() {
        assert_eq!(
            ExperienceChange::parse_positive("25"),
            Some(ExperienceChange { amount: 25, unit: ExpUnit::Points })
        );
        assert_eq!(
            ExperienceChange::parse_positive("3L"),
            Some(ExperienceChange { amount: 3, unit: ExpUnit::Levels })
        );
    }

    #[test]
    fn test_non_positive_is_ignored() {
        assert_eq!(ExperienceChange::parse_positive("0"), None);
        assert_eq!(ExperienceChange::parse_positive("-4"), None);
        assert_eq!(ExperienceChange::parse_positive("0l"), None);
        assert_eq!(ExperienceChange::parse_positive("-2L"), None);
    }

    #[test]
    fn test_non_numeric_is_ignored() {
        assert_eq!(ExperienceChange::parse_positive("lots"), None);
        assert_eq!(ExperienceChange::parse_positive(""), None);
        assert_eq!(ExperienceChange::parse_positive("l"), None);
    }

    #[test]
    fn test_negated() {
        let change = ExperienceChange::parse_positive("5").unwrap().negated();
        assert_eq!(change.amount, -5);
    }
}
