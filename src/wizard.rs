//! Wizard step machine
//!
//! Four linear stages: Draft -> Refine -> Rate -> Export. The wizard also
//! remembers which draft was last refined so that advancing out of Draft only
//! re-invokes the refine oracle when the draft actually changed.

/// The four wizard stages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Draft,
    Refine,
    Rate,
    Export,
}

impl Step {
    /// All steps in wizard order, for the progress header
    pub const ALL: [Step; 4] = [Step::Draft, Step::Refine, Step::Rate, Step::Export];

    /// Human-readable step title
    pub fn title(self) -> &'static str {
        match self {
            Step::Draft => "Draft",
            Step::Refine => "Refine",
            Step::Rate => "Rate",
            Step::Export => "Export",
        }
    }

    /// Zero-based position of this step
    pub fn ordinal(self) -> usize {
        match self {
            Step::Draft => 0,
            Step::Refine => 1,
            Step::Rate => 2,
            Step::Export => 3,
        }
    }

    /// The following step, if any
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Draft => Some(Step::Refine),
            Step::Refine => Some(Step::Rate),
            Step::Rate => Some(Step::Export),
            Step::Export => None,
        }
    }

    /// The preceding step, if any
    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Draft => None,
            Step::Refine => Some(Step::Draft),
            Step::Rate => Some(Step::Refine),
            Step::Export => Some(Step::Rate),
        }
    }
}

/// Satisfaction rating collected on the Rate step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    VerySatisfied,
    Satisfied,
    Neutral,
    Unsatisfied,
}

impl Rating {
    /// All ratings, in the order they are offered
    pub const ALL: [Rating; 4] = [
        Rating::VerySatisfied,
        Rating::Satisfied,
        Rating::Neutral,
        Rating::Unsatisfied,
    ];

    /// Label shown next to the choice
    pub fn label(self) -> &'static str {
        match self {
            Rating::VerySatisfied => "Very Satisfied",
            Rating::Satisfied => "Satisfied",
            Rating::Neutral => "Neutral",
            Rating::Unsatisfied => "Unsatisfied",
        }
    }

    /// Map a 1-based choice number to a rating
    pub fn from_choice(n: u8) -> Option<Rating> {
        match n {
            1 => Some(Rating::VerySatisfied),
            2 => Some(Rating::Satisfied),
            3 => Some(Rating::Neutral),
            4 => Some(Rating::Unsatisfied),
            _ => None,
        }
    }
}

/// Wizard navigation state
///
/// Owns the current step, the rating, and the cached draft used to decide
/// whether a step-advance out of Draft needs a fresh refine call.
pub struct Wizard {
    step: Step,
    rating: Option<Rating>,
    /// Draft text at the time of the last successful refine
    cached_draft: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Draft,
            rating: None,
            cached_draft: None,
        }
    }

    /// Current step
    pub fn step(&self) -> Step {
        self.step
    }

    /// Selected rating, if any
    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Record the rating choice
    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = Some(rating);
    }

    /// Whether advancing out of Draft must call the refine oracle
    ///
    /// True when the draft differs from the one the last refine was run
    /// against (or no refine has run yet).
    pub fn needs_refine(&self, draft: &str) -> bool {
        self.cached_draft.as_deref() != Some(draft)
    }

    /// Remember the draft a successful refine was run against
    pub fn record_refined(&mut self, draft: &str) {
        self.cached_draft = Some(draft.to_string());
    }

    /// Move to the next step; returns false at the last step
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move to the previous step; returns false at the first step
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Jump back to Draft to iterate on the refined prompt
    ///
    /// The cached draft is kept: if the user returns with the same text the
    /// refine oracle is not called again.
    pub fn iterate(&mut self) {
        self.step = Step::Draft;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_linear() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::Draft);
        assert!(wizard.advance());
        assert_eq!(wizard.step(), Step::Refine);
        assert!(wizard.advance());
        assert_eq!(wizard.step(), Step::Rate);
        assert!(wizard.advance());
        assert_eq!(wizard.step(), Step::Export);
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::Export);
    }

    #[test]
    fn test_retreat_stops_at_draft() {
        let mut wizard = Wizard::new();
        assert!(!wizard.retreat());
        wizard.advance();
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), Step::Draft);
    }

    #[test]
    fn test_needs_refine_first_time() {
        let wizard = Wizard::new();
        assert!(wizard.needs_refine("write a poem"));
    }

    #[test]
    fn test_needs_refine_after_record() {
        let mut wizard = Wizard::new();
        wizard.record_refined("write a poem");
        assert!(!wizard.needs_refine("write a poem"));
        assert!(wizard.needs_refine("write a poem about rust"));
    }

    #[test]
    fn test_iterate_returns_to_draft_and_keeps_cache() {
        let mut wizard = Wizard::new();
        wizard.record_refined("write a poem");
        wizard.advance();
        wizard.iterate();
        assert_eq!(wizard.step(), Step::Draft);
        // Unchanged draft does not need another refine pass
        assert!(!wizard.needs_refine("write a poem"));
    }

    #[test]
    fn test_rating_from_choice() {
        assert_eq!(Rating::from_choice(1), Some(Rating::VerySatisfied));
        assert_eq!(Rating::from_choice(4), Some(Rating::Unsatisfied));
        assert_eq!(Rating::from_choice(0), None);
        assert_eq!(Rating::from_choice(5), None);
    }

    #[test]
    fn test_step_ordinals_match_all_order() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.ordinal(), i);
        }
    }
}
