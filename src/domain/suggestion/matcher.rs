//! Suggestion matcher - filters a scenario's suggestions down to the values
//! the user actually holds.

use crate::domain::catalog::Scenario;
use crate::domain::north_star::CoreValue;

/// One applicable suggestion, tagged with the value that inspired it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value_name: String,
    pub text: String,
}

impl Suggestion {
    pub fn new(value_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value_name: value_name.into(),
            text: text.into(),
        }
    }
}

/// Result of asking a scenario for suggestions.
///
/// `NoApplicableSuggestion` is an ordinary outcome: the scenario simply has
/// nothing for the values currently defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Available(Vec<Suggestion>),
    NoApplicableSuggestion,
}

impl SuggestionOutcome {
    /// Wraps matcher output, mapping an empty list to `NoApplicableSuggestion`.
    pub fn from_matches(matches: Vec<Suggestion>) -> Self {
        if matches.is_empty() {
            SuggestionOutcome::NoApplicableSuggestion
        } else {
            SuggestionOutcome::Available(matches)
        }
    }

    /// The suggestions, empty for `NoApplicableSuggestion`.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            SuggestionOutcome::Available(list) => list,
            SuggestionOutcome::NoApplicableSuggestion => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SuggestionOutcome::Available(_))
    }
}

/// Returns the scenario's suggestions whose value name exactly matches one
/// of `user_values`, in the scenario's own order.
///
/// Pure: neither input is modified and equal inputs give equal output.
pub fn match_suggestions(scenario: &Scenario, user_values: &[CoreValue]) -> Vec<Suggestion> {
    scenario
        .suggestions
        .iter()
        .filter(|(value_name, _)| user_values.iter().any(|v| v.name() == value_name.as_str()))
        .map(|(value_name, text)| Suggestion::new(value_name.clone(), text.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn values(names: &[&str]) -> Vec<CoreValue> {
        names
            .iter()
            .map(|n| CoreValue::new(*n, "definition").unwrap())
            .collect()
    }

    fn disagreement() -> Scenario {
        Scenario::new(
            "意见分歧",
            "当团队出现意见分歧时...",
            [
                ("协作", "我们秉持开放沟通，鼓励不同声音。"),
                ("诚信", "我们坦诚表达不同观点。"),
                ("用户至上", "我们回归用户需求本质。"),
            ],
        )
    }

    #[test]
    fn keeps_only_matching_values() {
        let scenario = Scenario::new("s", "", [("协作", "a"), ("诚信", "b")]);
        let result = match_suggestions(&scenario, &values(&["诚信"]));
        assert_eq!(result, vec![Suggestion::new("诚信", "b")]);
    }

    #[test]
    fn follows_scenario_order_not_user_order() {
        let result = match_suggestions(&disagreement(), &values(&["用户至上", "协作"]));
        let names: Vec<_> = result.iter().map(|s| s.value_name.as_str()).collect();
        assert_eq!(names, vec!["协作", "用户至上"]);
    }

    #[test]
    fn no_overlap_gives_empty_result() {
        let result = match_suggestions(&disagreement(), &values(&["创新", "卓越"]));
        assert!(result.is_empty());
        assert_eq!(
            SuggestionOutcome::from_matches(result),
            SuggestionOutcome::NoApplicableSuggestion
        );
    }

    #[test]
    fn name_match_is_exact() {
        let result = match_suggestions(&disagreement(), &values(&["协作 ", "诚"]));
        assert!(result.is_empty());
    }

    #[test]
    fn outcome_exposes_suggestions() {
        let outcome = SuggestionOutcome::from_matches(vec![Suggestion::new("诚信", "b")]);
        assert!(outcome.is_available());
        assert_eq!(outcome.suggestions().len(), 1);
        assert!(SuggestionOutcome::NoApplicableSuggestion.suggestions().is_empty());
    }

    proptest! {
        #[test]
        fn output_is_an_ordered_subsequence_of_the_scenario(
            keys in proptest::collection::vec("[a-e]", 0..8),
            held in proptest::collection::hash_set("[a-g]", 0..6),
        ) {
            let scenario = Scenario::new(
                "s",
                "",
                keys.iter().map(|k| (k.clone(), format!("text-{}", k))),
            );
            let held: Vec<String> = held.into_iter().collect();
            let user_values: Vec<CoreValue> =
                held.iter().map(|n| CoreValue::new(n.clone(), "d").unwrap()).collect();

            let first = match_suggestions(&scenario, &user_values);
            let second = match_suggestions(&scenario, &user_values);
            prop_assert_eq!(&first, &second);

            let expected: Vec<Suggestion> = scenario
                .suggestions
                .iter()
                .filter(|(k, _)| held.contains(*k))
                .map(|(k, v)| Suggestion::new(k.clone(), v.clone()))
                .collect();
            prop_assert_eq!(first, expected);
        }
    }
}
