//! Visibility rules between questions
//!
//! A rule says that a dependent question is only shown while its controller holds a
//! specific answer. Every dependent has exactly one controller, so the rule set is a
//! forest rooted at unconditional questions. Cycles are rejected on construction.

use super::catalog::QuestionId;
use super::error::QuestionnaireError;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityRule {
    pub dependent: QuestionId,
    pub controller: QuestionId,
    pub required_value: String,
}

impl VisibilityRule {
    pub fn new(dependent: QuestionId, controller: QuestionId, required_value: impl Into<String>) -> Self {
        Self {
            dependent,
            controller,
            required_value: required_value.into(),
        }
    }
}

/// Validated, acyclic set of visibility rules keyed by dependent question id
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    by_dependent: BTreeMap<QuestionId, VisibilityRule>,
    children: HashMap<QuestionId, Vec<QuestionId>>,
}

impl RuleTable {
    pub fn new(rules: impl IntoIterator<Item = VisibilityRule>) -> Result<Self, QuestionnaireError> {
        let mut table = Self::default();

        for rule in rules {
            if table.by_dependent.contains_key(&rule.dependent) {
                return Err(QuestionnaireError::DuplicateRule(rule.dependent));
            }
            table.by_dependent.insert(rule.dependent, rule);
        }

        table.check_acyclic()?;

        for rule in table.by_dependent.values() {
            table
                .children
                .entry(rule.controller)
                .or_default()
                .push(rule.dependent);
        }

        Ok(table)
    }

    /// Rules of the adoption questionnaire
    pub fn adoption_form() -> Self {
        Self::new([
            VisibilityRule::new(6, 5, "Casa"),
            VisibilityRule::new(8, 5, "Casa"),
            VisibilityRule::new(9, 8, "Sim"),
            VisibilityRule::new(13, 12, "Sim"),
            VisibilityRule::new(15, 14, "Não"),
        ])
        .expect("adoption form rules are acyclic")
    }

    // Walk each dependent's controller chain; revisiting the chain's start means a cycle.
    fn check_acyclic(&self) -> Result<(), QuestionnaireError> {
        for &start in self.by_dependent.keys() {
            let mut seen = HashSet::new();
            let mut current = start;
            while let Some(rule) = self.by_dependent.get(&current) {
                if !seen.insert(current) {
                    return Err(QuestionnaireError::CyclicRules(current));
                }
                current = rule.controller;
            }
        }
        Ok(())
    }

    pub fn rule_for(&self, dependent: QuestionId) -> Option<&VisibilityRule> {
        self.by_dependent.get(&dependent)
    }

    pub fn is_conditional(&self, id: QuestionId) -> bool {
        self.by_dependent.contains_key(&id)
    }

    /// Direct dependents of a controller, in ascending id order
    pub fn dependents_of(&self, controller: QuestionId) -> &[QuestionId] {
        self.children
            .get(&controller)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All transitive dependents of `from`, every controller listed before its dependents
    pub fn downstream(&self, from: QuestionId) -> Vec<QuestionId> {
        let mut order = Vec::new();
        let mut stack: Vec<QuestionId> = self.dependents_of(from).iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.dependents_of(id).iter().rev().copied());
        }

        order
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisibilityRule> {
        self.by_dependent.values()
    }

    pub fn len(&self) -> usize {
        self.by_dependent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_dependent.is_empty()
    }
}
