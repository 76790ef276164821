use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{CategoryId, QuestionId};

/// Category filter for a quiz round. Clients send id 0 (or the pseudo-types "click"/"all")
/// to play across every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizCategory {
    All,
    Only(CategoryId),
}

impl QuizCategory {
    pub fn from_parts(id: Option<i32>, kind: Option<&str>) -> Self {
        let wildcard_kind = kind
            .map(str::trim)
            .is_some_and(|k| k.eq_ignore_ascii_case("click") || k.eq_ignore_ascii_case("all"));

        match id {
            Some(id) if id != 0 && !wildcard_kind => Self::Only(CategoryId::new(id)),
            _ => Self::All,
        }
    }

    pub fn category_id(self) -> Option<CategoryId> {
        match self {
            Self::All => None,
            Self::Only(id) => Some(id),
        }
    }

    pub fn matches(self, category: CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == category,
        }
    }
}

/// Anything the quiz can draw from.
pub trait QuizCandidate {
    fn question_id(&self) -> QuestionId;
    fn category_id(&self) -> CategoryId;
}

/// One stateless quiz step: the client tells us what it has already seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    category: QuizCategory,
    previous: HashSet<QuestionId>,
}

impl QuizRound {
    pub fn new(category: QuizCategory, previous: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            category,
            previous: previous.into_iter().collect(),
        }
    }

    pub fn category(&self) -> QuizCategory {
        self.category
    }

    pub fn previous(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.previous.iter().copied()
    }

    pub fn has_seen(&self, id: QuestionId) -> bool {
        self.previous.contains(&id)
    }

    pub fn is_eligible<C: QuizCandidate>(&self, candidate: &C) -> bool {
        self.category.matches(candidate.category_id()) && !self.has_seen(candidate.question_id())
    }

    /// Uniformly picks one eligible candidate, or `None` when the round is exhausted.
    pub fn pick<'a, C, R>(&self, candidates: &'a [C], rng: &mut R) -> Option<&'a C>
    where
        C: QuizCandidate,
        R: Rng + ?Sized,
    {
        let eligible: Vec<&C> = candidates.iter().filter(|c| self.is_eligible(*c)).collect();
        eligible.choose(rng).copied()
    }
}
