//! Filtering and sorting for the problem browser.

use crate::progress::ProblemProgress;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Declaration order doubles as severity order, so `Ord` sorts
/// EASY < MEDIUM < HARD.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemDifficulty {
    Easy,
    Medium,
    Hard,
}

/// Lesson reference embedded on a problem row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemLesson {
    pub slug: String,
    pub title: String,
}

/// Catalog problem together with the requesting user's progress rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub difficulty: ProblemDifficulty,
    pub lesson: ProblemLesson,
    #[serde(default)]
    pub problem_progress: Vec<ProblemProgress>,
}

impl Problem {
    /// Completed means at least one progress row with `completed` set;
    /// merely having interacted with the problem does not count.
    pub fn is_completed(&self) -> bool {
        self.problem_progress.iter().any(|record| record.completed)
    }
}

/// The one status value the browser filters on. Anything else coming from
/// the UI means "no status filter".
const STATUS_COMPLETED: &str = "COMPLETED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Title,
    Difficulty,
    Lesson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Browser query as sent by the frontend. All fields are optional and
/// independently combinable; set filters are AND-combined.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemQuery {
    #[serde(default)]
    pub difficulty: Option<ProblemDifficulty>,
    /// Raw status value from the UI; only the exact value `COMPLETED`
    /// filters, everything else is ignored.
    #[serde(default)]
    pub status: Option<String>,
    /// Exact lesson slug.
    #[serde(default)]
    pub lesson: Option<String>,
    /// Case insensitive substring match on the title.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_column: Option<SortColumn>,
    /// Defaults to ascending when a sort column is set.
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

fn matches_query(problem: &Problem, query: &ProblemQuery) -> bool {
    if let Some(difficulty) = query.difficulty {
        if problem.difficulty != difficulty {
            return false;
        }
    }

    if query.status.as_deref() == Some(STATUS_COMPLETED) && !problem.is_completed() {
        return false;
    }

    if let Some(lesson_slug) = query.lesson.as_deref() {
        if problem.lesson.slug != lesson_slug {
            return false;
        }
    }

    if let Some(search) = query.search.as_deref() {
        if !problem
            .title
            .to_lowercase()
            .contains(&search.to_lowercase())
        {
            return false;
        }
    }

    true
}

fn compare(a: &Problem, b: &Problem, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Difficulty => a.difficulty.cmp(&b.difficulty),
        SortColumn::Lesson => a.lesson.title.cmp(&b.lesson.title),
    }
}

/// Apply every set filter, then sort if a column was requested.
///
/// Filters run before sorting; without a sort column the filtered problems
/// keep their input order. The sort is stable and the input slice is never
/// mutated.
pub fn filter_and_sort_problems(problems: &[Problem], query: &ProblemQuery) -> Vec<Problem> {
    let mut result: Vec<Problem> = problems
        .iter()
        .filter(|problem| matches_query(problem, query))
        .cloned()
        .collect();

    if let Some(column) = query.sort_column {
        let order = query.sort_order.unwrap_or_default();
        result.sort_by(|a, b| {
            let ordering = compare(a, b, column);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    result
}
