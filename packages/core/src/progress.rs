use crate::access::User;
use crate::curriculum::Lesson;
use crate::problems::Problem;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Join record marking that a user has interacted with a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    pub lesson_id: String,
}

/// Join record marking that a user has interacted with a problem. Also
/// embedded on [`Problem`](crate::problems::Problem) to flag completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemProgress {
    #[serde(default)]
    pub problem_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Dashboard progress percentages, unrounded; the frontend formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub current_lesson_progress: f64,
    pub current_problem_progress: f64,
}

fn percentage(records: usize, catalog_size: usize) -> f64 {
    if catalog_size == 0 {
        return 0.0;
    }
    records as f64 / catalog_size as f64 * 100.0
}

/// Percentage of the catalog the user has touched, per content type.
///
/// Counts progress rows over catalog size. Deliberately unclamped: progress
/// rows referencing items that have since left the catalog can push a value
/// past 100.
pub fn calculate_progress(
    user: &User,
    all_lessons: &[Lesson],
    all_problems: &[Problem],
) -> ProgressSummary {
    ProgressSummary {
        current_lesson_progress: percentage(user.lesson_progress.len(), all_lessons.len()),
        current_problem_progress: percentage(user.problem_progress.len(), all_problems.len()),
    }
}
