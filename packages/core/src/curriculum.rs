//! Assembly of the Course → Section → Lesson tree out of flat, denormalized
//! lesson records.

use crate::access::AccessLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Course metadata as embedded on every lesson record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionCourse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub order: i32,
}

/// Section metadata as embedded on every lesson record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonSection {
    pub id: String,
    pub title: String,
    pub order: i32,
    pub course: SectionCourse,
}

/// Flat lesson record as fetched from the catalog, carrying its section and
/// course denormalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub order: i32,
    #[serde(default)]
    pub access: Option<AccessLevel>,
    pub section: LessonSection,
}

/// Lesson entry inside the assembled tree, stripped of the back references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub order: i32,
    #[serde(default)]
    pub access: Option<AccessLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    pub order: i32,
    pub lessons: Vec<LessonSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub order: i32,
    pub sections: Vec<Section>,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            slug: lesson.slug.clone(),
            title: lesson.title.clone(),
            order: lesson.order,
            access: lesson.access,
        }
    }
}

/// Group flat lesson records into the nested tree.
///
/// Grouping is driven by de-duplicating id → index maps, so repeated
/// embeddings of the same course or section collapse into one node with
/// first-seen metadata. Lessons land on their section in input order and
/// courses come back in first-seen order; ordering by the `order` field is a
/// separate step, see [`sort_curriculum`].
pub fn build_curriculum(lessons: &[Lesson]) -> Vec<Course> {
    let mut courses: Vec<Course> = Vec::new();
    let mut course_index: HashMap<&str, usize> = HashMap::new();
    let mut section_index: HashMap<&str, (usize, usize)> = HashMap::new();

    for lesson in lessons {
        let embedded_course = &lesson.section.course;
        let course_idx = *course_index
            .entry(embedded_course.id.as_str())
            .or_insert_with(|| {
                courses.push(Course {
                    id: embedded_course.id.clone(),
                    title: embedded_course.title.clone(),
                    slug: embedded_course.slug.clone(),
                    order: embedded_course.order,
                    sections: Vec::new(),
                });
                courses.len() - 1
            });

        let (course_idx, section_idx) = *section_index
            .entry(lesson.section.id.as_str())
            .or_insert_with(|| {
                let sections = &mut courses[course_idx].sections;
                sections.push(Section {
                    id: lesson.section.id.clone(),
                    title: lesson.section.title.clone(),
                    order: lesson.section.order,
                    lessons: Vec::new(),
                });
                (course_idx, sections.len() - 1)
            });

        courses[course_idx].sections[section_idx]
            .lessons
            .push(LessonSummary::from(lesson));
    }

    courses
}

/// Return a new tree with courses, sections and lessons each sorted
/// ascending by `order`. The sort is stable, so equal `order` values keep
/// their input order, and the input is never touched.
///
/// `None` passes through as `None`; an unloaded curriculum is not an error.
pub fn sort_curriculum(courses: Option<&[Course]>) -> Option<Vec<Course>> {
    let courses = courses?;

    let mut sorted: Vec<Course> = courses.to_vec();
    sorted.sort_by_key(|course| course.order);
    for course in &mut sorted {
        course.sections.sort_by_key(|section| section.order);
        for section in &mut course.sections {
            section.lessons.sort_by_key(|lesson| lesson.order);
        }
    }

    Some(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(
        id: &str,
        order: i32,
        section_id: &str,
        section_order: i32,
        course_id: &str,
        course_order: i32,
    ) -> Lesson {
        Lesson {
            id: id.to_string(),
            slug: format!("lesson-{id}"),
            title: format!("Lesson {id}"),
            order,
            access: Some(AccessLevel::Free),
            section: LessonSection {
                id: section_id.to_string(),
                title: format!("Section {section_id}"),
                order: section_order,
                course: SectionCourse {
                    id: course_id.to_string(),
                    title: format!("Course {course_id}"),
                    slug: format!("course-{course_id}"),
                    order: course_order,
                },
            },
        }
    }

    #[test]
    fn test_repeated_section_embedding_deduplicates() {
        let lessons = vec![
            lesson("l1", 2, "s1", 1, "c1", 1),
            lesson("l2", 1, "s1", 1, "c1", 1),
        ];

        let courses = build_curriculum(&lessons);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].sections.len(), 1);

        let section = &courses[0].sections[0];
        assert_eq!(section.id, "s1");
        // Input order, not order-field order.
        assert_eq!(section.lessons[0].id, "l1");
        assert_eq!(section.lessons[1].id, "l2");
    }

    #[test]
    fn test_courses_come_back_in_first_seen_order() {
        let lessons = vec![
            lesson("l1", 1, "s2", 2, "c2", 2),
            lesson("l2", 1, "s1", 1, "c1", 1),
            lesson("l3", 2, "s2", 2, "c2", 2),
        ];

        let courses = build_curriculum(&lessons);
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, "c2");
        assert_eq!(courses[1].id, "c1");
        assert_eq!(courses[0].sections[0].lessons.len(), 2);
    }

    #[test]
    fn test_first_seen_metadata_wins() {
        let mut second = lesson("l2", 2, "s1", 1, "c1", 1);
        second.section.title = "Renamed Section".to_string();
        second.section.course.title = "Renamed Course".to_string();
        let lessons = vec![lesson("l1", 1, "s1", 1, "c1", 1), second];

        let courses = build_curriculum(&lessons);
        assert_eq!(courses[0].title, "Course c1");
        assert_eq!(courses[0].sections[0].title, "Section s1");
    }

    #[test]
    fn test_empty_input() {
        assert!(build_curriculum(&[]).is_empty());
    }

    #[test]
    fn test_sort_none_passes_through() {
        assert_eq!(sort_curriculum(None), None);
    }

    #[test]
    fn test_sort_orders_every_level() {
        let lessons = vec![
            lesson("l1", 2, "s2", 2, "c2", 2),
            lesson("l2", 1, "s2", 2, "c2", 2),
            lesson("l3", 1, "s1", 1, "c2", 2),
            lesson("l4", 1, "s3", 1, "c1", 1),
        ];
        let courses = build_curriculum(&lessons);

        let sorted = sort_curriculum(Some(&courses)).unwrap();
        assert_eq!(sorted[0].id, "c1");
        assert_eq!(sorted[1].id, "c2");
        assert_eq!(sorted[1].sections[0].id, "s1");
        assert_eq!(sorted[1].sections[1].id, "s2");
        assert_eq!(sorted[1].sections[1].lessons[0].id, "l2");
        assert_eq!(sorted[1].sections[1].lessons[1].id, "l1");
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let lessons = vec![
            lesson("l1", 2, "s2", 2, "c2", 2),
            lesson("l2", 1, "s1", 1, "c1", 1),
        ];
        let courses = build_curriculum(&lessons);
        let snapshot = courses.clone();

        let _ = sort_curriculum(Some(&courses));
        assert_eq!(courses, snapshot);
    }

    #[test]
    fn test_sort_is_stable_on_equal_orders() {
        let lessons = vec![
            lesson("l1", 1, "s1", 1, "c1", 1),
            lesson("l2", 1, "s1", 1, "c1", 1),
            lesson("l3", 1, "s1", 1, "c1", 1),
        ];
        let courses = build_curriculum(&lessons);

        let sorted = sort_curriculum(Some(&courses)).unwrap();
        let ids: Vec<&str> = sorted[0].sections[0]
            .lessons
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["l1", "l2", "l3"]);
    }
}
