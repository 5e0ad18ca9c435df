//! End to end check of the dashboard path: assemble and sort the curriculum,
//! gate it by subscription state and compute the progress figures, the way
//! the frontend drives this crate.

use chrono::{DateTime, Utc};
use codequest_core::access::{AccessLevel, User, has_access};
use codequest_core::curriculum::{
    Lesson, LessonSection, SectionCourse, build_curriculum, sort_curriculum,
};
use codequest_core::progress::{LessonProgress, calculate_progress};
use codequest_core::subscription::{EffectiveStatus, Subscription, effective_status};

fn lesson(id: &str, order: i32, access: AccessLevel) -> Lesson {
    Lesson {
        id: id.to_string(),
        slug: format!("lesson-{id}"),
        title: format!("Lesson {id}"),
        order,
        access: Some(access),
        section: LessonSection {
            id: "s1".to_string(),
            title: "Basics".to_string(),
            order: 1,
            course: SectionCourse {
                id: "c1".to_string(),
                title: "Rust from Zero".to_string(),
                slug: "rust-from-zero".to_string(),
                order: 1,
            },
        },
    }
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_dashboard_for_active_subscriber() {
    let lessons = vec![
        lesson("l2", 2, AccessLevel::Premium),
        lesson("l1", 1, AccessLevel::Free),
    ];

    let courses = build_curriculum(&lessons);
    let sorted = sort_curriculum(Some(&courses)).unwrap();
    assert_eq!(sorted[0].sections[0].lessons[0].id, "l1");

    let subscription = Subscription {
        status: "ACTIVE".to_string(),
        end_date: Some(now() + chrono::Duration::days(30)),
    };
    let status = effective_status(Some(&subscription), now());
    assert_eq!(status, Some(EffectiveStatus::Active));

    let user = User {
        email: Some("student@example.com".to_string()),
        current_subscription_status: Some(codequest_core::subscription::SubscriptionStatus::Active),
        lesson_progress: vec![LessonProgress {
            lesson_id: "l1".to_string(),
        }],
        ..User::default()
    };

    for summary in &sorted[0].sections[0].lessons {
        assert!(has_access(Some(&user), summary.access));
    }

    let progress = calculate_progress(&user, &lessons, &[]);
    assert_eq!(progress.current_lesson_progress, 50.0);
    assert_eq!(progress.current_problem_progress, 0.0);
}

#[test]
fn test_dashboard_for_expired_subscriber() {
    let lessons = vec![
        lesson("l1", 1, AccessLevel::Free),
        lesson("l2", 2, AccessLevel::Premium),
    ];
    let sorted = sort_curriculum(Some(&build_curriculum(&lessons))).unwrap();

    let subscription = Subscription {
        status: "ACTIVE".to_string(),
        end_date: Some(now() - chrono::Duration::days(1)),
    };
    assert_eq!(
        effective_status(Some(&subscription), now()),
        Some(EffectiveStatus::Expired)
    );

    let user = User {
        email: Some("student@example.com".to_string()),
        current_subscription_status: Some(
            codequest_core::subscription::SubscriptionStatus::Expired,
        ),
        ..User::default()
    };

    let visible: Vec<&str> = sorted[0].sections[0]
        .lessons
        .iter()
        .filter(|summary| has_access(Some(&user), summary.access))
        .map(|summary| summary.id.as_str())
        .collect();
    assert_eq!(visible, vec!["l1"]);
}
