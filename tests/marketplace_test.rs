//! End-to-end tests over the seeded in-memory catalog.

use std::sync::Arc;

use rust_decimal::Decimal;

use scribemarket::domain::ApplicationStatus;
use scribemarket::services::{DashboardService, ReviewService, Services, ServiceContainer};
use scribemarket::store::{
    ApplicationRepository, InMemoryCatalog, ProjectRepository, SeedData,
};

fn catalog() -> Arc<InMemoryCatalog> {
    Arc::new(InMemoryCatalog::from_seed(SeedData::builtin().unwrap()))
}

#[test]
fn student_query_returns_seed_projects_in_order() {
    let catalog = catalog();
    let projects = ProjectRepository::find_by_student(catalog.as_ref(), "s1").unwrap();
    let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p4"]);
}

#[test]
fn writer_query_returns_seed_projects_in_order() {
    let catalog = catalog();
    let projects = ProjectRepository::find_by_writer(catalog.as_ref(), "w1").unwrap();
    let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2"]);
}

#[tokio::test]
async fn approve_touches_exactly_one_record() {
    let catalog = catalog();
    let services = Services::from_catalog(catalog.clone());
    let before = ApplicationRepository::list(catalog.as_ref()).unwrap();

    services.review().approve("1").await.unwrap();

    let after = ApplicationRepository::list(catalog.as_ref()).unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[0].status, ApplicationStatus::Approved);

    // Only the status of record "1" changed
    let mut expected_first = before[0].clone();
    expected_first.status = ApplicationStatus::Approved;
    assert_eq!(after[0], expected_first);
    assert_eq!(&after[1..], &before[1..]);
}

#[tokio::test]
async fn repeated_reject_is_an_accepted_noop() {
    let catalog = catalog();
    let services = Services::from_catalog(catalog.clone());

    let first = services.review().reject("2").await.unwrap();
    assert_eq!(first.status, ApplicationStatus::Rejected);

    let second = services.review().reject("2").await.unwrap();
    assert_eq!(second.status, ApplicationStatus::Rejected);
}

#[tokio::test]
async fn approve_after_reject_is_invalid() {
    let catalog = catalog();
    let services = Services::from_catalog(catalog.clone());

    services.review().reject("2").await.unwrap();
    let result = services.review().approve("2").await;

    assert!(result.is_err());
    let unchanged = ApplicationRepository::find_by_id(catalog.as_ref(), "2")
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.status, ApplicationStatus::Rejected);
}

#[tokio::test]
async fn admin_overview_matches_seed_numbers() {
    let services = Services::from_catalog(catalog());

    let overview = services.dashboards().admin_overview().await.unwrap();

    assert_eq!(overview.pending_applications, 2);
    assert_eq!(overview.total_writers, 3);
    assert_eq!(overview.total_projects, 5);
    assert_eq!(overview.active_projects, 1);
}

#[tokio::test]
async fn admin_overview_reflects_reviews() {
    let services = Services::from_catalog(catalog());

    services.review().approve("1").await.unwrap();
    let overview = services.dashboards().admin_overview().await.unwrap();

    assert_eq!(overview.pending_applications, 1);
}

#[tokio::test]
async fn student_overview_partitions_by_status() {
    let services = Services::from_catalog(catalog());

    let overview = services.dashboards().student_overview("s1").await.unwrap();

    let active: Vec<_> = overview.active.iter().map(|p| p.id.as_str()).collect();
    let completed: Vec<_> = overview.completed.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(active, vec!["p1"]);
    assert_eq!(completed, vec!["p4"]);
    assert!(overview.pending.is_empty());
}

#[tokio::test]
async fn student_overview_is_empty_for_unknown_student() {
    let services = Services::from_catalog(catalog());

    let overview = services.dashboards().student_overview("s99").await.unwrap();

    assert!(overview.active.is_empty());
    assert!(overview.completed.is_empty());
    assert!(overview.pending.is_empty());
}

#[tokio::test]
async fn writer_overview_reads_profile_and_counts_active_work() {
    let services = Services::from_catalog(catalog());

    let w1 = services.dashboards().writer_overview("w1").await.unwrap();
    assert_eq!(w1.earnings, Decimal::from(8500u32));
    assert_eq!(w1.completed_projects, 45);
    assert!((w1.rating - 4.8).abs() < f32::EPSILON);
    assert_eq!(w1.active_projects, 0);

    let w2 = services.dashboards().writer_overview("w2").await.unwrap();
    assert_eq!(w2.active_projects, 1);
}

#[tokio::test]
async fn writer_overview_for_unknown_writer_is_not_found() {
    let services = Services::from_catalog(catalog());

    let result = services.dashboards().writer_overview("w99").await;

    assert!(result.is_err());
}
