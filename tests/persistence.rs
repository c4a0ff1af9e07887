use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use mergington::database::activity_repo::{self, NewActivity};
use mergington::database::student_repo::{self, NewStudent};
use mergington::database::{enrollment_repo, schema};

async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    schema::ensure_schema(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn create_activity_and_enroll() {
    let pool = test_pool().await;

    let activity_id = activity_repo::insert(
        &pool,
        NewActivity {
            name: "Test Club",
            description: Some("desc"),
            schedule: Some("now"),
            max_participants: 2,
        },
    )
    .await
    .unwrap();

    let student_id = student_repo::insert(
        &pool,
        NewStudent {
            email: "stu@example.com",
            name: Some("Stu"),
            grade: None,
        },
    )
    .await
    .unwrap();

    enrollment_repo::insert(&pool, activity_id, student_id)
        .await
        .unwrap();

    // Reload and assert.
    let activity = activity_repo::find_by_name(&pool, "Test Club")
        .await
        .unwrap()
        .expect("activity should persist");
    assert_eq!(activity.max_participants, 2);
    assert_eq!(
        enrollment_repo::count_for_activity(&pool, activity.id)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        enrollment_repo::list_participant_emails(&pool, activity.id)
            .await
            .unwrap(),
        vec!["stu@example.com"]
    );
}

#[tokio::test]
async fn duplicate_enrollment_pair_violates_unique_constraint() {
    let pool = test_pool().await;

    let activity_id = activity_repo::insert(
        &pool,
        NewActivity {
            name: "Test Club",
            description: None,
            schedule: None,
            max_participants: 0,
        },
    )
    .await
    .unwrap();
    let student_id = student_repo::insert(
        &pool,
        NewStudent {
            email: "stu@example.com",
            name: None,
            grade: None,
        },
    )
    .await
    .unwrap();

    enrollment_repo::insert(&pool, activity_id, student_id)
        .await
        .unwrap();
    let err = enrollment_repo::insert(&pool, activity_id, student_id)
        .await
        .unwrap_err();
    assert!(err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation()));
}

#[tokio::test]
async fn insert_if_capacity_stops_at_the_cap() {
    let pool = test_pool().await;

    let activity_id = activity_repo::insert(
        &pool,
        NewActivity {
            name: "Test Club",
            description: None,
            schedule: None,
            max_participants: 1,
        },
    )
    .await
    .unwrap();
    let first = student_repo::insert(
        &pool,
        NewStudent {
            email: "a@x.com",
            name: None,
            grade: None,
        },
    )
    .await
    .unwrap();
    let second = student_repo::insert(
        &pool,
        NewStudent {
            email: "b@x.com",
            name: None,
            grade: None,
        },
    )
    .await
    .unwrap();

    assert!(enrollment_repo::insert_if_capacity(&pool, activity_id, first, 1)
        .await
        .unwrap());
    assert!(!enrollment_repo::insert_if_capacity(&pool, activity_id, second, 1)
        .await
        .unwrap());
    assert_eq!(
        enrollment_repo::count_for_activity(&pool, activity_id)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn deleting_an_activity_cascades_to_its_enrollments() {
    let pool = test_pool().await;

    let activity_id = activity_repo::insert(
        &pool,
        NewActivity {
            name: "Test Club",
            description: None,
            schedule: None,
            max_participants: 0,
        },
    )
    .await
    .unwrap();
    let student_id = student_repo::insert(
        &pool,
        NewStudent {
            email: "stu@example.com",
            name: None,
            grade: None,
        },
    )
    .await
    .unwrap();
    enrollment_repo::insert(&pool, activity_id, student_id)
        .await
        .unwrap();

    assert_eq!(
        activity_repo::delete_by_name(&pool, "Test Club")
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        enrollment_repo::count_for_activity(&pool, activity_id)
            .await
            .unwrap(),
        0
    );
    // The student record itself survives the cascade.
    assert!(student_repo::find_by_email(&pool, "stu@example.com")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn deleting_a_student_cascades_to_their_enrollments() {
    let pool = test_pool().await;

    let activity_id = activity_repo::insert(
        &pool,
        NewActivity {
            name: "Test Club",
            description: None,
            schedule: None,
            max_participants: 0,
        },
    )
    .await
    .unwrap();
    let student_id = student_repo::insert(
        &pool,
        NewStudent {
            email: "stu@example.com",
            name: None,
            grade: None,
        },
    )
    .await
    .unwrap();
    enrollment_repo::insert(&pool, activity_id, student_id)
        .await
        .unwrap();

    assert_eq!(
        student_repo::delete_by_email(&pool, "stu@example.com")
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        enrollment_repo::count_for_activity(&pool, activity_id)
            .await
            .unwrap(),
        0
    );
    assert!(activity_repo::find_by_name(&pool, "Test Club")
        .await
        .unwrap()
        .is_some());
}
