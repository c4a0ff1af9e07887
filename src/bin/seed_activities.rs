use dotenvy::dotenv;
use std::env;

use mergington::database::activity_repo::{self, NewActivity};
use mergington::database::{self, schema};

/// Provisions the activity catalog out of band. Activities that already
/// exist are left untouched, so the seed is safe to re-run.
#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://dev.db".to_string());
    let pool = database::connect(&db_url)
        .await
        .expect("failed to connect to database");
    schema::ensure_schema(&pool)
        .await
        .expect("failed to create schema");

    let seeds = [
        NewActivity {
            name: "Chess Club",
            description: Some("Learn strategies and compete in chess tournaments"),
            schedule: Some("Fridays, 3:30 PM - 5:00 PM"),
            max_participants: 12,
        },
        NewActivity {
            name: "Programming Class",
            description: Some("Learn programming fundamentals and build software projects"),
            schedule: Some("Tuesdays and Thursdays, 3:30 PM - 4:30 PM"),
            max_participants: 20,
        },
        NewActivity {
            name: "Gym Class",
            description: Some("Physical education and sports activities"),
            schedule: Some("Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM"),
            max_participants: 30,
        },
        NewActivity {
            name: "Drama Club",
            description: Some("Act, direct, and produce the school plays"),
            schedule: Some("Mondays and Wednesdays, 3:30 PM - 5:00 PM"),
            max_participants: 18,
        },
        NewActivity {
            name: "Art Workshop",
            description: Some("Painting, drawing, and sculpture for all levels"),
            schedule: Some("Thursdays, 3:30 PM - 5:00 PM"),
            max_participants: 15,
        },
    ];

    let mut created = 0usize;
    let mut skipped = 0usize;
    for seed in seeds {
        let name = seed.name;
        let existing = activity_repo::find_by_name(&pool, name)
            .await
            .expect("activity lookup failed");
        if existing.is_some() {
            skipped += 1;
            continue;
        }
        match activity_repo::insert(&pool, seed).await {
            Ok(_) => created += 1,
            Err(e) => {
                eprintln!("seed failed for {}: {}", name, e);
                std::process::exit(1);
            }
        }
    }

    println!("activity seed: created={}, skipped={}", created, skipped);
}
