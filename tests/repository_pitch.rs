use pitchboard::domain::entities::NewPitch;
use pitchboard::domain::repositories::PitchRepository;
use pitchboard::infrastructure::persistence::PgPitchRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_pitch(author: &str, title: &str, category: &str) -> NewPitch {
    NewPitch {
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        description: format!("About {title}"),
        category: category.to_string(),
        image: "https://example.com/cover.png".to_string(),
        pitch: "## Problem".to_string(),
        author_id: author.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_pitch(pool: PgPool) {
    let repo = PgPitchRepository::new(Arc::new(pool));

    let pitch = repo
        .create(new_pitch("ada", "Solar Drones", "Energy"))
        .await
        .unwrap();

    assert!(pitch.id > 0);
    assert_eq!(pitch.title, "Solar Drones");
    assert_eq!(pitch.slug, "solar-drones");
    assert_eq!(pitch.author_id, "ada");
    assert_eq!(pitch.views, 0);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgPitchRepository::new(Arc::new(pool));
    let created = repo
        .create(new_pitch("ada", "Solar Drones", "Energy"))
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = repo.find_by_id(999_999).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_by_author_newest_first(pool: PgPool) {
    let repo = PgPitchRepository::new(Arc::new(pool));
    let first = repo
        .create(new_pitch("ada", "Solar Drones", "Energy"))
        .await
        .unwrap();
    let second = repo
        .create(new_pitch("ada", "Analytical Engines", "Hardware"))
        .await
        .unwrap();
    repo.create(new_pitch("grace", "Compiler Cafe", "Food"))
        .await
        .unwrap();

    let pitches = repo.list_by_author("ada").await.unwrap();

    let ids: Vec<i64> = pitches.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    assert!(repo.list_by_author("nobody").await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_search(pool: PgPool) {
    let repo = PgPitchRepository::new(Arc::new(pool));
    repo.create(new_pitch("ada", "Solar Drones", "Energy"))
        .await
        .unwrap();
    repo.create(new_pitch("grace", "Compiler Cafe", "Food"))
        .await
        .unwrap();

    assert_eq!(repo.search(None).await.unwrap().len(), 2);

    let by_title = repo.search(Some("drones".to_string())).await.unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Solar Drones");

    let by_category = repo.search(Some("FOOD".to_string())).await.unwrap();
    assert_eq!(by_category.len(), 1);

    let by_author = repo.search(Some("grace".to_string())).await.unwrap();
    assert_eq!(by_author.len(), 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_search_escapes_wildcards(pool: PgPool) {
    let repo = PgPitchRepository::new(Arc::new(pool));
    repo.create(new_pitch("ada", "Solar Drones", "Energy"))
        .await
        .unwrap();

    assert!(repo.search(Some("%".to_string())).await.unwrap().is_empty());
    assert!(repo.search(Some("_".to_string())).await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_increment_views(pool: PgPool) {
    let repo = PgPitchRepository::new(Arc::new(pool));
    let pitch = repo
        .create(new_pitch("ada", "Solar Drones", "Energy"))
        .await
        .unwrap();

    assert!(repo.increment_views(pitch.id).await.unwrap());
    assert!(repo.increment_views(pitch.id).await.unwrap());
    assert!(!repo.increment_views(999_999).await.unwrap());

    let pitch = repo.find_by_id(pitch.id).await.unwrap().unwrap();
    assert_eq!(pitch.views, 2);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_and_count(pool: PgPool) {
    let repo = PgPitchRepository::new(Arc::new(pool));
    let pitch = repo
        .create(new_pitch("ada", "Solar Drones", "Energy"))
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
    assert!(repo.delete(pitch.id).await.unwrap());
    assert!(!repo.delete(pitch.id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}
