use super::*;

/// Tests thread ordering.
///
/// Verifies that pinned threads lead the list and that author display fields are
/// joined in.
///
/// Expected: Ok with the pinned thread first
#[tokio::test]
async fn lists_pinned_threads_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::UserFactory::new(db).name("Poster").build().await?;
    let regular = factory::create_thread(db, author.id).await?;
    let pinned = factory::forum_thread::ForumThreadFactory::new(db, author.id)
        .pinned(true)
        .build()
        .await?;

    let repo = ForumRepository::new(db);
    let threads = repo.get_threads(&ThreadFilter::default()).await?;

    let ids: Vec<i32> = threads.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![pinned.id, regular.id]);
    assert_eq!(threads[0].author.name.as_deref(), Some("Poster"));

    Ok(())
}

/// Tests category filtering and per-category counts.
///
/// Expected: Ok with one hiring thread listed and counts covering every category
#[tokio::test]
async fn filters_by_category_and_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let hiring = factory::forum_thread::ForumThreadFactory::new(db, author.id)
        .category("hiring")
        .build()
        .await?;
    factory::create_thread(db, author.id).await?;
    factory::create_thread(db, author.id).await?;

    let repo = ForumRepository::new(db);
    let threads = repo
        .get_threads(&ThreadFilter {
            category: Some(ForumCategory::Hiring),
            query: None,
        })
        .await?;

    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].id, hiring.id);

    let counts = repo.count_by_category().await?;
    assert_eq!(counts.len(), ForumCategory::ALL.len());
    assert!(counts.contains(&(ForumCategory::Hiring, 1)));
    assert!(counts.contains(&(ForumCategory::General, 2)));
    assert!(counts.contains(&(ForumCategory::Events, 0)));

    Ok(())
}

/// Tests creating a thread and reading it back by slug.
///
/// Expected: Ok with the stored thread found and its view count bumped once
#[tokio::test]
async fn creates_thread_and_counts_views() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let repo = ForumRepository::new(db);
    let (id, slug) = repo
        .create_thread(CreateThreadParam {
            author_id: author.id,
            title: "Hello".to_string(),
            slug: "hello-abc123".to_string(),
            content: "First post".to_string(),
            category: ForumCategory::Introductions,
        })
        .await?;
    assert_eq!(slug, "hello-abc123");

    repo.increment_view_count(id).await?;

    let thread = repo.find_by_slug(&slug).await?.unwrap();
    assert_eq!(thread.id, id);
    assert_eq!(thread.category, ForumCategory::Introductions);
    assert_eq!(thread.view_count, 1);
    assert!(repo.find_by_slug("missing").await?.is_none());

    Ok(())
}
