use crate::{
    model::{
        enums::ForumCategory,
        forum::{CreateReplyDto, CreateThreadDto},
    },
    server::{error::AppError, model::forum::ThreadFilter, service::forum::ForumService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests starting a thread with an unknown category.
///
/// Expected: thread filed under general with a slug derived from the title
#[tokio::test]
async fn creates_thread_in_general_for_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _) = factory::helpers::create_approved_member(db).await?;

    let service = ForumService::new(db);
    let (id, slug) = service
        .create_thread(
            author.id,
            CreateThreadDto {
                title: "  Who is hiring ML engineers?  ".to_string(),
                content: "Looking for pointers".to_string(),
                category: Some("gossip".to_string()),
            },
        )
        .await?;

    assert!(slug.starts_with("who-is-hiring-ml-engineers-"));

    let (thread, replies) = service.detail(&slug).await?;
    assert_eq!(thread.id, id);
    assert_eq!(thread.title, "Who is hiring ML engineers?");
    assert_eq!(thread.category, ForumCategory::General);
    assert!(replies.is_empty());

    Ok(())
}

/// Tests starting a thread with a blank title after trimming.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_thread() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _) = factory::helpers::create_approved_member(db).await?;

    let result = ForumService::new(db)
        .create_thread(
            author.id,
            CreateThreadDto {
                title: "   ".to_string(),
                content: "Body".to_string(),
                category: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that viewing a thread counts the view.
///
/// Expected: view_count increments on every detail read
#[tokio::test]
async fn detail_counts_views() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let thread = factory::create_thread(db, author.id).await?;

    let service = ForumService::new(db);
    let (first, _) = service.detail(&thread.slug).await?;
    let (second, _) = service.detail(&thread.slug).await?;

    assert_eq!(first.view_count, 1);
    assert_eq!(second.view_count, 2);

    Ok(())
}

/// Tests replying to a thread.
///
/// Expected: reply stored and thread reply_count bumped
#[tokio::test]
async fn reply_bumps_thread() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let thread = factory::create_thread(db, author.id).await?;
    let (replier, _) = factory::helpers::create_approved_member(db).await?;

    let service = ForumService::new(db);
    let reply = service
        .create_reply(
            replier.id,
            &thread.slug,
            CreateReplyDto {
                content: " Same question here ".to_string(),
                parent_id: None,
            },
        )
        .await?;

    assert_eq!(reply.content, "Same question here");
    assert_eq!(reply.author.id, replier.id);

    let (threads, _) = service.list(&ThreadFilter::default()).await?;
    assert_eq!(threads[0].reply_count, 1);
    assert_eq!(threads[0].last_reply_by_id, Some(replier.id));

    Ok(())
}

/// Tests replying to a locked thread.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn rejects_reply_to_locked_thread() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let thread = factory::forum_thread::ForumThreadFactory::new(db, author.id)
        .locked(true)
        .build()
        .await?;

    let result = ForumService::new(db)
        .create_reply(
            author.id,
            &thread.slug,
            CreateReplyDto {
                content: "Reopen please".to_string(),
                parent_id: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests replies with blank content or to a missing thread.
///
/// Expected: Err(BadRequest) for blank content, Err(NotFound) for an unknown slug
#[tokio::test]
async fn rejects_invalid_replies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let thread = factory::create_thread(db, author.id).await?;

    let service = ForumService::new(db);

    let blank = service
        .create_reply(
            author.id,
            &thread.slug,
            CreateReplyDto {
                content: "  ".to_string(),
                parent_id: None,
            },
        )
        .await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let missing = service
        .create_reply(
            author.id,
            "no-such-thread",
            CreateReplyDto {
                content: "Hello".to_string(),
                parent_id: None,
            },
        )
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
