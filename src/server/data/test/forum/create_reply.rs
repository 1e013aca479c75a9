use super::*;

/// Tests that replying updates the thread's bookkeeping.
///
/// Expected: reply_count incremented and last reply attributed to the replier
#[tokio::test]
async fn updates_thread_reply_bookkeeping() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let replier = factory::user::UserFactory::new(db).name("Replier").build().await?;
    let thread = factory::create_thread(db, author.id).await?;

    let repo = ForumRepository::new(db);
    let reply = repo
        .create_reply(CreateReplyParam {
            thread_id: thread.id,
            author_id: replier.id,
            parent_id: None,
            content: "Welcome!".to_string(),
        })
        .await?;

    assert_eq!(reply.author.name.as_deref(), Some("Replier"));

    let stored = repo.find_by_slug(&thread.slug).await?.unwrap();
    assert_eq!(stored.reply_count, 1);
    assert_eq!(stored.last_reply_by_id, Some(replier.id));
    assert!(stored.last_reply_at.is_some());

    Ok(())
}

/// Tests reply ordering.
///
/// Expected: replies returned oldest first
#[tokio::test]
async fn returns_replies_in_posting_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let thread = factory::create_thread(db, author.id).await?;

    let repo = ForumRepository::new(db);
    let first = repo
        .create_reply(CreateReplyParam {
            thread_id: thread.id,
            author_id: author.id,
            parent_id: None,
            content: "one".to_string(),
        })
        .await?;
    let second = repo
        .create_reply(CreateReplyParam {
            thread_id: thread.id,
            author_id: author.id,
            parent_id: Some(first.id),
            content: "two".to_string(),
        })
        .await?;

    let replies = repo.get_replies(thread.id).await?;

    let ids: Vec<i32> = replies.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(replies[1].parent_id, Some(first.id));

    Ok(())
}
