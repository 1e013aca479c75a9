use super::*;

/// Tests that expired and inactive listings are hidden.
///
/// Expected: Ok with only the live job, joined with its startup name
#[tokio::test]
async fn excludes_expired_and_inactive_jobs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (founder, startup) = factory::helpers::create_founder_with_startup(db).await?;

    let live = factory::create_job(db, startup.id, founder.id).await?;
    factory::job::JobFactory::new(db, startup.id, founder.id)
        .expires_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;
    factory::job::JobFactory::new(db, startup.id, founder.id)
        .active(false)
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let jobs = repo.get_visible(&JobFilter::default(), Utc::now()).await?;

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, live.id);
    assert_eq!(jobs[0].startup_name, startup.name);

    let expired_lookup = repo
        .find_visible_by_id(live.id, Utc::now() + Duration::days(31))
        .await?;
    assert!(expired_lookup.is_none());

    Ok(())
}

/// Tests that a job without an expiry stays visible.
///
/// Expected: Ok with the job listed
#[tokio::test]
async fn job_without_expiry_is_visible() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (founder, startup) = factory::helpers::create_founder_with_startup(db).await?;
    let job = factory::job::JobFactory::new(db, startup.id, founder.id)
        .expires_at(None)
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let found = repo.find_visible_by_id(job.id, Utc::now()).await?;

    assert!(found.is_some());

    Ok(())
}

/// Tests board ordering.
///
/// Expected: Ok with the featured job first even though it is older
#[tokio::test]
async fn lists_featured_jobs_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (founder, startup) = factory::helpers::create_founder_with_startup(db).await?;
    let featured = factory::job::JobFactory::new(db, startup.id, founder.id)
        .featured(true)
        .build()
        .await?;
    let regular = factory::create_job(db, startup.id, founder.id).await?;

    let repo = JobRepository::new(db);
    let jobs = repo.get_visible(&JobFilter::default(), Utc::now()).await?;

    let ids: Vec<i32> = jobs.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![featured.id, regular.id]);

    Ok(())
}

/// Tests the location type and text filters.
///
/// Expected: Ok with only the remote Rust job
#[tokio::test]
async fn applies_location_and_text_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (founder, startup) = factory::helpers::create_founder_with_startup(db).await?;
    let target = factory::job::JobFactory::new(db, startup.id, founder.id)
        .title("Rust Engineer")
        .location_type("remote")
        .build()
        .await?;
    factory::job::JobFactory::new(db, startup.id, founder.id)
        .title("Rust Engineer")
        .location_type("onsite")
        .build()
        .await?;
    factory::job::JobFactory::new(db, startup.id, founder.id)
        .title("Designer")
        .location_type("remote")
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let jobs = repo
        .get_visible(
            &JobFilter {
                location_type: Some(LocationType::Remote),
                query: Some("rust".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, target.id);

    Ok(())
}
