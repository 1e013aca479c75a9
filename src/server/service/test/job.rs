use chrono::{Duration, Utc};

use crate::{
    model::{
        enums::{JobType, LocationType},
        job::CreateJobDto,
    },
    server::{error::AppError, model::job::JobFilter, service::job::JobService},
};
use test_utils::{builder::TestBuilder, factory};

fn posting(title: &str, description: &str) -> CreateJobDto {
    CreateJobDto {
        title: title.to_string(),
        description: description.to_string(),
        ..Default::default()
    }
}

/// Tests posting a job without owning a startup.
///
/// Expected: Err(BadRequest("You need to register a startup first"))
#[tokio::test]
async fn requires_a_startup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = JobService::new(db)
        .create(user.id, posting("Engineer", "Build things"))
        .await;

    assert!(
        matches!(result, Err(AppError::BadRequest(msg)) if msg == "You need to register a startup first")
    );

    Ok(())
}

/// Tests posting a job with defaults.
///
/// Expected: INR, full-time, hybrid, active, expiring in 30 days, listed publicly
#[tokio::test]
async fn creates_job_with_defaults_and_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (founder, startup) = factory::helpers::create_founder_with_startup(db).await?;

    let service = JobService::new(db);
    let job = service
        .create(founder.id, posting("Founding Engineer", "Own the platform"))
        .await?;

    assert_eq!(job.startup_id, startup.id);
    assert_eq!(job.startup_name, startup.name);
    assert_eq!(job.salary_currency, "INR");
    assert_eq!(job.job_type, JobType::FullTime);
    assert_eq!(job.location_type, LocationType::Hybrid);
    assert!(job.is_active);

    let expires_at = job.expires_at.unwrap();
    let expected = Utc::now() + Duration::days(30);
    assert!((expected - expires_at).num_seconds().abs() < 60);

    let listed = service.list(&JobFilter::default()).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(service.get(job.id).await?.title, "Founding Engineer");

    Ok(())
}

/// Tests posting a job with a blank description.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_description() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (founder, _) = factory::helpers::create_founder_with_startup(db).await?;

    let result = JobService::new(db)
        .create(founder.id, posting("Engineer", "   "))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reading an expired job by id.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn expired_job_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (founder, startup) = factory::helpers::create_founder_with_startup(db).await?;
    let job = factory::job::JobFactory::new(db, startup.id, founder.id)
        .expires_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;

    let result = JobService::new(db).get(job.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
