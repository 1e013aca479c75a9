use super::*;

fn param(user_id: i32, company: &str) -> UpsertProfileParam {
    UpsertProfileParam {
        user_id,
        role: Role::Founder,
        bio: Some("Building agents".to_string()),
        company: Some(company.to_string()),
        title: Some("CEO".to_string()),
        city: Some("Berlin".to_string()),
        linkedin_url: None,
        twitter_url: None,
        website_url: None,
        interests: vec!["llm".to_string(), "agents".to_string()],
        looking_for: vec!["cofounder".to_string()],
    }
}

/// Tests onboarding a new member.
///
/// Verifies that the first save creates an unapproved, unverified profile and
/// that list fields survive the JSON column round trip.
///
/// Expected: Ok with is_approved false and interests preserved in order
#[tokio::test]
async fn creates_unapproved_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    let profile = repo.upsert(param(user.id, "Acme AI")).await?;

    assert_eq!(profile.role, Role::Founder);
    assert_eq!(profile.company.as_deref(), Some("Acme AI"));
    assert!(!profile.is_approved);
    assert!(!profile.is_verified);
    assert_eq!(profile.interests, vec!["llm", "agents"]);

    Ok(())
}

/// Tests editing a profile that an admin already approved.
///
/// Verifies that a member's own edit never touches moderation flags.
///
/// Expected: Ok with the new company and approval still true
#[tokio::test]
async fn edit_preserves_moderation_flags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_approved_member(db).await?;

    let repo = ProfileRepository::new(db);
    let profile = repo.upsert(param(user.id, "Renamed Labs")).await?;

    assert_eq!(profile.company.as_deref(), Some("Renamed Labs"));
    assert!(profile.is_approved);

    Ok(())
}
