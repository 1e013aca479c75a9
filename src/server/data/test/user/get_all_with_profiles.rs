use super::*;
use crate::server::error::AppError;

/// Tests the admin member list.
///
/// Verifies that every user is returned, including users who never completed
/// onboarding, and that the profile is attached when one exists.
///
/// Expected: Ok with both users, only one carrying a profile
#[tokio::test]
async fn includes_users_without_profiles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _) = factory::helpers::create_approved_member(db).await?;
    let newcomer = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let all = repo.get_all_with_profiles().await?;

    assert_eq!(all.len(), 2);

    let with_profile = all.iter().find(|m| m.user.id == member.id).unwrap();
    assert!(with_profile.profile.as_ref().is_some_and(|p| p.is_approved));

    let without_profile = all.iter().find(|m| m.user.id == newcomer.id).unwrap();
    assert!(without_profile.profile.is_none());

    Ok(())
}
