use crate::model::user::UserDto;

/// Signed-in user shared through context.
///
/// `fetched` flips to true once the first `/api/auth/user` request settles, so
/// protected layouts can tell "not signed in" apart from "not known yet".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

impl UserState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn is_approved(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_approved)
    }

    pub fn has_profile(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_profile)
    }
}
