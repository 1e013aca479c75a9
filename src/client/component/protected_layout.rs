use dioxus::prelude::*;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        router::Route,
        store::user::UserState,
    },
    model::user::UserDto,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Admin] }
    }
}

fn check_permissions(user: &Option<UserDto>, required_permissions: &[Permission]) -> bool {
    let user_data = match user {
        Some(u) => u,
        None => return false,
    };

    required_permissions.iter().all(|perm| match perm {
        Permission::LoggedIn => true,
        Permission::Admin => user_data.is_admin,
    })
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let user = user_state.read().user.clone();
    let fetch_completed = user_state.read().fetched;

    let user_logged_in = user.is_some();
    let has_required_permissions = check_permissions(&user, &permissions);

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You don't have permission to view this page" }
        } else if user_logged_in && has_required_permissions {
            Outlet::<Route> {}
        }
        // Not logged in: render nothing while the effect redirects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> Option<UserDto> {
        Some(UserDto {
            id: 1,
            email: "member@example.com".to_string(),
            name: None,
            image: None,
            is_admin,
            has_profile: true,
            is_approved: true,
        })
    }

    /// Tests that admin pages reject signed-in members without the admin flag.
    ///
    /// Expected: false for a member, true for an admin
    #[test]
    fn admin_permission_requires_flag() {
        assert!(!check_permissions(&user(false), &[Permission::Admin]));
        assert!(check_permissions(&user(true), &[Permission::Admin]));
    }

    /// Tests that no permission is granted without a user.
    ///
    /// Expected: false even for the logged-in check
    #[test]
    fn anonymous_has_no_permissions() {
        assert!(!check_permissions(&None, &[Permission::LoggedIn]));
    }
}
