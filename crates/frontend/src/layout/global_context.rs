use contracts::enums::user_role::UserRole;
use leptos::prelude::*;

/// App-wide UI state shared by the shell and the pages.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    /// Role whose dashboard the sidebar shows. Authentication is handled by
    /// the backend; the UI only switches views.
    pub role: RwSignal<UserRole>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            role: RwSignal::new(UserRole::Admin),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn set_role(&self, role: UserRole) {
        if self.role.get_untracked() != role {
            log::debug!("switching dashboard role to {}", role.code());
            self.role.set(role);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
