//! Mock sign-in / sign-up form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth screen is presentational: no credentials leave the page. The
//! form only tracks which mode is shown and whether the password is visible,
//! and derives its copy from the mode.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Which variant of the auth form is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Local auth form state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub show_password: bool,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn is_sign_in(&self) -> bool {
        self.mode == AuthMode::SignIn
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            AuthMode::SignIn => "Welcome back!",
            AuthMode::SignUp => "Join the Pack",
        }
    }

    pub fn subheading(&self) -> &'static str {
        match self.mode {
            AuthMode::SignIn => "Sign in to connect with your pet community",
            AuthMode::SignUp => "Create an account to start your journey",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    /// Prompt and link text for switching modes.
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self.mode {
            AuthMode::SignIn => ("Don't have an account?", "Sign up"),
            AuthMode::SignUp => ("Already have an account?", "Sign in"),
        }
    }
}
