use crate::modules::users::core::register_request::RegisterRequest;
use crate::modules::users::core::role::Role;
use crate::modules::users::use_cases::generate_user::generator::random_user;
use std::collections::BTreeSet;

/// Starts from a valid user and overrides single fields to exercise
/// validation-failure paths.
pub struct RegisterRequestBuilder {
    inner: RegisterRequest,
}

impl Default for RegisterRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterRequestBuilder {
    pub fn new() -> Self {
        Self::from_request(random_user())
    }

    pub fn from_request(request: RegisterRequest) -> Self {
        Self { inner: request }
    }

    pub fn username(mut self, v: impl Into<String>) -> Self {
        self.inner.username = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn roles(mut self, v: impl IntoIterator<Item = Role>) -> Self {
        self.inner.roles = v.into_iter().collect::<BTreeSet<_>>();
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn build(self) -> RegisterRequest {
        self.inner
    }
}
