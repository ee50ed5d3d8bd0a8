use crate::modules::users::core::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Body of a sign-up call. Field names follow the endpoint's camelCase wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: BTreeSet<Role>,
    pub first_name: String,
    pub last_name: String,
}
