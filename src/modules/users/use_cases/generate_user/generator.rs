use crate::modules::users::core::register_request::RegisterRequest;
use crate::modules::users::core::role::Role;
use fake::Fake;
use fake::faker::internet::en::{FreeEmailProvider, Password};
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;
use rand::distr::{Alphanumeric, Distribution};
use std::collections::BTreeSet;

pub const MIN_USERNAME_LENGTH: usize = 4;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_NAME_LENGTH: usize = 4;

const USERNAME_SUFFIX_LENGTH: usize = 6;
const PASSWORD_LENGTH: std::ops::Range<usize> = 12..20;

/// Random user accepted by the sign-up endpoint's validation rules.
pub fn random_user() -> RegisterRequest {
    random_user_with(&mut rand::rng())
}

pub fn random_user_with<R: Rng>(rng: &mut R) -> RegisterRequest {
    let first_name = name(rng, |rng| FirstName().fake_with_rng(rng));
    let last_name = name(rng, |rng| LastName().fake_with_rng(rng));
    let username = format!("{}{}", first_name.to_lowercase(), suffix(rng));
    let provider: String = FreeEmailProvider().fake_with_rng(rng);

    RegisterRequest {
        email: format!("{username}@{provider}"),
        username,
        password: Password(PASSWORD_LENGTH).fake_with_rng(rng),
        roles: roles(rng),
        first_name,
        last_name,
    }
}

// Faker pools contain short and punctuated names ("Al", "O'Kon"); redraw until one fits.
fn name<R: Rng>(rng: &mut R, draw: impl Fn(&mut R) -> String) -> String {
    loop {
        let candidate = draw(rng);
        if candidate.chars().count() >= MIN_NAME_LENGTH
            && candidate.chars().all(char::is_alphabetic)
        {
            return candidate;
        }
    }
}

fn suffix<R: Rng>(rng: &mut R) -> String {
    (0..USERNAME_SUFFIX_LENGTH)
        .map(|_| char::from(Alphanumeric.sample(rng)).to_ascii_lowercase())
        .collect()
}

fn roles<R: Rng>(rng: &mut R) -> BTreeSet<Role> {
    match rng.random_range(0..3) {
        0 => BTreeSet::from([Role::Admin]),
        1 => BTreeSet::from([Role::Client]),
        _ => BTreeSet::from(Role::ALL),
    }
}
