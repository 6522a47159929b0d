//! Plausible random user data.

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use rand::Rng;
use users_shared::{api::CreateUserRequest, User, UserRole};
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Adrian", "Alice", "Amara", "Andre", "Beatrice", "Bennett", "Camila", "Carlos",
    "Chloe", "Darius", "Delia", "Elena", "Emmett", "Farah", "Felix", "Gemma", "Gideon", "Hana",
    "Hugo", "Imani", "Isaac", "Jasmine", "Jonah", "Keira", "Kenji", "Layla", "Leon", "Maya",
    "Milo", "Nadia", "Nolan", "Olive", "Omar", "Priya", "Quinn", "Rosa", "Rowan", "Sana",
    "Silas", "Talia", "Theo", "Uma", "Victor", "Willa", "Xavier", "Yara", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bauer", "Castillo", "Dalton", "Eriksen", "Fischer", "Garcia", "Hoffman",
    "Ibrahim", "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quigley", "Rossi", "Schmidt", "Tanaka", "Underwood", "Vasquez", "Whitaker", "Xu",
    "Yilmaz", "Zimmerman",
];

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "example.com",
    "example.org",
];

const AVATAR_BASE: &str = "https://avatars.githubusercontent.com/u";

/// Current time truncated to millisecond precision, matching what clients see on the wire.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Wire form of a timestamp: UTC with exactly three fractional digits,
/// e.g. `2024-05-01T10:00:00.000Z`.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

/// An address loosely derived from a name, e.g. `theo.rossi42@example.com`.
pub fn email<R: Rng + ?Sized>(rng: &mut R, first: &str, last: &str) -> String {
    let domain = pick(rng, EMAIL_DOMAINS);
    let local = match rng.gen_range(0..3) {
        0 => format!("{}.{}", first, last),
        1 => format!("{}_{}{}", first, last, rng.gen_range(1..100)),
        _ => format!("{}{}", first, rng.gen_range(10..10_000)),
    };
    format!("{}@{}", local.to_lowercase(), domain)
}

pub fn avatar<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}/{}", AVATAR_BASE, rng.gen_range(1..100_000_000u32))
}

pub fn role<R: Rng + ?Sized>(rng: &mut R) -> UserRole {
    *pick(rng, &UserRole::ALL)
}

/// A random instant within the last year.
pub fn past<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::milliseconds(rng.gen_range(1..=Duration::days(365).num_milliseconds()))
}

/// A random instant within the last day.
pub fn recent<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::milliseconds(rng.gen_range(1..=Duration::days(1).num_milliseconds()))
}

/// A fully synthesized user: every field random.
pub fn user<R: Rng + ?Sized>(rng: &mut R) -> User {
    let now = now();
    let first = first_name(rng);
    let last = last_name(rng);

    User {
        id: Uuid::new_v4(),
        email: email(rng, &first, &last),
        avatar: avatar(rng),
        role: role(rng),
        is_active: rng.gen_bool(0.8),
        created_at: timestamp(past(rng, now)),
        last_login_at: timestamp(recent(rng, now)),
        first_name: first,
        last_name: last,
    }
}

/// A user built from a create request. Supplied fields are kept as-is; missing
/// identity fields are synthesized while role, activity and timestamps fall back
/// to fixed defaults rather than random ones.
pub fn user_from_request<R: Rng + ?Sized>(rng: &mut R, req: CreateUserRequest) -> User {
    let now = timestamp(now());
    let first_name = req.first_name.unwrap_or_else(|| first_name(rng));
    let last_name = req.last_name.unwrap_or_else(|| last_name(rng));

    User {
        id: Uuid::new_v4(),
        email: req
            .email
            .unwrap_or_else(|| email(rng, &first_name, &last_name)),
        avatar: req.avatar.unwrap_or_else(|| avatar(rng)),
        role: req.role.unwrap_or_default(),
        is_active: req.is_active.unwrap_or(true),
        created_at: req.created_at.unwrap_or_else(|| now.clone()),
        last_login_at: req.last_login_at.unwrap_or(now),
        first_name,
        last_name,
    }
}

fn pick<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    // Every list above is a non-empty constant.
    &items[rng.gen_range(0..items.len())]
}
