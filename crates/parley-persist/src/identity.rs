/// Derive a user id from an email address.
///
/// The mapping trims surrounding whitespace and replaces every `@` and `.`
/// with `_`, so `a@x.com` becomes `a_x_com`. It is stable for the same
/// email but not reversible, and two distinct emails that differ only in
/// those characters collide (`a.b@c.com` and `a_b@c_com` both map to
/// `a_b_c_com`).
pub fn user_id_from_email(email: &str) -> String {
    email.trim().replace(['@', '.'], "_")
}

/// Display name used when a user logs in without one: the local part of the
/// email.
pub fn default_display_name(email: &str) -> String {
    let email = email.trim();
    email.split('@').next().unwrap_or(email).to_string()
}
