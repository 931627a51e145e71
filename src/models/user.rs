/// Represents a user account.
#[derive(Clone, Debug)]
pub struct User {
    /// The unique identifier for the user.
    pub id: i64,
    /// The user's username.
    pub username: String,
    /// The derived secret stored in place of the plaintext password.
    pub password: String,
}
