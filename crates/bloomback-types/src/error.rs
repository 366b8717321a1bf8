use thiserror::Error;

/// Broad classification of storage failures, assigned where the underlying
/// store error is still visible. Each kind carries its own user-facing hint
/// so no caller ever inspects provider error strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// A required table is missing (schema never migrated).
    SchemaMissing,
    /// The store refused the operation (permissions, read-only database).
    AccessDenied,
    /// Anything else: store unreachable, disk full, corruption.
    Unavailable,
}

impl StorageKind {
    pub fn user_hint(&self) -> &'static str {
        match self {
            StorageKind::SchemaMissing => {
                "Database not set up. Run the migration before starting the server."
            }
            StorageKind::AccessDenied => {
                "Permission denied by the storage layer. Check database file permissions."
            }
            StorageKind::Unavailable => "Storage is unavailable. Please try again.",
        }
    }
}

/// Every failure the data-access and domain layers can surface. Terminal for
/// the request that hit it: nothing here is retried.
#[derive(Debug, Error)]
pub enum BloomError {
    #[error("not logged in")]
    Unauthenticated,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    #[error("bloom not found")]
    NotFound,

    #[error("email already registered")]
    EmailTaken,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email confirmation pending")]
    ConfirmationPending,

    #[error("tree seed out of range")]
    SeedOutOfRange,

    #[error("storage failure")]
    Storage(StorageKind),
}

impl BloomError {
    /// The message shown to the user, decoupled from any provider's wording.
    pub fn user_message(&self) -> &'static str {
        match self {
            BloomError::Unauthenticated => "Please log in to save your bloom.",
            BloomError::MissingField(_) => "Please fill in all required fields.",
            BloomError::InvalidField(_) => "Please check the highlighted field.",
            BloomError::NotFound => "Bloom not found.",
            BloomError::EmailTaken => "That email is already registered.",
            BloomError::InvalidCredentials => "Invalid email or password.",
            BloomError::ConfirmationPending => {
                "Check your inbox and confirm your email before logging in."
            }
            BloomError::SeedOutOfRange => "This bloom's tree seed is invalid.",
            BloomError::Storage(kind) => kind.user_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_kinds_carry_distinct_hints() {
        let hints = [
            StorageKind::SchemaMissing.user_hint(),
            StorageKind::AccessDenied.user_hint(),
            StorageKind::Unavailable.user_hint(),
        ];
        assert_ne!(hints[0], hints[1]);
        assert_ne!(hints[1], hints[2]);
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = BloomError::MissingField("recipientName");
        assert_eq!(err.to_string(), "missing required field: recipientName");
    }
}
