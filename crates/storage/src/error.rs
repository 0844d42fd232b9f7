use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Cannot {action} event in status {from}; requires {required}")]
    InvalidTransition {
        action: &'static str,
        from: String,
        required: &'static str,
    },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Registration window is closed")]
    WindowClosed,

    #[error("Event has reached its participant limit")]
    EventFull,

    #[error("Class does not belong to this event")]
    InvalidClass,

    #[error("This event requires a vehicle to register")]
    VehicleRequired,

    #[error("Invalid {field} value in storage: {value}")]
    InvalidValue { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Remaps a unique-constraint violation to a conflict with the given
    /// message, leaving every other error untouched.
    pub fn or_conflict(self, message: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }
}
