use campusfind_core::UserId;

/// Calling-user context for a request.
///
/// Identity is always caller-supplied (`X-User-Id` header) and threaded into
/// store operations explicitly; the store itself knows nothing about "the
/// current user".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UserContext {
    user_id: UserId,
}

impl UserContext {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
