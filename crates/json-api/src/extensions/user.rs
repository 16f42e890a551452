//! Authenticated user depot helpers.

use pantry_app::domain::users::records::UserUuid;
use salvo::prelude::{Depot, StatusError};

pub(crate) trait UserDepotExt {
    fn insert_user_uuid(&mut self, user: UserUuid);

    /// The authenticated user, or `None` for anonymous requests.
    fn user_uuid(&self) -> Option<UserUuid>;

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl UserDepotExt for Depot {
    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.inject(user);
    }

    fn user_uuid(&self) -> Option<UserUuid> {
        self.obtain::<UserUuid>().ok().copied()
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.user_uuid().ok_or_else(|| {
            StatusError::unauthorized().brief("Authentication credentials were not provided")
        })
    }
}
