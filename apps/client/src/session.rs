//! Session user mirrored into the local store.

use bookclub_api_types::User;
use tracing::warn;

use crate::storage::{keys, KeyValueStore, StoreError};

/// Stored user, if any. A corrupt entry is removed.
pub fn restore(store: &mut dyn KeyValueStore) -> Result<Option<User>, StoreError> {
    let Some(raw) = store.get(keys::USER) else {
        return Ok(None);
    };

    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Ok(Some(user)),
        Err(e) => {
            warn!(error = %e, "discarding corrupt stored session");
            store.remove(keys::USER)?;
            Ok(None)
        }
    }
}

pub fn persist(
    store: &mut dyn KeyValueStore,
    user: &User,
    token: Option<&str>,
) -> Result<(), StoreError> {
    store.set(keys::USER, &serde_json::to_string(user)?)?;
    if let Some(token) = token {
        store.set(keys::TOKEN, token)?;
    }
    Ok(())
}

pub fn token(store: &dyn KeyValueStore) -> Option<String> {
    store.get(keys::TOKEN)
}

pub fn clear(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(keys::USER)?;
    store.remove(keys::TOKEN)
}
