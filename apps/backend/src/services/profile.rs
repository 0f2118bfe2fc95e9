use bookclub_api_types::Profile;

use crate::auth::Claims;
use crate::domain::DemoCatalog;

/// The demo profile, personalised with the caller's identity when a
/// verified token was presented.
pub fn profile_for(catalog: &DemoCatalog, claims: Option<&Claims>) -> Profile {
    let mut profile = catalog.profile.clone();
    if let Some(claims) = claims {
        if let Some(id) = claims.user_id() {
            profile.id = id;
        }
        profile.email = claims.email.clone();
    }
    profile
}
