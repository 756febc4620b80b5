//! Profile screen: shows the stored profile and logs out.

use little_lemon_core::UserProfile;

use crate::db::{ProfileStore, RepositoryError};
use crate::navigation::{Destination, Navigator};

/// Editable copy of the stored profile.
///
/// Edits stay local to the screen and are never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileView {
    pub profile: UserProfile,
}

impl ProfileView {
    /// Load the stored profile into the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store read fails.
    pub async fn load(profiles: &ProfileStore) -> Result<Self, RepositoryError> {
        Ok(Self {
            profile: profiles.load().await?,
        })
    }

    /// Clear the stored profile and restart navigation at Onboarding.
    ///
    /// # Errors
    ///
    /// Returns an error if clearing the store fails; navigation is left
    /// untouched in that case.
    pub async fn logout(
        &mut self,
        profiles: &ProfileStore,
        navigator: &mut Navigator,
    ) -> Result<(), RepositoryError> {
        profiles.clear().await?;
        self.profile = UserProfile::default();
        navigator.reset_to(Destination::Onboarding);
        tracing::info!("User logged out");
        Ok(())
    }
}
