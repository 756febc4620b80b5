//! A running app: shared state, the navigator and the startup sync.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use little_lemon_core::MenuItem;

use crate::error::Result;
use crate::navigation::{Destination, Navigator};
use crate::remote::MenuSource;
use crate::screens::{MenuFilter, OnboardingForm, ProfileView, RegistrationOutcome};
use crate::state::AppState;
use crate::sync::SyncOutcome;

/// Drives the three screens over one [`AppState`].
pub struct LittleLemon {
    state: AppState,
    navigator: Navigator,
    sync: Option<JoinHandle<Result<SyncOutcome>>>,
}

impl LittleLemon {
    /// Start the app: spawn the one-shot menu sync and pick the first screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store cannot be read.
    pub async fn launch(state: AppState, source: Arc<dyn MenuSource>) -> Result<Self> {
        let sync = state.sync().spawn(state.menu().clone(), source);

        let registered = state.profiles().has_registered_user().await?;
        let start = Destination::initial(registered);
        tracing::info!(route = %start, "Initial destination");

        Ok(Self {
            state,
            navigator: Navigator::new(start),
            sync,
        })
    }

    /// Wait for the startup sync, if this session launched one.
    ///
    /// # Errors
    ///
    /// Returns the sync's error, or `AppError::SyncTask` if the task died.
    pub async fn wait_for_sync(&mut self) -> Result<Option<SyncOutcome>> {
        match self.sync.take() {
            Some(handle) => Ok(Some(handle.await??)),
            None => Ok(None),
        }
    }

    #[must_use]
    pub fn current(&self) -> Destination {
        self.navigator.current()
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Submit the onboarding form; navigates to Home on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store write fails.
    pub async fn register(&mut self, form: &OnboardingForm) -> Result<RegistrationOutcome> {
        let outcome = form.register(self.state.profiles()).await?;
        if matches!(outcome, RegistrationOutcome::Registered(_)) {
            self.navigator.navigate(Destination::Home);
        }
        Ok(outcome)
    }

    /// Observe the menu rows for the home screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the item store read fails.
    pub async fn menu_items(&self) -> Result<watch::Receiver<Vec<MenuItem>>> {
        Ok(self.state.menu().get_all().await?)
    }

    /// Current rows passing `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the item store read fails.
    pub async fn visible_items(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>> {
        let items = self.state.menu().fetch_all().await?;
        Ok(filter.apply(&items).into_iter().cloned().collect())
    }

    /// Open the profile screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store read fails.
    pub async fn open_profile(&mut self) -> Result<ProfileView> {
        let view = ProfileView::load(self.state.profiles()).await?;
        self.navigator.navigate(Destination::Profile);
        Ok(view)
    }

    /// Clear the profile and return to Onboarding with an empty back stack.
    ///
    /// # Errors
    ///
    /// Returns an error if clearing the profile store fails.
    pub async fn logout(&mut self) -> Result<()> {
        let mut view = ProfileView::load(self.state.profiles()).await?;
        view.logout(self.state.profiles(), &mut self.navigator).await?;
        Ok(())
    }

    /// Go back one screen; `false` if already at the root.
    pub fn back(&mut self) -> bool {
        self.navigator.back()
    }
}
