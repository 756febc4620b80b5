//! Profile commands: register, show, log out.
//!
//! # Usage
//!
//! ```bash
//! lemon register -f Tilly -l Doe -e tilly@littlelemon.com
//! lemon profile
//! lemon logout
//! ```

use little_lemon_app::screens::{OnboardingForm, ProfileView, RegistrationOutcome};
use little_lemon_app::{Destination, Navigator, Result};

use super::{open_state, render};

/// Submit the onboarding form.
///
/// A blank field is reported but is not a command failure.
pub async fn register(first_name: String, last_name: String, email: String) -> Result<()> {
    let state = open_state().await?;

    let mut form = OnboardingForm::new();
    form.set_first_name(first_name);
    form.set_last_name(last_name);
    form.set_email(email);

    let outcome = form.register(state.profiles()).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", outcome.notice());
        match outcome {
            RegistrationOutcome::Registered(_) => println!("== {} ==", Destination::Home),
            RegistrationOutcome::Incomplete => print!("{}", render::onboarding(&form)),
        }
    }
    Ok(())
}

/// Render the profile screen.
pub async fn show() -> Result<()> {
    let state = open_state().await?;
    let view = ProfileView::load(state.profiles()).await?;

    #[allow(clippy::print_stdout)]
    {
        if view.profile.is_registered() {
            print!("{}", render::profile(&view.profile));
        } else {
            println!("No user registered.");
        }
    }
    Ok(())
}

/// Clear the profile and return to onboarding.
pub async fn logout() -> Result<()> {
    let state = open_state().await?;
    let mut view = ProfileView::load(state.profiles()).await?;
    let mut navigator = Navigator::new(Destination::Profile);
    view.logout(state.profiles(), &mut navigator).await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Logged out.");
        println!("== {} ==", navigator.current());
    }
    Ok(())
}
