//! Registration, initial destination and logout.

use little_lemon_app::screens::{OnboardingForm, RegistrationOutcome};
use little_lemon_app::{Destination, LittleLemon};
use little_lemon_core::UserProfile;
use little_lemon_integration_tests::{FakeMenuSource, memory_state};

fn filled_form(first: &str, last: &str, email: &str) -> OnboardingForm {
    let mut form = OnboardingForm::new();
    form.set_first_name(first);
    form.set_last_name(last);
    form.set_email(email);
    form
}

// =============================================================================
// Initial destination
// =============================================================================

#[tokio::test]
async fn test_fresh_install_starts_at_onboarding() {
    let app = LittleLemon::launch(memory_state().await, FakeMenuSource::shared())
        .await
        .unwrap();
    assert_eq!(app.current(), Destination::Onboarding);
}

#[tokio::test]
async fn test_registered_user_starts_at_home() {
    let state = memory_state().await;
    state
        .profiles()
        .save(&UserProfile::new("Tilly", "Doe", "tilly@littlelemon.com"))
        .await
        .unwrap();

    let app = LittleLemon::launch(state, FakeMenuSource::shared())
        .await
        .unwrap();
    assert_eq!(app.current(), Destination::Home);
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_complete_registration_persists_and_navigates_home() {
    let state = memory_state().await;
    let mut app = LittleLemon::launch(state.clone(), FakeMenuSource::shared())
        .await
        .unwrap();

    let form = filled_form("Tilly", "Doe", "tilly@littlelemon.com");
    let outcome = app.register(&form).await.unwrap();

    let expected = UserProfile::new("Tilly", "Doe", "tilly@littlelemon.com");
    assert_eq!(outcome, RegistrationOutcome::Registered(expected.clone()));
    assert_eq!(outcome.notice(), "Registration successful!");
    assert_eq!(state.profiles().load().await.unwrap(), expected);
    assert_eq!(app.current(), Destination::Home);
}

#[tokio::test]
async fn test_blank_field_leaves_profile_and_route_unchanged() {
    let state = memory_state().await;
    let mut app = LittleLemon::launch(state.clone(), FakeMenuSource::shared())
        .await
        .unwrap();

    for form in [
        filled_form("", "Doe", "tilly@littlelemon.com"),
        filled_form("Tilly", "  ", "tilly@littlelemon.com"),
        filled_form("Tilly", "Doe", ""),
    ] {
        let outcome = app.register(&form).await.unwrap();
        assert_eq!(outcome, RegistrationOutcome::Incomplete);
        assert_eq!(
            outcome.notice(),
            "Registration unsuccessful. Please enter all data."
        );
    }

    assert_eq!(state.profiles().load().await.unwrap(), UserProfile::default());
    assert_eq!(app.current(), Destination::Onboarding);
    assert_eq!(app.navigator().stack(), &[Destination::Onboarding]);
}

#[tokio::test]
async fn test_blank_field_keeps_previously_stored_profile() {
    let state = memory_state().await;
    let stored = UserProfile::new("Tilly", "Doe", "tilly@littlelemon.com");
    state.profiles().save(&stored).await.unwrap();

    let mut app = LittleLemon::launch(state.clone(), FakeMenuSource::shared())
        .await
        .unwrap();
    let outcome = app
        .register(&filled_form("Adrian", "", "adrian@littlelemon.com"))
        .await
        .unwrap();

    assert_eq!(outcome, RegistrationOutcome::Incomplete);
    assert_eq!(state.profiles().load().await.unwrap(), stored);
    assert!(state.profiles().has_registered_user().await.unwrap());
    assert_eq!(app.current(), Destination::Home);
}

#[tokio::test]
async fn test_invalid_email_is_flagged_but_still_registers() {
    let state = memory_state().await;
    let mut app = LittleLemon::launch(state.clone(), FakeMenuSource::shared())
        .await
        .unwrap();

    let mut form = filled_form("Tilly", "Doe", "tilly");
    assert!(!form.email_valid());

    // Further edits are still accepted while invalid
    form.set_email("tilly@lemon");
    assert_eq!(form.email(), "tilly@lemon");
    assert!(!form.email_valid());

    let outcome = app.register(&form).await.unwrap();
    assert!(matches!(outcome, RegistrationOutcome::Registered(_)));
    assert_eq!(state.profiles().load().await.unwrap().email, "tilly@lemon");
}

// =============================================================================
// Profile and logout
// =============================================================================

#[tokio::test]
async fn test_profile_screen_shows_stored_values() {
    let mut app = LittleLemon::launch(memory_state().await, FakeMenuSource::shared())
        .await
        .unwrap();
    app.register(&filled_form("Tilly", "Doe", "tilly@littlelemon.com"))
        .await
        .unwrap();

    let view = app.open_profile().await.unwrap();
    assert_eq!(app.current(), Destination::Profile);
    assert_eq!(view.profile.first_name, "Tilly");
    assert_eq!(view.profile.last_name, "Doe");
    assert_eq!(view.profile.email, "tilly@littlelemon.com");

    assert!(app.back());
    assert_eq!(app.current(), Destination::Home);
}

#[tokio::test]
async fn test_logout_clears_profile_without_back_navigation() {
    let state = memory_state().await;
    let mut app = LittleLemon::launch(state.clone(), FakeMenuSource::shared())
        .await
        .unwrap();
    app.register(&filled_form("Tilly", "Doe", "tilly@littlelemon.com"))
        .await
        .unwrap();
    app.open_profile().await.unwrap();

    app.logout().await.unwrap();

    assert_eq!(state.profiles().load().await.unwrap(), UserProfile::default());
    assert!(!state.profiles().has_registered_user().await.unwrap());
    assert_eq!(app.current(), Destination::Onboarding);
    assert!(!app.back());
    assert_eq!(app.current(), Destination::Onboarding);
}
