//! Plain-text rendering of the three screens.
//!
//! Renderers return strings so callers decide where output goes.

use std::fmt::Write as _;

use little_lemon_app::screens::home::{
    ORDER_HEADING, RESTAURANT_LOCATION, RESTAURANT_NAME, RESTAURANT_TAGLINE,
};
use little_lemon_app::screens::{MenuFilter, OnboardingForm, category_chips};
use little_lemon_core::{MenuItem, UserProfile};

/// Onboarding screen with the form's current contents.
#[must_use]
pub fn onboarding(form: &OnboardingForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Let's get to know you");
    let _ = writeln!(out);
    let _ = writeln!(out, "Personal information");
    let _ = writeln!(out, "  First name: {}", form.first_name());
    let _ = writeln!(out, "  Last name:  {}", form.last_name());
    let _ = writeln!(out, "  Email:      {}", form.email());
    if !form.email_valid() {
        let _ = writeln!(out, "              Invalid email");
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Register with: lemon register -f <first name> -l <last name> -e <email>"
    );
    out
}

/// Home screen: hero copy, search phrase, category chips and the menu list.
#[must_use]
pub fn home(filter: &MenuFilter, items: &[MenuItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RESTAURANT_NAME}");
    let _ = writeln!(out, "{RESTAURANT_LOCATION}");
    let _ = writeln!(out, "{RESTAURANT_TAGLINE}");
    let _ = writeln!(out);
    if !filter.search_phrase().is_empty() {
        let _ = writeln!(out, "Search: {}", filter.search_phrase());
    }
    let _ = writeln!(out, "{ORDER_HEADING}");

    let chips: Vec<String> = category_chips(filter)
        .into_iter()
        .map(|chip| {
            if chip.selected {
                format!("[{}]", chip.category)
            } else {
                chip.category.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", chips.join("  "));
    let _ = writeln!(out);

    if items.is_empty() {
        let _ = writeln!(out, "No menu items.");
    }
    for item in items {
        let _ = writeln!(out, "{}  {}", item.title, item.price);
        if !item.description.is_empty() {
            let _ = writeln!(out, "    {}", item.description);
        }
    }
    out
}

/// Profile screen.
#[must_use]
pub fn profile(profile: &UserProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Personal information");
    let _ = writeln!(out, "  First name: {}", profile.first_name);
    let _ = writeln!(out, "  Last name:  {}", profile.last_name);
    let _ = writeln!(out, "  Email:      {}", profile.email);
    out
}
