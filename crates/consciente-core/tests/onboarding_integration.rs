//! Integration tests for sign-in gating.

use consciente_core::onboarding::{add_custom_action, current_user, sign_in, sign_out, SignInMethod};
use consciente_core::Store;

#[test]
fn sign_in_replaces_previous_profile() {
    let store = Store::open_memory().unwrap();
    sign_in(&store, "Ana", SignInMethod::Guest).unwrap();
    add_custom_action(&store, "Yoga").unwrap();

    let profile = sign_in(&store, "Luis", SignInMethod::Email("luis@example.com".into())).unwrap();
    assert!(profile.custom_actions.is_empty());
    assert_eq!(current_user(&store).unwrap().name, "Luis");
}

#[test]
fn sign_out_leaves_other_data_alone() {
    let store = Store::open_memory().unwrap();
    sign_in(&store, "Ana", SignInMethod::Guest).unwrap();
    store.save_alarms(&[consciente_core::Alarm::new("08:00", "x")]).unwrap();

    sign_out(&store).unwrap();
    assert!(current_user(&store).is_none());
    assert_eq!(store.alarms().len(), 1);
}
