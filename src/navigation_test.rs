//! Tests for activating controls of the rendered landing page.

use crate::content::{USERS_CONTROL_ID, WELCOME_ID};
use crate::layout::{Element, Tag, landing_page};
use crate::navigation::{MockNavigator, NavigationError, activate};

#[test]
fn activating_users_control_navigates_to_users_once() {
    let tree = landing_page();

    let mut navigator = MockNavigator::new();
    navigator
        .expect_navigate()
        .withf(|path| path == "/users")
        .times(1)
        .return_const(());

    activate(&tree, USERS_CONTROL_ID, &navigator).unwrap();
}

#[test]
fn each_activation_issues_its_own_request() {
    let tree = landing_page();

    let mut navigator = MockNavigator::new();
    navigator
        .expect_navigate()
        .withf(|path| path == "/users")
        .times(2)
        .return_const(());

    activate(&tree, USERS_CONTROL_ID, &navigator).unwrap();
    activate(&tree, USERS_CONTROL_ID, &navigator).unwrap();
}

#[test]
fn unknown_id_is_not_found() {
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().times(0);

    let err = activate(&landing_page(), "nope", &navigator).unwrap_err();
    assert_eq!(
        err,
        NavigationError::NotFound {
            id: "nope".to_string()
        }
    );
}

#[test]
fn welcome_block_does_not_navigate() {
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().times(0);

    let err = activate(&landing_page(), WELCOME_ID, &navigator).unwrap_err();
    assert_eq!(err.to_string(), "Element 'welcome' does not navigate");
}

#[test]
fn link_without_destination_is_rejected() {
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().times(0);

    let link = Element::new(Tag::Link).id("dangling");
    let err = link.activate(&navigator).unwrap_err();
    assert_eq!(
        err,
        NavigationError::MissingDestination {
            id: "dangling".to_string()
        }
    );
}

#[test]
fn not_found_error_displays_correctly() {
    let err = NavigationError::NotFound {
        id: "users-press-me".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "No element with id 'users-press-me' in the rendered tree"
    );
}

#[test]
fn one_click_issues_exactly_one_request() {
    let mut navigator = MockNavigator::new();
    navigator
        .expect_navigate()
        .withf(|path| path == "/users")
        .times(1)
        .return_const(());

    let tree = landing_page();
    let click = tree
        .find_by_id(USERS_CONTROL_ID)
        .unwrap()
        .click_handler(navigator);

    click().unwrap();
}

#[test]
fn repeated_clicks_issue_one_request_each() {
    let mut navigator = MockNavigator::new();
    navigator
        .expect_navigate()
        .withf(|path| path == "/users")
        .times(3)
        .return_const(());

    let click = landing_page()
        .find_by_id(USERS_CONTROL_ID)
        .unwrap()
        .click_handler(navigator);

    for _ in 0..3 {
        click().unwrap();
    }
}

#[test]
fn click_handler_outlives_the_rendered_tree() {
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().times(1).return_const(());

    let click = {
        let tree = landing_page();
        tree.find_by_id(USERS_CONTROL_ID)
            .unwrap()
            .click_handler(navigator)
    };

    click().unwrap();
}

#[test]
fn clicking_a_button_without_link_fails() {
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().times(0);

    let click = Element::new(Tag::Button).id("lonely").click_handler(navigator);
    assert_eq!(
        click().unwrap_err(),
        NavigationError::NotNavigable {
            id: "lonely".to_string()
        }
    );
}
