//! Product copy, element identifiers and route paths for the landing page.

/// Primary welcome heading.
pub const WELCOME_HEADING: &str = "Welcome to the Brain Project!";

/// Secondary heading, rendered as two lines separated by a line break.
pub const DESCRIPTION_LINES: [&str; 2] = [
    "Here you can see all the users,",
    "their snapshots, and parsing results.",
];

/// Label of the button that leads to the users view.
pub const VIEW_USERS_LABEL: &str = "View users";

/// Line breaks between the welcome heading and the description.
pub const HEADING_SPACER_BREAKS: usize = 3;

// Identifiers targeted by automation harnesses.
pub const WELCOME_ID: &str = "welcome";
pub const USERS_CONTROL_ID: &str = "users-press-me";

// Stylesheet class names, resolved by `landing-page.css`.
pub const ROOT_CLASS: &str = "landing-page";
pub const BUTTON_CLASSES: [&str; 3] = ["btn", "aqua-gradient", "btn-lg"];

/// Href of the stylesheet attached by the landing page.
pub const STYLESHEET_HREF: &str = "/css/landing-page.css";

// Route paths, and the router segments registering them.
pub const LANDING_PATH: &str = "/";
pub const LANDING_SEGMENT: &str = "";
pub const USERS_PATH: &str = "/users";
pub const USERS_SEGMENT: &str = "users";
