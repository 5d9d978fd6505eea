// Shared literals

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/";

/// Path of the protected view reached after a successful login.
pub const HOME_PATH: &str = "/home";

pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const MSG_LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

pub const LABEL_LOGIN: &str = "Login";
pub const LABEL_LOGGING_IN: &str = "Logging in...";

/// Window event fired after the router pushed a new history entry.
pub const ROUTE_CHANGE_EVENT: &str = "routechange";

/// Id of the element the whole app renders into.
pub const APP_ROOT_ID: &str = "app";
