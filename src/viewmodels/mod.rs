pub mod login_viewmodel;
pub mod home_viewmodel;

pub use login_viewmodel::{BrowserLoginViewModel, LoginViewModel, MountOutcome, SubmitOutcome};
pub use home_viewmodel::{mask_token, BrowserHomeViewModel, HomeViewModel};
