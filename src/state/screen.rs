//! Screen-specific state management.
//!
//! One enum holds the controller of the view currently shown, so a screen's
//! local state exists only while that screen is mounted.

use crate::screens::{
    AuthChoiceScreen, DashboardScreen, OnboardingScreen, Screen, SignInScreen, SignUpScreen,
};
use crate::state::navigation::ViewState;

/// Union type for all screen controllers.
///
/// Switching views replaces the whole value. The form screens are boxed to
/// keep the enum small.
///
/// # Example
///
/// ```rust,ignore
/// match &mut session.screen {
///     ScreenState::SignUp(screen) => {
///         // Access the sign-up form exclusively
///         let draft = screen.draft();
///     }
///     _ => {}
/// }
/// ```
pub enum ScreenState {
    Onboarding(OnboardingScreen),
    AuthChoice(AuthChoiceScreen),
    SignUp(Box<SignUpScreen>),
    SignIn(Box<SignInScreen>),
    Dashboard(DashboardScreen),
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Onboarding(OnboardingScreen::new())
    }
}

impl ScreenState {
    /// Fresh controller for `view`.
    pub fn for_view(view: ViewState) -> Self {
        match view {
            ViewState::Onboarding => Self::Onboarding(OnboardingScreen::new()),
            ViewState::AuthChoice => Self::AuthChoice(AuthChoiceScreen::new()),
            ViewState::SignUp => Self::SignUp(Box::new(SignUpScreen::new())),
            ViewState::SignIn => Self::SignIn(Box::new(SignInScreen::new())),
            ViewState::Dashboard => Self::Dashboard(DashboardScreen::new()),
        }
    }

    /// View this controller draws.
    pub fn current_view(&self) -> ViewState {
        match self {
            Self::Onboarding(_) => ViewState::Onboarding,
            Self::AuthChoice(_) => ViewState::AuthChoice,
            Self::SignUp(_) => ViewState::SignUp,
            Self::SignIn(_) => ViewState::SignIn,
            Self::Dashboard(_) => ViewState::Dashboard,
        }
    }

    pub fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Onboarding(screen) => screen,
            Self::AuthChoice(screen) => screen,
            Self::SignUp(screen) => screen.as_ref(),
            Self::SignIn(screen) => screen.as_ref(),
            Self::Dashboard(screen) => screen,
        }
    }

    pub fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Onboarding(screen) => screen,
            Self::AuthChoice(screen) => screen,
            Self::SignUp(screen) => screen.as_mut(),
            Self::SignIn(screen) => screen.as_mut(),
            Self::Dashboard(screen) => screen,
        }
    }

    pub fn sign_up(&self) -> Option<&SignUpScreen> {
        match self {
            Self::SignUp(screen) => Some(screen.as_ref()),
            _ => None,
        }
    }

    pub fn sign_in(&self) -> Option<&SignInScreen> {
        match self {
            Self::SignIn(screen) => Some(screen.as_ref()),
            _ => None,
        }
    }

    pub fn auth_choice(&self) -> Option<&AuthChoiceScreen> {
        match self {
            Self::AuthChoice(screen) => Some(screen),
            _ => None,
        }
    }
}
