//! Navigation controller.
//!
//! [`Navigator`] is the single owner of the active view, the onboarding slide
//! index and the signed-in user. Screens never write any of these directly;
//! they hand a [`Trigger`] to [`Navigator::dispatch`], which applies the
//! transition table below or ignores the trigger.
//!
//! ```text
//! Onboarding --advance/retreat--> Onboarding   (slide 0..=2)
//! Onboarding --complete---------> AuthChoice   (last slide only)
//! AuthChoice --choose sign up---> SignUp
//! AuthChoice --choose sign in---> SignIn
//! SignUp     <--switch mode-----> SignIn
//! SignUp     --back-------------> AuthChoice
//! SignIn     --back-------------> AuthChoice
//! SignUp     --submit success---> Dashboard    (user = draft name/email)
//! SignIn     --submit success---> Dashboard    (user = "User"/draft email)
//! Dashboard  --sign out---------> AuthChoice   (user cleared)
//! ```

use crate::catalog::LAST_SLIDE;
use crate::forms::{SignInDraft, SignUpDraft};
use std::fmt;
use tracing::{debug, info};

/// Display name given to users who sign in without a stored profile.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// The screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    Onboarding,
    AuthChoice,
    SignUp,
    SignIn,
    Dashboard,
}

impl ViewState {
    pub const ALL: [ViewState; 5] = [
        ViewState::Onboarding,
        ViewState::AuthChoice,
        ViewState::SignUp,
        ViewState::SignIn,
        ViewState::Dashboard,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Onboarding => "Welcome",
            ViewState::AuthChoice => "Get Started",
            ViewState::SignUp => "Create Account",
            ViewState::SignIn => "Welcome Back",
            ViewState::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewState::Onboarding => "onboarding",
            ViewState::AuthChoice => "auth-choice",
            ViewState::SignUp => "signup",
            ViewState::SignIn => "signin",
            ViewState::Dashboard => "dashboard",
        };
        f.write_str(name)
    }
}

/// Minimal identity established by a successful sign-up or sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

impl UserRecord {
    /// Name to greet the user with, falling back to a generic one.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            DEFAULT_DISPLAY_NAME
        } else {
            &self.name
        }
    }
}

/// Data carried by a successful form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    SignUp(SignUpDraft),
    SignIn(SignInDraft),
}

/// A request to change navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Next onboarding slide.
    Advance,
    /// Previous onboarding slide.
    Retreat,
    /// Leave onboarding from the last slide.
    Complete,
    ChooseSignUp,
    ChooseSignIn,
    SubmitSuccess(Credentials),
    /// Return from a form to the sign-up/sign-in choice.
    Back,
    /// Swap between the sign-up and sign-in forms.
    SwitchMode,
    SignOut,
}

impl Trigger {
    /// Short name for logs, without the payload.
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::Advance => "advance",
            Trigger::Retreat => "retreat",
            Trigger::Complete => "complete",
            Trigger::ChooseSignUp => "choose_sign_up",
            Trigger::ChooseSignIn => "choose_sign_in",
            Trigger::SubmitSuccess(_) => "submit_success",
            Trigger::Back => "back",
            Trigger::SwitchMode => "switch_mode",
            Trigger::SignOut => "sign_out",
        }
    }
}

/// Owner of the view state, slide index and user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    view: ViewState,
    slide: usize,
    user: Option<UserRecord>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            view: ViewState::Onboarding,
            slide: 0,
            user: None,
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Current onboarding slide. `None` outside of onboarding.
    pub fn current_slide(&self) -> Option<usize> {
        (self.view == ViewState::Onboarding).then_some(self.slide)
    }

    pub fn is_first_slide(&self) -> bool {
        self.current_slide() == Some(0)
    }

    pub fn is_last_slide(&self) -> bool {
        self.current_slide() == Some(LAST_SLIDE)
    }

    /// Signed-in user. Present exactly while the dashboard is shown.
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// Apply a trigger. Triggers that are not valid for the current view,
    /// or whose guard fails, leave the state untouched.
    pub fn dispatch(&mut self, trigger: Trigger) {
        let from = self.view;
        let name = trigger.name();

        let applied = match (self.view, trigger) {
            (ViewState::Onboarding, Trigger::Advance) if self.slide < LAST_SLIDE => {
                self.slide += 1;
                true
            }
            (ViewState::Onboarding, Trigger::Retreat) if self.slide > 0 => {
                self.slide -= 1;
                true
            }
            (ViewState::Onboarding, Trigger::Complete) if self.slide == LAST_SLIDE => {
                self.view = ViewState::AuthChoice;
                true
            }
            (ViewState::AuthChoice, Trigger::ChooseSignUp) => {
                self.view = ViewState::SignUp;
                true
            }
            (ViewState::AuthChoice, Trigger::ChooseSignIn) => {
                self.view = ViewState::SignIn;
                true
            }
            (ViewState::SignUp, Trigger::SubmitSuccess(Credentials::SignUp(draft))) => {
                self.sign_in_as(UserRecord {
                    name: draft.name,
                    email: draft.email,
                });
                true
            }
            (ViewState::SignIn, Trigger::SubmitSuccess(Credentials::SignIn(draft))) => {
                self.sign_in_as(UserRecord {
                    name: DEFAULT_DISPLAY_NAME.to_string(),
                    email: draft.email,
                });
                true
            }
            (ViewState::SignUp | ViewState::SignIn, Trigger::Back) => {
                self.view = ViewState::AuthChoice;
                true
            }
            (ViewState::SignUp, Trigger::SwitchMode) => {
                self.view = ViewState::SignIn;
                true
            }
            (ViewState::SignIn, Trigger::SwitchMode) => {
                self.view = ViewState::SignUp;
                true
            }
            (ViewState::Dashboard, Trigger::SignOut) => {
                self.user = None;
                self.view = ViewState::AuthChoice;
                true
            }
            _ => false,
        };

        if !applied {
            debug!(view = %from, trigger = name, "Ignoring trigger");
        } else if from == ViewState::Onboarding && self.view == ViewState::Onboarding {
            debug!(trigger = name, slide = self.slide, "Onboarding slide changed");
        } else {
            info!(from = %from, to = %self.view, trigger = name, "Navigated");
        }
    }

    // User and view are written together so the user record is never
    // visible outside the dashboard.
    fn sign_in_as(&mut self, user: UserRecord) {
        self.user = Some(user);
        self.view = ViewState::Dashboard;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Gender;

    fn sign_up_draft() -> SignUpDraft {
        SignUpDraft {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            gender: Some(Gender::Female),
            height: "165cm".to_string(),
            weight: "58kg".to_string(),
            photo: None,
        }
    }

    fn sign_in_draft() -> SignInDraft {
        SignInDraft {
            email: "b@x.com".to_string(),
            password: "p".to_string(),
        }
    }

    fn all_triggers() -> Vec<Trigger> {
        vec![
            Trigger::Advance,
            Trigger::Retreat,
            Trigger::Complete,
            Trigger::ChooseSignUp,
            Trigger::ChooseSignIn,
            Trigger::SubmitSuccess(Credentials::SignUp(sign_up_draft())),
            Trigger::SubmitSuccess(Credentials::SignIn(sign_in_draft())),
            Trigger::Back,
            Trigger::SwitchMode,
            Trigger::SignOut,
        ]
    }

    fn at_auth_choice() -> Navigator {
        let mut nav = Navigator::new();
        nav.dispatch(Trigger::Advance);
        nav.dispatch(Trigger::Advance);
        nav.dispatch(Trigger::Complete);
        nav
    }

    fn assert_invariants(nav: &Navigator) {
        assert!(nav.slide <= LAST_SLIDE);
        assert_eq!(nav.user().is_some(), nav.view() == ViewState::Dashboard);
        assert_eq!(nav.current_slide().is_some(), nav.view() == ViewState::Onboarding);
    }

    #[test]
    fn test_starts_on_first_slide() {
        let nav = Navigator::new();
        assert_eq!(nav.view(), ViewState::Onboarding);
        assert_eq!(nav.current_slide(), Some(0));
        assert!(nav.is_first_slide());
        assert!(nav.user().is_none());
    }

    #[test]
    fn test_onboarding_to_auth_choice() {
        let nav = at_auth_choice();
        assert_eq!(nav.view(), ViewState::AuthChoice);
        assert_eq!(nav.current_slide(), None);
    }

    #[test]
    fn test_retreat_on_first_slide_is_ignored() {
        let mut nav = Navigator::new();
        nav.dispatch(Trigger::Retreat);
        assert_eq!(nav.current_slide(), Some(0));
        assert_eq!(nav.view(), ViewState::Onboarding);
    }

    #[test]
    fn test_advance_stops_at_last_slide() {
        let mut nav = Navigator::new();
        for _ in 0..5 {
            nav.dispatch(Trigger::Advance);
        }
        assert_eq!(nav.current_slide(), Some(LAST_SLIDE));
        assert!(nav.is_last_slide());
    }

    #[test]
    fn test_complete_before_last_slide_is_ignored() {
        let mut nav = Navigator::new();
        nav.dispatch(Trigger::Advance);
        nav.dispatch(Trigger::Complete);
        assert_eq!(nav.view(), ViewState::Onboarding);
        assert_eq!(nav.current_slide(), Some(1));
    }

    #[test]
    fn test_sign_up_sets_user_from_draft() {
        let mut nav = at_auth_choice();
        nav.dispatch(Trigger::ChooseSignUp);
        nav.dispatch(Trigger::SubmitSuccess(Credentials::SignUp(sign_up_draft())));
        assert_eq!(nav.view(), ViewState::Dashboard);
        assert_eq!(
            nav.user(),
            Some(&UserRecord {
                name: "Ana".to_string(),
                email: "a@x.com".to_string()
            })
        );
    }

    #[test]
    fn test_sign_in_uses_default_name() {
        let mut nav = at_auth_choice();
        nav.dispatch(Trigger::ChooseSignIn);
        nav.dispatch(Trigger::SubmitSuccess(Credentials::SignIn(sign_in_draft())));
        assert_eq!(nav.view(), ViewState::Dashboard);
        let user = nav.user().unwrap();
        assert_eq!(user.name, "User");
        assert_eq!(user.email, "b@x.com");
    }

    #[test]
    fn test_mismatched_credentials_are_ignored() {
        let mut nav = at_auth_choice();
        nav.dispatch(Trigger::ChooseSignIn);
        nav.dispatch(Trigger::SubmitSuccess(Credentials::SignUp(sign_up_draft())));
        assert_eq!(nav.view(), ViewState::SignIn);
        assert!(nav.user().is_none());
    }

    #[test]
    fn test_sign_out_clears_user() {
        let mut nav = at_auth_choice();
        nav.dispatch(Trigger::ChooseSignIn);
        nav.dispatch(Trigger::SubmitSuccess(Credentials::SignIn(sign_in_draft())));
        nav.dispatch(Trigger::SignOut);
        assert_eq!(nav.view(), ViewState::AuthChoice);
        assert!(nav.user().is_none());

        // Second sign-out is a no-op
        nav.dispatch(Trigger::SignOut);
        assert_eq!(nav.view(), ViewState::AuthChoice);
        assert!(nav.user().is_none());
    }

    #[test]
    fn test_switch_mode_and_back() {
        let mut nav = at_auth_choice();
        nav.dispatch(Trigger::ChooseSignUp);
        nav.dispatch(Trigger::SwitchMode);
        assert_eq!(nav.view(), ViewState::SignIn);
        nav.dispatch(Trigger::SwitchMode);
        assert_eq!(nav.view(), ViewState::SignUp);
        nav.dispatch(Trigger::Back);
        assert_eq!(nav.view(), ViewState::AuthChoice);
        assert!(nav.user().is_none());
    }

    #[test]
    fn test_out_of_state_triggers_are_noops() {
        let mut nav = Navigator::new();
        let before = nav.clone();
        for trigger in [
            Trigger::ChooseSignUp,
            Trigger::Back,
            Trigger::SwitchMode,
            Trigger::SignOut,
            Trigger::SubmitSuccess(Credentials::SignIn(sign_in_draft())),
        ] {
            nav.dispatch(trigger);
        }
        assert_eq!(nav, before);
    }

    #[test]
    fn test_display_name_fallback() {
        let user = UserRecord {
            name: "  ".to_string(),
            email: "c@x.com".to_string(),
        };
        assert_eq!(user.display_name(), "User");
    }

    /// Walk every trigger sequence up to length 5 from the initial state and
    /// check the invariants after each step.
    #[test]
    fn test_invariants_hold_for_all_short_sequences() {
        let triggers = all_triggers();
        let mut frontier = vec![Navigator::new()];
        for _ in 0..5 {
            let mut next = Vec::new();
            for nav in &frontier {
                for trigger in &triggers {
                    let mut stepped = nav.clone();
                    stepped.dispatch(trigger.clone());
                    assert_invariants(&stepped);
                    if !next.contains(&stepped) {
                        next.push(stepped);
                    }
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn test_switch_mode_never_touches_user_or_slide() {
        for start in [ViewState::SignUp, ViewState::SignIn] {
            let mut nav = at_auth_choice();
            nav.dispatch(if start == ViewState::SignUp {
                Trigger::ChooseSignUp
            } else {
                Trigger::ChooseSignIn
            });
            let slide_before = nav.slide;
            nav.dispatch(Trigger::SwitchMode);
            assert_ne!(nav.view(), start);
            assert!(nav.user().is_none());
            assert_eq!(nav.slide, slide_before);
        }
    }
}
