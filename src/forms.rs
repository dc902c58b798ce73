//! Typed form drafts for the sign-up and sign-in screens.
//!
//! Each screen collects a fixed set of fields, so the drafts are plain
//! structs rather than open key/value bags. Values are stored exactly as
//! typed: nothing here validates format or length. The only rule the forms
//! enforce is presence of the fields marked as required.

use crate::utils::expand_path;
use std::fmt;
use std::path::PathBuf;

/// Gender choices offered by the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All options in display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Cycle forward through the options, starting at the first one when
    /// nothing has been chosen yet.
    pub fn next(current: Option<Gender>) -> Gender {
        match current {
            None | Some(Gender::Other) => Gender::Male,
            Some(Gender::Male) => Gender::Female,
            Some(Gender::Female) => Gender::Other,
        }
    }

    /// Cycle backward through the options, starting at the last one when
    /// nothing has been chosen yet.
    pub fn previous(current: Option<Gender>) -> Gender {
        match current {
            None | Some(Gender::Male) => Gender::Other,
            Some(Gender::Female) => Gender::Male,
            Some(Gender::Other) => Gender::Female,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque reference to a profile photo picked by the user.
///
/// The file is never opened or checked; only presence matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef(PathBuf);

impl PhotoRef {
    /// Build a reference from picker input. Blank input means no photo; a
    /// leading `~` is expanded.
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(expand_path(trimmed)))
        }
    }

    /// Short name used for the preview line.
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.0.to_string_lossy().to_string())
    }
}

/// Fields of the sign-up form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    Name,
    Gender,
    Height,
    Weight,
    Email,
    Password,
    Photo,
}

impl SignUpField {
    pub const ALL: [SignUpField; 7] = [
        SignUpField::Name,
        SignUpField::Gender,
        SignUpField::Height,
        SignUpField::Weight,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::Photo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignUpField::Name => "Name",
            SignUpField::Gender => "Gender",
            SignUpField::Height => "Height",
            SignUpField::Weight => "Weight",
            SignUpField::Email => "Email",
            SignUpField::Password => "Password",
            SignUpField::Photo => "Profile Photo",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SignUpField::Name => "Name",
            SignUpField::Gender => "Select Gender",
            SignUpField::Height => "Height (e.g., 5'7'' or 170cm)",
            SignUpField::Weight => "Weight (e.g., 65kg)",
            SignUpField::Email => "Email",
            SignUpField::Password => "Password",
            SignUpField::Photo => "Path to an image (optional)",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, SignUpField::Photo)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Fields of the sign-in form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInField {
    Email,
    Password,
}

impl SignInField {
    pub const ALL: [SignInField; 2] = [SignInField::Email, SignInField::Password];

    pub fn label(&self) -> &'static str {
        match self {
            SignInField::Email => "Email",
            SignInField::Password => "Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SignInField::Email => "Email Address",
            SignInField::Password => "Password",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SignInField::Email => SignInField::Password,
            SignInField::Password => SignInField::Email,
        }
    }

    pub fn previous(self) -> Self {
        self.next()
    }
}

/// Everything the sign-up form collected at the moment of submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: Option<Gender>,
    pub height: String,
    pub weight: String,
    pub photo: Option<PhotoRef>,
}

impl SignUpDraft {
    /// First required field that is blank, in form order.
    pub fn first_missing(&self) -> Option<SignUpField> {
        SignUpField::ALL
            .into_iter()
            .filter(SignUpField::is_required)
            .find(|field| !self.has_value(*field))
    }

    fn has_value(&self, field: SignUpField) -> bool {
        match field {
            SignUpField::Name => !self.name.is_empty(),
            SignUpField::Gender => self.gender.is_some(),
            SignUpField::Height => !self.height.is_empty(),
            SignUpField::Weight => !self.weight.is_empty(),
            SignUpField::Email => email_present(&self.email),
            SignUpField::Password => !self.password.is_empty(),
            SignUpField::Photo => self.photo.is_some(),
        }
    }
}

/// Everything the sign-in form collected at the moment of submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInDraft {
    pub email: String,
    pub password: String,
}

impl SignInDraft {
    /// First required field that is blank, in form order.
    pub fn first_missing(&self) -> Option<SignInField> {
        if !email_present(&self.email) {
            Some(SignInField::Email)
        } else if self.password.is_empty() {
            Some(SignInField::Password)
        } else {
            None
        }
    }
}

/// Email fields drop surrounding whitespace before the presence check;
/// every other field counts any typed character, spaces included.
fn email_present(email: &str) -> bool {
    !email.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_sign_up() -> SignUpDraft {
        SignUpDraft {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            gender: Some(Gender::Female),
            height: "170cm".to_string(),
            weight: "60kg".to_string(),
            photo: None,
        }
    }

    #[test]
    fn test_gender_cycles_both_ways() {
        assert_eq!(Gender::next(None), Gender::Male);
        assert_eq!(Gender::next(Some(Gender::Other)), Gender::Male);
        assert_eq!(Gender::previous(None), Gender::Other);
        assert_eq!(Gender::previous(Some(Gender::Female)), Gender::Male);
    }

    #[test]
    fn test_photo_ref_blank_is_absent() {
        assert!(PhotoRef::from_input("   ").is_none());
        let photo = PhotoRef::from_input(" ~/pics/me.png ").unwrap();
        assert_eq!(photo.file_name(), "me.png");
    }

    #[test]
    fn test_photo_is_optional() {
        assert_eq!(complete_sign_up().first_missing(), None);
    }

    #[test]
    fn test_first_missing_follows_form_order() {
        let mut draft = complete_sign_up();
        draft.gender = None;
        draft.password = String::new();
        assert_eq!(draft.first_missing(), Some(SignUpField::Gender));
    }

    #[test]
    fn test_only_email_is_trimmed() {
        let mut draft = complete_sign_up();
        draft.name = "   ".to_string();
        draft.password = "  ".to_string();
        assert_eq!(draft.first_missing(), None);

        draft.email = " \t ".to_string();
        assert_eq!(draft.first_missing(), Some(SignUpField::Email));

        let sign_in = SignInDraft {
            email: "b@x.com".to_string(),
            password: " ".to_string(),
        };
        assert_eq!(sign_in.first_missing(), None);

        let sign_in = SignInDraft {
            email: "  ".to_string(),
            password: "p".to_string(),
        };
        assert_eq!(sign_in.first_missing(), Some(SignInField::Email));
    }

    #[test]
    fn test_malformed_values_are_accepted() {
        let mut draft = complete_sign_up();
        draft.email = "not an email".to_string();
        draft.height = "tall".to_string();
        assert_eq!(draft.first_missing(), None);
    }

    #[test]
    fn test_sign_in_requires_email_then_password() {
        let mut draft = SignInDraft::default();
        assert_eq!(draft.first_missing(), Some(SignInField::Email));
        draft.email = "b@x.com".to_string();
        assert_eq!(draft.first_missing(), Some(SignInField::Password));
        draft.password = "p".to_string();
        assert_eq!(draft.first_missing(), None);
    }

    #[test]
    fn test_sign_up_field_focus_wraps() {
        assert_eq!(SignUpField::Photo.next(), SignUpField::Name);
        assert_eq!(SignUpField::Name.previous(), SignUpField::Photo);
        assert_eq!(SignInField::Email.previous(), SignInField::Password);
    }
}
