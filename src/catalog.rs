//! Static content shown by the screens.
//!
//! All of it is literal data; nothing is loaded at runtime. Image references
//! point at the remote photos the artwork was designed around and are only
//! ever shown as captions.

/// One page of the onboarding carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideContent {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub image_ref: &'static str,
    pub button_label: &'static str,
}

pub const SLIDES: [SlideContent; 3] = [
    SlideContent {
        title: "No Excuses",
        subtitle: Some("Just Do The"),
        description: "Fitness is not about being better than someone else. It's about being better than you used to be.",
        image_ref: "https://images.pexels.com/photos/416778/pexels-photo-416778.jpeg",
        button_label: "Get Started",
    },
    SlideContent {
        title: "Transform",
        subtitle: Some("Your Body"),
        description: "Every workout brings you one step closer to your goals. Consistency is the key to transformation.",
        image_ref: "https://images.pexels.com/photos/1552106/pexels-photo-1552106.jpeg",
        button_label: "Continue",
    },
    SlideContent {
        title: "Achieve",
        subtitle: Some("Your Goals"),
        description: "Success isn't just about what you accomplish, but what you inspire others to do.",
        image_ref: "https://images.pexels.com/photos/1431282/pexels-photo-1431282.jpeg",
        button_label: "Start Journey",
    },
];

/// Index of the final onboarding slide.
pub const LAST_SLIDE: usize = SLIDES.len() - 1;

/// Headline lines of the sign-up/sign-in choice screen. The last line is
/// highlighted.
pub const AUTH_HEADLINE: [&str; 3] = ["Get Fit,", "Get Strong,", "Get Healthy!"];

pub const AUTH_WELCOME: &str = "Welcome to our fitness training program designed to help you achieve your fitness goals and transform your body and mind.";

/// A suggested workout on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workout {
    pub id: u32,
    pub title: &'static str,
    pub tutorials: &'static str,
    pub duration: &'static str,
    pub image_ref: &'static str,
}

pub const WORKOUTS: [Workout; 3] = [
    Workout {
        id: 1,
        title: "Bridge",
        tutorials: "8 Tutorials",
        duration: "30 Minutes",
        image_ref: "https://images.pexels.com/photos/863988/pexels-photo-863988.jpeg",
    },
    Workout {
        id: 2,
        title: "Push up",
        tutorials: "12 Tutorials",
        duration: "60 Minutes",
        image_ref: "https://images.pexels.com/photos/416717/pexels-photo-416717.jpeg",
    },
    Workout {
        id: 3,
        title: "Hip Thrust",
        tutorials: "10 Tutorials",
        duration: "45 Minutes",
        image_ref: "https://images.pexels.com/photos/1552252/pexels-photo-1552252.jpeg",
    },
];

/// A workout category chip. Chips are decorative: the active flag is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub active: bool,
}

pub const CATEGORIES: [Category; 4] = [
    Category { name: "Full Body", active: true },
    Category { name: "Legs", active: false },
    Category { name: "Hands", active: false },
    Category { name: "Upper", active: false },
];

/// The challenge card at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub teaser: &'static str,
    pub goal: &'static str,
    pub unit: &'static str,
    pub action_label: &'static str,
}

pub const CHALLENGE: Challenge = Challenge {
    teaser: "We have new challenge!",
    goal: "200",
    unit: "Step",
    action_label: "Join Challenge",
};

/// Labels of the dashboard's bottom navigation bar. The first is active.
pub const BOTTOM_NAV: [&str; 4] = ["Home", "Calendar", "Progress", "Profile"];

/// Last path segment of a remote image reference, used as a caption.
pub fn image_caption(image_ref: &str) -> &str {
    image_ref.rsplit('/').next().unwrap_or(image_ref)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_has_three_slides() {
        assert_eq!(LAST_SLIDE, 2);
        assert_eq!(SLIDES[LAST_SLIDE].button_label, "Start Journey");
    }

    #[test]
    fn test_exactly_one_active_category() {
        assert_eq!(CATEGORIES.iter().filter(|c| c.active).count(), 1);
    }

    #[test]
    fn test_image_caption() {
        assert_eq!(image_caption(SLIDES[0].image_ref), "pexels-photo-416778.jpeg");
        assert_eq!(image_caption("plain"), "plain");
    }
}
