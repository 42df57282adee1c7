//! Every route the front end knows about

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    SignIn,
    SignUp,
    Meetings,
    Agents,
    Upgrade,
}

impl Page {
    /// Every route, in the order they are registered with the router
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::SignIn,
        Self::SignUp,
        Self::Meetings,
        Self::Agents,
        Self::Upgrade,
    ];

    /// Absolute path of the route
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
            Self::Meetings => "/meetings",
            Self::Agents => "/agents",
            Self::Upgrade => "/upgrade",
        }
    }

    /// Route whose path is exactly `path`
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::Page;

    #[rstest]
    #[case("/", Some(Page::Home))]
    #[case("/sign-in", Some(Page::SignIn))]
    #[case("/upgrade", Some(Page::Upgrade))]
    #[case("/upgrade/", None)]
    #[case("/settings", None)]
    fn from_path_should_match_exact_paths(#[case] path: &str, #[case] expected: Option<Page>) {
        assert_eq!(Page::from_path(path), expected);
    }

    #[test]
    fn paths_should_be_unique() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }
}
