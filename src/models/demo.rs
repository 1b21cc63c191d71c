//! Demo selection for the app shell.

/// Which demo the shell is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Demo {
    /// School website (default)
    #[default]
    Site,
    /// Local text file viewer
    FileViewer,
    /// Parent/child callback demo
    Callbacks,
}

impl Demo {
    /// Every demo, in tab order.
    pub const ALL: [Demo; 3] = [Demo::Site, Demo::FileViewer, Demo::Callbacks];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Site => "School site",
            Self::FileViewer => "File viewer",
            Self::Callbacks => "Callbacks",
        }
    }
}
