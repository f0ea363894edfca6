/// Choices offered before login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopChoice {
    Exit,
    Register,
    Login,
}

impl TopChoice {
    pub const LINES: [&'static str; 3] = ["0. Exit", "1. Register", "2. Login"];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(TopChoice::Exit),
            "1" => Some(TopChoice::Register),
            "2" => Some(TopChoice::Login),
            _ => None,
        }
    }
}

/// Choices offered to a logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileChoice {
    Show,
    Edit,
    ChangePassword,
    Logout,
}

impl ProfileChoice {
    pub const LINES: [&'static str; 4] = [
        "1. show profile",
        "2. edit profile include username and phone number",
        "3. change password",
        "4. logout",
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(ProfileChoice::Show),
            "2" => Some(ProfileChoice::Edit),
            "3" => Some(ProfileChoice::ChangePassword),
            "4" => Some(ProfileChoice::Logout),
            _ => None,
        }
    }
}

/// Where the menu loop currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Top,
    Profile { username: String }, // Current username of the logged-in record
    Exited,
}

impl MenuState {
    pub fn is_exited(&self) -> bool {
        matches!(self, MenuState::Exited)
    }
}
