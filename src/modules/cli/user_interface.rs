// src/modules/cli/user_interface.rs
use log::info;
use std::io;

use super::menu::{MenuState, ProfileChoice, TopChoice};
use super::prompt::Prompter;
use crate::modules::directory::{Directory, DirectoryError};

// Empty phone input means "no phone number"
fn optional(input: String) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

/// Drive the menu until the user exits or the input stream closes
pub fn run_session<P: Prompter>(directory: &mut Directory, prompter: &mut P) -> io::Result<()> {
    let mut state = MenuState::Top;
    while !state.is_exited() {
        state = match step(directory, prompter, state) {
            Ok(next) => next,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("Input closed, ending session");
                MenuState::Exited
            }
            Err(e) => return Err(e),
        };
    }
    Ok(())
}

/// Run one menu round and return the state to continue from
pub fn step<P: Prompter>(
    directory: &mut Directory,
    prompter: &mut P,
    state: MenuState,
) -> io::Result<MenuState> {
    match state {
        MenuState::Top => top_menu(directory, prompter),
        MenuState::Profile { username } => profile_menu(directory, prompter, username),
        MenuState::Exited => Ok(MenuState::Exited),
    }
}

fn top_menu<P: Prompter>(directory: &mut Directory, prompter: &mut P) -> io::Result<MenuState> {
    for line in TopChoice::LINES {
        prompter.say(line);
    }

    let choice = prompter.read_line("Enter your choice: ")?;
    match TopChoice::parse(&choice) {
        Some(TopChoice::Exit) => {
            prompter.say("Goodbye!");
            Ok(MenuState::Exited)
        }
        Some(TopChoice::Register) => {
            handle_registration(directory, prompter)?;
            Ok(MenuState::Top)
        }
        Some(TopChoice::Login) => handle_login(directory, prompter),
        None => {
            prompter.say("Invalid choice.");
            Ok(MenuState::Top)
        }
    }
}

fn handle_registration<P: Prompter>(directory: &mut Directory, prompter: &mut P) -> io::Result<()> {
    let username = prompter.read_line("Enter your username: ")?;
    let password = prompter.read_password("Enter your password: ")?;
    let phone_number = prompter.read_line("Enter your phone number: ")?;

    match directory.register(&username, &password, optional(phone_number)) {
        Ok(_) => prompter.say("Registration successful."),
        Err(e) => prompter.say(&e.to_string()),
    }
    Ok(())
}

fn handle_login<P: Prompter>(directory: &mut Directory, prompter: &mut P) -> io::Result<MenuState> {
    let username = prompter.read_line("Enter your username: ")?;
    let password = prompter.read_password("Enter your password: ")?;

    match directory.authenticate(&username, &password) {
        Ok(user) => {
            let username = user.username().to_string();
            prompter.say(&format!("Welcome {}", username));
            Ok(MenuState::Profile { username })
        }
        Err(e) => {
            prompter.say(&e.to_string());
            Ok(MenuState::Top)
        }
    }
}

fn profile_menu<P: Prompter>(
    directory: &mut Directory,
    prompter: &mut P,
    username: String,
) -> io::Result<MenuState> {
    for line in ProfileChoice::LINES {
        prompter.say(line);
    }

    let choice = prompter.read_line("Enter your choice: ")?;
    match ProfileChoice::parse(&choice) {
        Some(ProfileChoice::Show) => match directory.get_by_username(&username) {
            Some(user) => {
                prompter.say(&user.to_string());
                Ok(MenuState::Profile { username })
            }
            None => {
                // Record vanished under the session
                prompter.say(&DirectoryError::UserNotFound.to_string());
                Ok(MenuState::Top)
            }
        },
        Some(ProfileChoice::Edit) => {
            let new_username = prompter.read_line("Enter your new username: ")?;
            let new_phone_number = prompter.read_line("Enter your new phone number: ")?;

            match directory.edit_profile(&username, &new_username, optional(new_phone_number)) {
                Ok(()) => {
                    prompter.say("Profile updated.");
                    Ok(MenuState::Profile {
                        username: new_username,
                    })
                }
                Err(e) => {
                    prompter.say(&e.to_string());
                    Ok(MenuState::Profile { username })
                }
            }
        }
        Some(ProfileChoice::ChangePassword) => {
            handle_password_change(directory, prompter, &username)?;
            Ok(MenuState::Profile { username })
        }
        Some(ProfileChoice::Logout) => {
            prompter.say("You are logged out.");
            Ok(MenuState::Top)
        }
        None => {
            prompter.say("Invalid choice.");
            Ok(MenuState::Profile { username })
        }
    }
}

fn handle_password_change<P: Prompter>(
    directory: &mut Directory,
    prompter: &mut P,
    username: &str,
) -> io::Result<()> {
    let old_password = prompter.read_password("Enter your old password: ")?;
    if let Err(e) = directory.confirm_password(username, &old_password) {
        match e {
            DirectoryError::InvalidCredentials => prompter.say("Password is incorrect."),
            other => prompter.say(&other.to_string()),
        }
        return Ok(());
    }

    let new_password = prompter.read_password("Enter your new password: ")?;
    let confirmation = prompter.read_password("Enter your new password again: ")?;
    if new_password != confirmation {
        prompter.say("Passwords do not match.");
        return Ok(());
    }

    match directory.rotate_password(username, &new_password) {
        Ok(()) => prompter.say("Password changed successfully."),
        Err(e) => prompter.say(&e.to_string()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Prompter that replays canned input and records everything shown
    struct ScriptedPrompter {
        inputs: VecDeque<String>,
        output: Vec<String>,
        masked_prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                output: Vec::new(),
                masked_prompts: Vec::new(),
            }
        }

        fn next(&mut self) -> io::Result<String> {
            self.inputs
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn said(&self, message: &str) -> bool {
            self.output.iter().any(|line| line == message)
        }
    }

    impl Prompter for ScriptedPrompter {
        fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
            self.next()
        }

        fn read_password(&mut self, prompt: &str) -> io::Result<String> {
            self.masked_prompts.push(prompt.to_string());
            self.next()
        }

        fn say(&mut self, message: &str) {
            self.output.push(message.to_string());
        }
    }

    #[test]
    fn test_register_and_exit() {
        let mut directory = Directory::new();
        let mut prompter = ScriptedPrompter::new(&["1", "alice", "secret1", "555-0001", "0"]);

        run_session(&mut directory, &mut prompter).unwrap();

        assert!(prompter.said("Registration successful."));
        assert!(prompter.said("Goodbye!"));
        assert_eq!(prompter.masked_prompts, vec!["Enter your password: "]);
        let alice = directory.get_by_username("alice").unwrap();
        assert_eq!(alice.phone_number(), Some("555-0001"));
    }

    #[test]
    fn test_registration_errors_are_reported() {
        let mut directory = Directory::new();
        let mut prompter = ScriptedPrompter::new(&[
            "1", "bob", "abc", "", // too short
            "1", "bob", "abcd", "", // ok, no phone
            "1", "bob", "efgh", "", // duplicate
            "0",
        ]);

        run_session(&mut directory, &mut prompter).unwrap();

        assert!(prompter.said("Password must be at least 4 characters long"));
        assert!(prompter.said("Username already exists. Please choose a different one."));
        assert_eq!(directory.get_by_username("bob").unwrap().phone_number(), None);
        assert!(directory.authenticate("bob", "abcd").is_ok());
    }

    #[test]
    fn test_login_failures_return_to_top_menu() {
        let mut directory = Directory::new();
        directory.register("alice", "secret1", None).unwrap();
        let mut prompter = ScriptedPrompter::new(&["2", "alice", "wrong", "2", "nobody", "x", "0"]);

        run_session(&mut directory, &mut prompter).unwrap();

        assert!(prompter.said("Password is incorrect"));
        assert!(prompter.said("User not found"));
        assert!(prompter.said("Goodbye!"));
    }

    #[test]
    fn test_profile_round_trip() {
        let mut directory = Directory::new();
        directory
            .register("alice", "secret1", Some("555-0001".to_string()))
            .unwrap();
        let id = directory.get_by_username("alice").unwrap().id();

        let mut prompter = ScriptedPrompter::new(&[
            "2", "alice", "secret1", // login
            "2", "alicia", "555-0002", // rename
            "1", // show
            "3", "secret1", "newpass1", "newpass1", // change password
            "4", // logout
            "0",
        ]);

        run_session(&mut directory, &mut prompter).unwrap();

        assert!(prompter.said("Welcome alice"));
        assert!(prompter.said("Profile updated."));
        assert!(prompter.said(&format!(
            "User(id={}, username=alicia, phone_number=555-0002)",
            id
        )));
        assert!(prompter.said("Password changed successfully."));
        assert!(prompter.said("You are logged out."));

        assert!(directory.get_by_username("alice").is_none());
        assert!(directory.authenticate("alicia", "newpass1").is_ok());
        assert!(matches!(
            directory.authenticate("alicia", "secret1"),
            Err(DirectoryError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_password_change_rejections() {
        let mut directory = Directory::new();
        directory.register("alice", "secret1", None).unwrap();

        let mut prompter = ScriptedPrompter::new(&[
            "2", "alice", "secret1",
            "3", "wrong", // bad old password
            "3", "secret1", "newpass1", "newpass2", // mismatch
            "3", "secret1", "abc", "abc", // too short
            "4", "0",
        ]);

        run_session(&mut directory, &mut prompter).unwrap();

        assert!(prompter.said("Password is incorrect."));
        assert!(prompter.said("Passwords do not match."));
        assert!(prompter.said("Password must be at least 4 characters long"));
        assert!(directory.authenticate("alice", "secret1").is_ok());
    }

    #[test]
    fn test_edit_to_taken_name_keeps_session() {
        let mut directory = Directory::new();
        directory.register("alice", "secret1", None).unwrap();
        directory.register("bob", "hunter22", None).unwrap();

        let mut prompter = ScriptedPrompter::new(&[
            "2", "alice", "secret1",
            "2", "bob", "555-0003",
            "1", "4", "0",
        ]);

        run_session(&mut directory, &mut prompter).unwrap();

        assert!(prompter.said("Username already exists. Please choose a different one."));
        assert!(prompter
            .output
            .iter()
            .any(|line| line.contains("username=alice")));
    }

    #[test]
    fn test_invalid_choices_and_eof() {
        let mut directory = Directory::new();
        let mut prompter = ScriptedPrompter::new(&["9"]);

        // Script runs out after one invalid choice
        run_session(&mut directory, &mut prompter).unwrap();

        assert!(prompter.said("Invalid choice."));
        assert!(!prompter.said("Goodbye!"));
    }

    #[test]
    fn test_step_from_exited_is_terminal() {
        let mut directory = Directory::new();
        let mut prompter = ScriptedPrompter::new(&[]);
        let next = step(&mut directory, &mut prompter, MenuState::Exited).unwrap();
        assert_eq!(next, MenuState::Exited);
        assert!(prompter.output.is_empty());
    }
}
