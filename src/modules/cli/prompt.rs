use std::io;

use crate::modules::utils::io::{prompt, read_line};

/// Console operations the menu needs
pub trait Prompter {
    /// Read a visible line of input after showing a prompt
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Read a masked line of input after showing a prompt
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;

    /// Show a message on its own line
    fn say(&mut self, message: &str);
}

/// Prompter backed by the process terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, message: &str) -> io::Result<String> {
        prompt(message)?;
        read_line()
    }

    fn read_password(&mut self, message: &str) -> io::Result<String> {
        rpassword::prompt_password(message)
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}
