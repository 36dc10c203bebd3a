//! User input port
//!
//! Line source for the chat loop. The presentation layer backs it with a
//! line editor; tests back it with a queue.

/// Supplies one line of user input at a time.
pub trait UserInputPort {
    /// Show `prompt` and block until the user enters a line.
    ///
    /// Returns `None` once input is closed (e.g. Ctrl-D).
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}
