//! rustyline-backed input

use persona_application::UserInputPort;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Reads user lines from the terminal with line editing.
///
/// Ctrl-C discards the current line; Ctrl-D closes input.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl UserInputPort for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Some(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return None,
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    return None;
                }
            }
        }
    }
}
