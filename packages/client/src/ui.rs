//! Prompt handling for the interactive session.

use std::io::Write;

/// Redisplay the prompt after printing asynchronous output over it.
pub fn redisplay_prompt(client_id: &str) {
    print!("{}> ", client_id);
    let _ = std::io::stdout().flush();
}
