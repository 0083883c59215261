//! Console Adapters
//!
//! - **StdConsole** - Terminal stdin/stdout
//! - **ScriptedConsole** - Canned answers and a captured transcript (testing)

mod scripted_console;
mod std_console;

pub use scripted_console::ScriptedConsole;
pub use std_console::StdConsole;
