// Output formatting: terminal display for the CLI.

pub mod terminal;
