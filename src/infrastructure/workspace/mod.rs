mod term_workspace;

pub use term_workspace::TermWorkspace;
