pub mod cli {
    pub mod parser;
}
pub mod config;
pub mod github {
    pub mod error;
    pub mod issues;
    pub mod manager;
    pub mod milestones;
}
pub mod output;
pub mod run;
pub mod script;
