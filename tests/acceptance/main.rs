use cucumber::World;

#[path = "../support/mod.rs"]
mod support;

#[derive(Debug, Default, World)]
pub struct MstoneWorld {
    pub milestones_body: String,
    pub issues_body: String,
    pub accounts: Vec<String>,
    pub config_dir: Option<tempfile::TempDir>,
    pub captured_output: Vec<u8>,
    pub run_result: Option<Result<(), anyhow::Error>>,
    pub requests: Vec<String>,
}

#[tokio::main]
async fn main() {
    MstoneWorld::run("features").await;
}

mod steps;
