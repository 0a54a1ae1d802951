use crate::MstoneWorld;
use crate::support::{MockGitHub, Route};
use cucumber::gherkin::Step;
use cucumber::{given, then, when};

const MILESTONES_PATH: &str = "/repos/octo/hello/milestones";
const ISSUES_PATH: &str = "/repos/octo/hello/issues";

fn docstring(step: &Step) -> &str {
    step.docstring
        .as_deref()
        .expect("step requires a doc string")
}

#[given("the repository octo/hello has milestones:")]
async fn given_milestones(world: &mut MstoneWorld, step: &Step) {
    world.milestones_body = docstring(step).to_string();
}

#[given("the milestone's issues are:")]
async fn given_issues(world: &mut MstoneWorld, step: &Step) {
    world.issues_body = docstring(step).to_string();
}

#[given(regex = r#"^the configured accounts are "(.*)"$"#)]
async fn given_accounts(world: &mut MstoneWorld, accounts: String) {
    world.accounts = accounts.split(", ").map(str::to_string).collect();
}

#[when(regex = r#"^I run "(.*)"$"#)]
async fn when_i_run(world: &mut MstoneWorld, command: String) {
    let server = MockGitHub::start(vec![
        Route::ok(MILESTONES_PATH, &world.milestones_body),
        Route::ok(ISSUES_PATH, &world.issues_body),
    ])
    .await
    .expect("Failed to start mock GitHub");

    let config_dir = tempfile::tempdir().expect("Failed to create config dir");
    let config_path = config_dir.path().join("config.json");
    let config = serde_json::json!({
        "accounts": world.accounts,
        "api_url": server.base_url(),
    });
    std::fs::write(&config_path, config.to_string()).expect("Failed to write config file");

    let args: Vec<String> = std::iter::once("mstone")
        .chain(command.split_whitespace())
        .map(str::to_string)
        .collect();
    let mut buffer: Vec<u8> = Vec::new();
    let writer_option: Option<&mut dyn std::io::Write> = Some(&mut buffer);
    let result = mstone::run::run(args, writer_option, Some(config_path.as_path())).await;

    world.captured_output = buffer;
    world.run_result = Some(result);
    world.requests = server.requests();
    world.config_dir = Some(config_dir);
    server.shutdown().await;
}

#[then("the command succeeds")]
async fn then_succeeds(world: &mut MstoneWorld) {
    match world.run_result.as_ref().expect("command was not run") {
        Ok(()) => {}
        Err(e) => panic!("command failed: {e:#}"),
    }
}

#[then(regex = r#"^the command fails with "(.*)"$"#)]
async fn then_fails_with(world: &mut MstoneWorld, expected: String) {
    let err = match world.run_result.as_ref().expect("command was not run") {
        Ok(()) => panic!("command succeeded unexpectedly"),
        Err(e) => format!("{e:#}"),
    };
    assert!(
        err.contains(&expected),
        "expected error containing {expected:?}, got {err:?}"
    );
}

#[then("the output is the JSON:")]
async fn then_output_is_json(world: &mut MstoneWorld, step: &Step) {
    let actual: serde_json::Value =
        serde_json::from_slice(&world.captured_output).expect("output is not JSON");
    let expected: serde_json::Value =
        serde_json::from_str(docstring(step)).expect("doc string is not JSON");
    assert_eq!(actual, expected);
}

#[then("the output lines are:")]
async fn then_output_lines(world: &mut MstoneWorld, step: &Step) {
    let output = String::from_utf8(world.captured_output.clone()).expect("output is not UTF-8");
    let actual: Vec<&str> = output.lines().collect();
    let expected: Vec<&str> = docstring(step)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(actual, expected);
}

#[then(regex = r#"^the issues were requested with "(.*)"$"#)]
async fn then_issues_requested_with(world: &mut MstoneWorld, query: String) {
    let expected = format!("{ISSUES_PATH}?{query}");
    assert!(
        world.requests.contains(&expected),
        "expected request {expected:?}, got {:?}",
        world.requests
    );
}

#[then(regex = r"^(\d+) requests? (?:was|were) sent$")]
async fn then_request_count(world: &mut MstoneWorld, count: usize) {
    assert_eq!(world.requests.len(), count, "requests: {:?}", world.requests);
}
