use crate::common::command::{run_explain_command, unknown_key};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fall_back_for_unknown_docker_command(
    unknown_key: String,
) -> Result<(), Box<dyn std::error::Error>> {
    run_explain_command(&["docker", "--command", &unknown_key])
        .assert()
        .success()
        .stdout(format!(
            "Explanation for '{unknown_key}' Docker command is not available. Try another Docker command.\n"
        ));

    Ok(())
}

#[rstest]
fn fall_back_for_unknown_docker_concept(
    unknown_key: String,
) -> Result<(), Box<dyn std::error::Error>> {
    run_explain_command(&["docker", "--advanced", &unknown_key])
        .assert()
        .success()
        .stdout(format!(
            "Explanation for '{unknown_key}' Docker concept is not available. Try another advanced Docker concept.\n"
        ));

    Ok(())
}

#[test]
fn log_fallback_when_verbose() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_explain_command(&["-v", "docker", "--command", "kubernetes"])
        .assert()
        .success();

    let stderr = String::from_utf8(output.get_output().stderr.clone())?;
    assert!(
        stderr.contains("no explanation available"),
        "Expected an info log on stderr, got: {stderr}"
    );

    Ok(())
}

#[rstest]
#[case::single_argument(&["docker", "run"])]
#[case::advanced_before_argument(&["docker", "-a", "swarm", "extra"])]
#[case::command_and_list_before_argument(&["docker", "--command", "run", "--list", "extra"])]
fn reject_positional_arguments(#[case] args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    run_explain_command(args)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Docker command has no subcommands. Please provide one of the following flags:\n\
             --command\n\
             --advanced\n",
        ));

    Ok(())
}
