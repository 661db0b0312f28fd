use crate::common::command::{run_explain_command, stdout_of};
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::single_argument(&["git", "init"])]
#[case::arguments_with_flag(&["git", "status", "--command", "status"])]
fn reject_positional_arguments(#[case] args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    run_explain_command(args)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Git command has no subcommands. Please provide one of the following flags:\n\
             --command\n\
             --advanced\n",
        ));

    Ok(())
}

#[test]
fn command_flag_takes_precedence_over_advanced() -> Result<(), Box<dyn std::error::Error>> {
    let both = stdout_of(&mut run_explain_command(&[
        "git", "--advanced", "rebase", "--command", "merge",
    ]))?;
    let command_only = stdout_of(&mut run_explain_command(&["git", "--command", "merge"]))?;

    assert_eq!(both, command_only);

    Ok(())
}

#[test]
fn empty_command_value_falls_through_to_advanced() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = stdout_of(&mut run_explain_command(&[
        "git", "--command", "", "--advanced", "revert",
    ]))?;

    assert!(stdout.starts_with("- Git revert is used to create a new commit"));

    Ok(())
}

#[test]
fn empty_values_show_overview() -> Result<(), Box<dyn std::error::Error>> {
    let with_empty = stdout_of(&mut run_explain_command(&["git", "-c", "", "-a", ""]))?;
    let overview = stdout_of(&mut run_explain_command(&["git"]))?;

    assert_eq!(with_empty, overview);

    Ok(())
}

#[rstest]
#[case::repeated_command(&["git", "-c", "init", "-c", "add"], &["git", "-c", "add"])]
#[case::repeated_long_command(&["git", "--command", "tag", "--command", "log"], &["git", "--command", "log"])]
#[case::repeated_advanced(&["git", "-a", "rebase", "--advanced", "bisect"], &["git", "-a", "bisect"])]
fn repeated_flag_keeps_last_value(
    #[case] repeated: &[&str],
    #[case] last_only: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let with_repeats = stdout_of(&mut run_explain_command(repeated))?;
    let expected = stdout_of(&mut run_explain_command(last_only))?;

    assert_eq!(with_repeats, expected);

    Ok(())
}

#[rstest]
#[case::long_flag_as_key(
    &["git", "--command", "--advanced"],
    "Explanation for '--advanced' is not available. Try another Git command.\n"
)]
#[case::short_flag_as_key(
    &["git", "-a", "-c"],
    "Explanation for '-c' is not available. Try another advanced Git concept.\n"
)]
#[case::dashed_key(
    &["git", "-c", "-rf"],
    "Explanation for '-rf' is not available. Try another Git command.\n"
)]
fn hyphen_prefixed_value_is_taken_as_key(
    #[case] args: &[&str],
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = stdout_of(&mut run_explain_command(args))?;

    assert_eq!(stdout, expected);

    Ok(())
}
