use crate::common::command::{run_explain_command, stdout_of};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(
    "run",
    "The 'docker run' command runs a command in a new container.\n\
     Example: docker run -it ubuntu bash\n\
     This command runs an interactive shell in a new Ubuntu container.\n"
)]
#[case(
    "build",
    "The 'docker build' command builds an image from a Dockerfile.\n\
     Example: docker build -t my-image .\n\
     This command builds a Docker image named 'my-image' from the current directory.\n"
)]
#[case(
    "push",
    "The 'docker push' command pushes an image or a repository to a registry.\n\
     Example: docker push my-registry/my-image:latest\n\
     This command pushes the 'my-image' image to the 'my-registry' registry with the 'latest' tag.\n"
)]
fn explain_docker_command(
    #[case] key: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = stdout_of(&mut run_explain_command(&["docker", "--command", key]))?;

    assert_eq!(stdout, expected);

    Ok(())
}
