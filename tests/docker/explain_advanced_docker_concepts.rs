use crate::common::command::{run_explain_command, stdout_of};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("compose", "Docker Compose", "$ docker-compose up")]
#[case("swarm", "Docker Swarm", "$ docker swarm init")]
#[case("network", "Docker networking", "$ docker network create my-network")]
#[case("volume", "Docker volumes", "$ docker volume create my-data-volume")]
fn explain_advanced_docker_concept(
    #[case] key: &str,
    #[case] subject: &str,
    #[case] last_line: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = stdout_of(&mut run_explain_command(&["docker", "-a", key]))?;

    assert!(stdout.starts_with("- Docker "));
    assert!(stdout.contains(&format!(
        "\n\nHere’s a summary of the different commands associated with {subject}:\n"
    )));
    assert_eq!(stdout.lines().last(), Some(last_line));

    Ok(())
}

#[test]
fn explain_docker_network_in_full() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = stdout_of(&mut run_explain_command(&["docker", "--advanced", "network"]))?;

    assert_eq!(
        stdout,
        "- Docker networking allows containers to communicate with each other and the outside world.\n\
         Docker provides various network drivers for different use cases.\n\
         \n\
         Here’s a summary of the different commands associated with Docker networking:\n\
         docker network create            Create a new Docker network\n\
         docker network ls                List Docker networks\n\
         docker network inspect           Display detailed information about a Docker network\n\
         \n\
         Example:\n\
         Create a new bridge network:\n\
         $ docker network create my-network\n"
    );

    Ok(())
}
