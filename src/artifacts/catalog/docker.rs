use crate::artifacts::catalog::{Catalog, CommandEntry, ConceptEntry};

pub const INTRODUCTION: &str =
    "Docker is a platform for developing, shipping, and running applications in containers.";

pub static COMMANDS: Catalog<CommandEntry> = phf::phf_ordered_map! {
    "run" => CommandEntry {
        brief: "Run a command in a new container.",
        summary: "The 'docker run' command runs a command in a new container.",
        example: "docker run -it ubuntu bash",
        outcome: "This command runs an interactive shell in a new Ubuntu container.",
    },
    "build" => CommandEntry {
        brief: "Build an image from a Dockerfile.",
        summary: "The 'docker build' command builds an image from a Dockerfile.",
        example: "docker build -t my-image .",
        outcome: "This command builds a Docker image named 'my-image' from the current directory.",
    },
    "push" => CommandEntry {
        brief: "Push an image or a repository to a registry.",
        summary: "The 'docker push' command pushes an image or a repository to a registry.",
        example: "docker push my-registry/my-image:latest",
        outcome: "This command pushes the 'my-image' image to the 'my-registry' registry with the 'latest' tag.",
    },
};

pub static CONCEPTS: Catalog<ConceptEntry> = phf::phf_ordered_map! {
    "compose" => ConceptEntry {
        overview: "Docker Compose is a tool for defining and running multi-container Docker applications.\n\
It allows you to define the services, networks, and volumes in a YAML file, \
and then spin up the entire application stack with a single command.",
        subject: "Docker Compose",
        cheatsheet: "docker-compose up               Build and start the entire application stack\n\
docker-compose down             Stop and remove the entire application stack\n\
docker-compose ps               List the status of containers defined in the Docker Compose file\n\
docker-compose logs             View output from containers\n\
docker-compose exec <service>   Run a command in a running service container",
        example: "Create a docker-compose.yml file defining services and then run:\n\
$ docker-compose up",
    },
    "swarm" => ConceptEntry {
        overview: "Docker Swarm is a native clustering and orchestration solution for Docker.\n\
It turns a pool of Docker hosts into a single, virtual Docker host.",
        subject: "Docker Swarm",
        cheatsheet: "docker swarm init               Initialize a new Docker Swarm\n\
docker swarm join               Join a Docker host to a Swarm as a worker or manager\n\
docker node ls                  List nodes in the Swarm\n\
docker service ls               List services in the Swarm\n\
docker stack deploy             Deploy a new stack or update an existing stack",
        example: "Initialize a new Docker Swarm:\n\
$ docker swarm init",
    },
    "network" => ConceptEntry {
        overview: "Docker networking allows containers to communicate with each other and the outside world.\n\
Docker provides various network drivers for different use cases.",
        subject: "Docker networking",
        cheatsheet: "docker network create            Create a new Docker network\n\
docker network ls                List Docker networks\n\
docker network inspect           Display detailed information about a Docker network",
        example: "Create a new bridge network:\n\
$ docker network create my-network",
    },
    "volume" => ConceptEntry {
        overview: "Docker volumes are used to persist data generated by and used by Docker containers.\n\
They are a way to share data between containers or persist data across container restarts.",
        subject: "Docker volumes",
        cheatsheet: "docker volume create             Create a new Docker volume\n\
docker volume ls                 List Docker volumes\n\
docker volume inspect            Display detailed information about a Docker volume",
        example: "Create a new named volume:\n\
$ docker volume create my-data-volume",
    },
};
