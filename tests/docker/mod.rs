mod explain_docker_commands;
mod explain_advanced_docker_concepts;
mod fall_back_for_unknown_docker_keys;
