//! Deploy script (`deploy-cluster.sh`)
//!
//! POSIX shell. Arguments given to the script are passed to every
//! `docker-compose` call; with none it runs `up -d`. The project name and
//! host names are caller input and are quoted before they reach the script.

use super::descriptor::descriptor_file_name;

pub const SCRIPT_FILE_NAME: &str = "deploy-cluster.sh";

const DEFAULT_ARGS: &str = "up -d";

/// Render the script driving one `docker-compose` call per host
pub fn render_script(hosts: &[&str], docker_port: u16, project: &str) -> String {
    let mut script = format!(
        r#"#!/bin/sh

set -v

cd "$(dirname "$0")" || exit 1

CLUSTER_PREFIX={project}

if [ "$#" -ne 0 ]; then
    ARGS="$*"
else
    ARGS="{DEFAULT_ARGS}"
fi

"#,
        project = shell_quote(project)
    );

    for host in hosts {
        script.push_str(&format!(
            "DOCKER_HOST={} docker-compose -f {} -p \"$CLUSTER_PREFIX\" $ARGS\n",
            shell_quote(&format!("tcp://{}:{}", host, docker_port)),
            shell_quote(&descriptor_file_name(host))
        ));
    }

    script
}

/// Quote `word` for a POSIX shell. Words made only of safe characters are
/// left bare; anything else is single-quoted with `'` spelled `'\''`.
fn shell_quote(word: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "_-.,/:@%+=".contains(c);

    if !word.is_empty() && word.chars().all(is_safe) {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
