//! Action scripts - one shell action per line
//!
//! ```text
//! # comments and blank lines are skipped
//! add:agent
//! add:groupchat
//! generate
//! ```

use tracing::debug;

use crate::error::BuilderError;
use crate::shell::{Action, UiShell};

/// Parse a script into actions; errors carry the 1-based line number
pub fn parse_script(script: &str) -> Result<Vec<Action>, BuilderError> {
    script
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| line.parse::<Action>().map_err(|e| e.at_line(n)))
        .collect()
}

/// Parse the whole script, then apply it to the shell
///
/// Nothing is applied when any line fails to parse.
pub fn replay(shell: &mut UiShell, script: &str) -> Result<usize, BuilderError> {
    let actions = parse_script(script)?;
    for action in &actions {
        shell.dispatch(*action)?;
    }
    debug!(actions = actions.len(), "script replayed");
    Ok(actions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let script = "# build\n\nadd:agent\n  add:parallel  \ngenerate\n";
        let actions = parse_script(script).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Add(NodeType::Agent),
                Action::Add(NodeType::Parallel),
                Action::Generate,
            ]
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_script("add:agent\n\nadd:loop\n").unwrap_err();
        match err {
            BuilderError::Replay { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(*source, BuilderError::InvalidNodeType { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_replay_is_all_or_nothing() {
        let mut shell = UiShell::new();
        assert!(replay(&mut shell, "add:agent\nsave\n").is_err());
        assert!(shell.model().is_empty());
    }

    #[test]
    fn test_replay_four_clear_parallel() {
        let mut shell = UiShell::new();
        let script = "add:agent\nadd:groupchat\nadd:sequential\nadd:parallel\nclear\nadd:parallel\n";
        assert_eq!(replay(&mut shell, script).unwrap(), 6);

        let nodes = shell.model().nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, 1);
        assert_eq!(nodes[0].name, "new_parallel_1");
    }
}
