/// Expand `~`, `$VAR` and `${VAR}` in a path string.
///
/// Unresolvable variables leave the input unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_plain_path_when_expanding_then_unchanged() {
        assert_eq!(expand_env_vars("deps/edges.txt"), "deps/edges.txt");
    }

    #[test]
    fn given_unknown_variable_when_expanding_then_keeps_input() {
        assert_eq!(
            expand_env_vars("$DEPTREE_SURELY_UNSET_VAR/x"),
            "$DEPTREE_SURELY_UNSET_VAR/x"
        );
    }
}
