//! Service container for dependency injection
//!
//! Wires up settings, the input source and the tree service.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::services::TreeService;
use crate::config::Settings;
use crate::infrastructure::traits::{InputSource, RealInputSource};
use crate::infrastructure::{InfraError, InfraResult};
use crate::util::path::expand_env_vars;

/// Where to read records from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `None` and `-` mean stdin; other paths get `~` and `$VAR` expansion.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => Input::Stdin,
            Some(p) if p.as_os_str() == "-" => Input::Stdin,
            Some(p) => Input::File(PathBuf::from(expand_env_vars(&p.to_string_lossy()))),
        }
    }
}

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Input abstraction
    pub input: Arc<dyn InputSource>,

    pub tree_service: TreeService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealInputSource))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, input: Arc<dyn InputSource>) -> Self {
        let tree_service = TreeService::new(settings.on_duplicate, settings.strict_fields);
        let settings = Arc::new(settings);

        Self {
            settings,
            input,
            tree_service,
        }
    }

    /// Read the whole input as text.
    pub fn read_input(&self, input: &Input) -> InfraResult<String> {
        debug!("read_input: {:?}", input);
        match input {
            Input::Stdin => self
                .input
                .read_stdin()
                .map_err(|e| InfraError::io("read stdin", e)),
            Input::File(path) => {
                if !self.input.is_file(path) {
                    return Err(InfraError::InputNotFound(path.clone()));
                }
                self.input
                    .read_to_string(path)
                    .map_err(|e| InfraError::io(format!("read {}", path.display()), e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FakeInput {
        stdin: String,
    }

    impl InputSource for FakeInput {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            Ok(format!("{} x\n", path.display()))
        }

        fn read_stdin(&self) -> io::Result<String> {
            Ok(self.stdin.clone())
        }

        fn is_file(&self, path: &Path) -> bool {
            path != Path::new("missing")
        }
    }

    fn container() -> ServiceContainer {
        ServiceContainer::with_deps(
            Settings::default(),
            Arc::new(FakeInput {
                stdin: "a b\n".into(),
            }),
        )
    }

    #[test]
    fn given_dash_or_none_when_resolving_input_then_uses_stdin() {
        assert_eq!(Input::from_arg(None), Input::Stdin);
        assert_eq!(Input::from_arg(Some(Path::new("-"))), Input::Stdin);
        assert_eq!(
            Input::from_arg(Some(Path::new("deps.txt"))),
            Input::File(PathBuf::from("deps.txt"))
        );
    }

    #[test]
    fn given_inputs_when_reading_then_dispatches_to_source() {
        let container = container();
        assert_eq!(container.read_input(&Input::Stdin).unwrap(), "a b\n");
        assert_eq!(
            container
                .read_input(&Input::File(PathBuf::from("root")))
                .unwrap(),
            "root x\n"
        );
    }

    #[test]
    fn given_missing_file_when_reading_then_input_not_found() {
        let err = container()
            .read_input(&Input::File(PathBuf::from("missing")))
            .unwrap_err();
        assert!(matches!(err, InfraError::InputNotFound(_)));
    }
}
