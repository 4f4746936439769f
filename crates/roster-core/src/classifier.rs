//! Capability-based classification of loaded modules
//!
//! Probes run in a fixed order (message, slash, context) and the first probe
//! that answers decides the category. A module answering none is ignored.

use crate::commands::{
    ClassifiedCommand, CommandCategory, CommandModule, ContextCommand, MessageCommand,
    SlashCommand,
};
use crate::error::{RosterError, RosterResult};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Turns constructed modules into [`ClassifiedCommand`]s
pub struct Classifier;

impl Classifier {
    /// Classify a module loaded from `source_path`
    pub fn classify(
        module: Arc<dyn CommandModule>,
        source_path: &Path,
    ) -> Option<ClassifiedCommand> {
        if let Some(info) = module.message_command() {
            return Some(ClassifiedCommand::Message(MessageCommand {
                name: info.name,
                aliases: info.aliases,
                description: info.description,
                source_path: source_path.to_path_buf(),
                module,
            }));
        }

        if let Some(info) = module.slash_command() {
            return Some(ClassifiedCommand::Slash(SlashCommand {
                name: info.name,
                description: info.description,
                source_path: source_path.to_path_buf(),
                module,
            }));
        }

        if let Some(info) = module.context_command() {
            return Some(ClassifiedCommand::Context(ContextCommand {
                name: info.name,
                target: info.target,
                source_path: source_path.to_path_buf(),
                module,
            }));
        }

        debug!(path = %source_path.display(), "Module matches no command variant, ignoring");
        None
    }

    /// Classify with the capability checks guarded against panics.
    ///
    /// A check that panics turns into a load error for `source_path`.
    pub fn try_classify(
        module: Arc<dyn CommandModule>,
        source_path: &Path,
    ) -> RosterResult<Option<ClassifiedCommand>> {
        panic::catch_unwind(AssertUnwindSafe(|| Self::classify(module, source_path))).map_err(
            |payload| RosterError::panicked(source_path, "Capability check", payload.as_ref()),
        )
    }

    /// Every category a module answers for, in precedence order
    pub fn capabilities(module: &dyn CommandModule) -> Vec<CommandCategory> {
        let mut categories = Vec::new();
        if module.message_command().is_some() {
            categories.push(CommandCategory::Message);
        }
        if module.slash_command().is_some() {
            categories.push(CommandCategory::Slash);
        }
        if module.context_command().is_some() {
            categories.push(CommandCategory::Context);
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{
        ContextCommandInfo, ContextTarget, MessageCommandInfo, SlashCommandInfo,
    };
    use std::any::Any;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Capable {
        message: bool,
        slash: bool,
        context: bool,
    }

    impl CommandModule for Capable {
        fn message_command(&self) -> Option<MessageCommandInfo> {
            self.message
                .then(|| MessageCommandInfo::new("info").with_alias("i"))
        }

        fn slash_command(&self) -> Option<SlashCommandInfo> {
            self.slash.then(|| SlashCommandInfo::new("info"))
        }

        fn context_command(&self) -> Option<ContextCommandInfo> {
            self.context
                .then(|| ContextCommandInfo::new("User Info", ContextTarget::User))
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Exploding;

    impl CommandModule for Exploding {
        fn message_command(&self) -> Option<MessageCommandInfo> {
            panic!("name getter exploded")
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn classify(capable: Capable) -> Option<ClassifiedCommand> {
        Classifier::classify(Arc::new(capable), &PathBuf::from("commands/info.toml"))
    }

    #[test]
    fn test_message_command() {
        let classified = classify(Capable {
            message: true,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(classified.category(), CommandCategory::Message);
        assert_eq!(classified.name(), "info");
        match classified {
            ClassifiedCommand::Message(cmd) => assert_eq!(cmd.aliases, vec!["i".to_string()]),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_slash_command() {
        let classified = classify(Capable {
            slash: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(classified.category(), CommandCategory::Slash);
    }

    #[test]
    fn test_context_command() {
        let classified = classify(Capable {
            context: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(classified.category(), CommandCategory::Context);
        assert_eq!(classified.name(), "User Info");
        assert_eq!(
            classified.source_path(),
            PathBuf::from("commands/info.toml").as_path()
        );
    }

    #[test]
    fn test_no_capability_is_ignored() {
        assert!(classify(Capable::default()).is_none());
    }

    #[test]
    fn test_mixed_membership_uses_precedence() {
        let classified = classify(Capable {
            message: true,
            slash: true,
            context: true,
        })
        .unwrap();
        assert_eq!(classified.category(), CommandCategory::Message);

        let classified = classify(Capable {
            slash: true,
            context: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(classified.category(), CommandCategory::Slash);
    }

    #[test]
    fn test_capabilities_listing() {
        let capable = Capable {
            message: true,
            context: true,
            ..Default::default()
        };
        assert_eq!(
            Classifier::capabilities(&capable),
            vec![CommandCategory::Message, CommandCategory::Context]
        );
    }

    #[test]
    fn test_panicking_capability_check_is_load_error() {
        let path = PathBuf::from("commands/exploding.toml");
        let err = Classifier::try_classify(Arc::new(Exploding), &path).unwrap_err();

        assert_eq!(err.error_code(), "ROSTER_LOAD");
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(err.to_string().contains("name getter exploded"));
    }

    #[test]
    fn test_try_classify_passes_results_through() {
        let path = PathBuf::from("commands/info.toml");
        let classified = Classifier::try_classify(
            Arc::new(Capable {
                slash: true,
                ..Default::default()
            }),
            &path,
        )
        .unwrap();
        assert_eq!(classified.unwrap().category(), CommandCategory::Slash);

        assert!(
            Classifier::try_classify(Arc::new(Capable::default()), &path)
                .unwrap()
                .is_none()
        );
    }
}
