use super::*;
use crate::commands::{CommandModule, MessageCommandInfo};
use crate::discovery::Candidate;
use crate::error::ConstructError;
use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

struct AppContext {
    prefix: String,
}

struct Ping {
    prefix: String,
}

impl CommandModule for Ping {
    fn message_command(&self) -> Option<MessageCommandInfo> {
        Some(MessageCommandInfo::new("ping").with_alias("p"))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn loader() -> Loader<AppContext> {
    let table = ModuleTable::<AppContext>::new()
        .with("commands/ping", |ctx: &Arc<AppContext>| {
            Ok(Ping {
                prefix: ctx.prefix.clone(),
            })
        })
        .with("fun::broken", |_ctx: &Arc<AppContext>| {
            Err::<Ping, _>("token missing".into())
        })
        .with("fun::panics", |_ctx: &Arc<AppContext>| -> Result<Ping, ConstructError> {
            panic!("constructor exploded")
        });

    Loader::new(
        Arc::new(AppContext {
            prefix: "!".to_string(),
        }),
        Arc::new(table),
    )
}

fn candidate(temp_dir: &TempDir, file: &str, content: &str, module_id: &str) -> Candidate {
    let path = temp_dir.path().join(file);
    std::fs::write(&path, content).unwrap();
    Candidate {
        path,
        module_id: module_id.to_string(),
    }
}

#[test]
fn test_manifest_format_from_path() {
    assert_eq!(
        ManifestFormat::from_path(&PathBuf::from("a.yml")),
        ManifestFormat::Yaml
    );
    assert_eq!(
        ManifestFormat::from_path(&PathBuf::from("a.json")),
        ManifestFormat::Json
    );
    assert_eq!(
        ManifestFormat::from_path(&PathBuf::from("a.cmd")),
        ManifestFormat::Toml
    );
}

#[test]
fn test_parse_blank_manifest() {
    let manifest = ModuleManifest::parse("  \n", ManifestFormat::Json).unwrap();
    assert_eq!(manifest, ModuleManifest::default());
}

#[test]
fn test_parse_inline_command_yaml() {
    let content = "command:\n  kind: slash\n  name: ban\n";
    let manifest = ModuleManifest::parse(content, ManifestFormat::Yaml).unwrap();
    let declared = manifest.command.unwrap();
    assert_eq!(declared.name, "ban");
    assert_eq!(declared.kind, "slash");
}

#[test]
fn test_table_keys_sorted() {
    let loader_table = ModuleTable::<AppContext>::new()
        .with("b", |ctx: &Arc<AppContext>| {
            Ok(Ping {
                prefix: ctx.prefix.clone(),
            })
        })
        .with("a", |ctx: &Arc<AppContext>| {
            Ok(Ping {
                prefix: ctx.prefix.clone(),
            })
        });
    assert_eq!(loader_table.keys(), vec!["a", "b"]);
    assert!(loader_table.contains("a"));
    assert_eq!(loader_table.len(), 2);
}

#[tokio::test]
async fn test_load_by_module_id() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = candidate(&temp_dir, "ping.toml", "", "commands/ping");

    let module = loader().load(&candidate).await.unwrap();
    let info = module.message_command().unwrap();
    assert_eq!(info.name, "ping");

    let ping = module.as_any().downcast_ref::<Ping>().unwrap();
    assert_eq!(ping.prefix, "!");
}

#[tokio::test]
async fn test_load_by_export_key() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = candidate(
        &temp_dir,
        "renamed.toml",
        "export = \"commands/ping\"\n",
        "commands/renamed",
    );

    assert!(loader().load(&candidate).await.is_ok());
}

#[tokio::test]
async fn test_missing_export_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = candidate(&temp_dir, "pong.toml", "", "commands/pong");

    let err = loader().load(&candidate).await.err().unwrap();
    assert_eq!(err.error_code(), "ROSTER_LOAD");
    assert!(err.to_string().contains("commands/pong"));
}

#[tokio::test]
async fn test_constructor_error_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = candidate(
        &temp_dir,
        "broken.json",
        r#"{"export": "fun::broken"}"#,
        "commands/broken",
    );

    let err = loader().load(&candidate).await.err().unwrap();
    assert!(err.to_string().contains("token missing"));
}

#[tokio::test]
async fn test_constructor_panic_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = candidate(
        &temp_dir,
        "panics.toml",
        "export = \"fun::panics\"",
        "commands/panics",
    );

    let err = loader().load(&candidate).await.err().unwrap();
    assert!(err.to_string().contains("constructor exploded"));
}

#[tokio::test]
async fn test_malformed_manifest_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = candidate(&temp_dir, "bad.toml", "export = ", "commands/bad");

    let err = loader().load(&candidate).await.err().unwrap();
    assert_eq!(err.error_code(), "ROSTER_LOAD");
}

#[tokio::test]
async fn test_unreadable_module_is_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = Candidate {
        path: temp_dir.path().join("vanished.toml"),
        module_id: "commands/vanished".to_string(),
    };

    assert!(loader().load(&candidate).await.is_err());
}

#[tokio::test]
async fn test_inline_declaration_needs_no_constructor() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = candidate(
        &temp_dir,
        "mute.toml",
        "[command]\nkind = \"message\"\nname = \"mute\"\naliases = [\"silence\"]\n",
        "commands/mute",
    );

    let module = loader().load(&candidate).await.unwrap();
    let info = module.message_command().unwrap();
    assert_eq!(info.name, "mute");
    assert_eq!(info.aliases, vec!["silence".to_string()]);
}

#[tokio::test]
async fn test_export_and_inline_declaration_conflict() {
    let temp_dir = TempDir::new().unwrap();
    let candidate = candidate(
        &temp_dir,
        "both.toml",
        "export = \"commands/ping\"\n[command]\nkind = \"slash\"\nname = \"ping\"\n",
        "commands/both",
    );

    assert!(loader().load(&candidate).await.is_err());
}
