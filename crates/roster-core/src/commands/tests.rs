use super::*;

#[test]
fn test_declared_kind_parse() {
    assert_eq!(DeclaredKind::parse("message"), DeclaredKind::Message);
    assert_eq!(DeclaredKind::parse(" Slash "), DeclaredKind::Slash);
    assert_eq!(DeclaredKind::parse("context-menu"), DeclaredKind::Context);
    assert_eq!(DeclaredKind::parse("button"), DeclaredKind::Unknown);
}

#[test]
fn test_declared_message_probe() {
    let declared = DeclaredCommand {
        kind: "message".to_string(),
        name: "mute".to_string(),
        aliases: vec!["silence".to_string()],
        ..Default::default()
    };

    let info = declared.message_command().unwrap();
    assert_eq!(info.name, "mute");
    assert_eq!(info.aliases, vec!["silence".to_string()]);
    assert!(declared.slash_command().is_none());
    assert!(declared.context_command().is_none());
}

#[test]
fn test_declared_unknown_answers_no_probe() {
    let declared = DeclaredCommand {
        kind: "modal".to_string(),
        name: "feedback".to_string(),
        ..Default::default()
    };

    assert!(declared.message_command().is_none());
    assert!(declared.slash_command().is_none());
    assert!(declared.context_command().is_none());
}

#[test]
fn test_message_info_builder() {
    let info = MessageCommandInfo::new("ban")
        .with_alias("b")
        .with_description("Ban a member");
    assert_eq!(info.aliases, vec!["b".to_string()]);
    assert_eq!(info.description.as_deref(), Some("Ban a member"));

    let info = info.with_aliases(["x", "y"]);
    assert_eq!(info.aliases.len(), 2);
}

#[test]
fn test_category_display() {
    assert_eq!(CommandCategory::Message.to_string(), "command");
    assert_eq!(CommandCategory::Slash.to_string(), "slash command");
    assert_eq!(CommandCategory::Context.to_string(), "context command");
}
