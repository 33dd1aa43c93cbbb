use super::settings_from_file;

#[test]
fn missing_file_yields_defaults() {
    let settings = settings_from_file(None);
    assert!(settings.discord_token.is_empty());
    assert!(settings.tmdb.token.is_empty());
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults() {
    let settings = settings_from_file(Some(
        r#"
        discord_token = "discord-secret"
        log_filter = "bot=debug,tmdb=debug"

        [tmdb]
        token = "tmdb-secret"
        "#,
    ));
    assert_eq!(settings.discord_token, "discord-secret");
    assert_eq!(settings.tmdb.token, "tmdb-secret");
    assert_eq!(settings.log_filter, "bot=debug,tmdb=debug");
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let settings = settings_from_file(Some("[tmdb]\ntoken = \"tmdb-secret\"\n"));
    assert_eq!(settings.tmdb.token, "tmdb-secret");
    assert!(settings.discord_token.is_empty());
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let settings = settings_from_file(Some("not = [valid"));
    assert!(settings.discord_token.is_empty());
    assert_eq!(settings.log_filter, "info");
}
