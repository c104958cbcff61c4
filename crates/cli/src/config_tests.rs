use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.white, PlayerKind::Human);
    assert_eq!(config.black, PlayerKind::Random);
    assert!(config.show_board);
    assert_eq!(config.max_plies, 0);
    assert_eq!(config.seed, None);
}

#[test]
fn test_parse_toml() {
    let config = GameConfig::from_toml_str(
        r#"
        white = "random"
        black = "human"
        show_board = false
        seed = 42
        "#,
    )
    .unwrap();
    assert_eq!(config.white, PlayerKind::Random);
    assert_eq!(config.black, PlayerKind::Human);
    assert!(!config.show_board);
    assert_eq!(config.seed, Some(42));
    // Missing keys fall back to defaults
    assert_eq!(config.max_plies, 0);
}

#[test]
fn test_parse_toml_rejects_unknown() {
    assert!(GameConfig::from_toml_str("white = \"robot\"").is_err());
    assert!(GameConfig::from_toml_str("colour = \"white\"").is_err());
}

#[test]
fn test_load_missing_file_mentions_path() {
    let err = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.toml"));
}

#[test]
fn test_cli_options() {
    let opts = CliOptions::parse(&args(&[
        "--white",
        "random",
        "-b",
        "random",
        "--seed",
        "9",
        "--max-plies",
        "40",
        "--quiet",
    ]))
    .unwrap();
    assert_eq!(opts.white, Some(PlayerKind::Random));
    assert_eq!(opts.black, Some(PlayerKind::Random));
    assert_eq!(opts.seed, Some(9));
    assert_eq!(opts.max_plies, Some(40));
    assert!(opts.quiet);
    assert!(!opts.help);

    let config = GameConfig::resolve(&opts).unwrap();
    assert_eq!(config.white, PlayerKind::Random);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.max_plies, 40);
    assert!(!config.show_board);
}

#[test]
fn test_cli_errors() {
    assert!(CliOptions::parse(&args(&["--white"])).is_err());
    assert!(CliOptions::parse(&args(&["--white", "robot"])).is_err());
    assert!(CliOptions::parse(&args(&["--seed", "abc"])).is_err());
    assert!(CliOptions::parse(&args(&["--bogus"])).is_err());
    assert!(CliOptions::parse(&args(&["help"])).unwrap().help);
}
