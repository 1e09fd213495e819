use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("judge-checker").chain(args.iter().copied()))
}

#[test]
fn parses_three_positional_paths() {
    let cli = parse(&["tc.in", "tc.out", "user.out"]).unwrap();

    assert_eq!(cli.input, PathBuf::from("tc.in"));
    assert_eq!(cli.reference, PathBuf::from("tc.out"));
    assert_eq!(cli.candidate, PathBuf::from("user.out"));
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert!(cli.format.is_none());
    assert!(!cli.no_config);
}

#[test]
fn rejects_too_few_arguments() {
    let err = parse(&["tc.in", "tc.out"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn rejects_too_many_arguments() {
    let err = parse(&["tc.in", "tc.out", "user.out", "extra"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn parses_options() {
    let cli = parse(&[
        "tc.in",
        "tc.out",
        "user.out",
        "-vv",
        "--quiet",
        "--format",
        "json",
        "--color",
        "never",
        "--config",
        "checker.toml",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert_eq!(cli.color, ColorChoice::Never);
    assert_eq!(cli.config, Some(PathBuf::from("checker.toml")));
}

#[test]
fn rejects_unknown_format() {
    assert!(parse(&["a", "b", "c", "--format", "xml"]).is_err());
}

#[test]
fn color_choice_converts_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
