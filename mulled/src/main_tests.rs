use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("mulled").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_arguments_lists_all_images() {
    assert_eq!(parse(&[]).mode(), Mode::AllImages);
}

#[test]
fn test_positional_arguments_select_named_images() {
    let cli = parse(&["samtools", "bwa"]);
    assert_eq!(
        cli.mode(),
        Mode::Images(vec!["samtools".to_string(), "bwa".to_string()])
    );
}

#[test]
fn test_builders_flag_ignores_positionals() {
    assert_eq!(parse(&["--builders"]).mode(), Mode::Builders);
    assert_eq!(parse(&["--builders", "samtools"]).mode(), Mode::Builders);
}

#[test]
fn test_endpoint_flag() {
    let cli = parse(&["--endpoint", "http://localhost:8080/api/v1/"]);
    assert_eq!(
        cli.overrides().endpoint.as_deref(),
        Some("http://localhost:8080/api/v1/")
    );
}

#[test]
fn test_unset_flags_do_not_override() {
    let overrides = parse(&[]).overrides();

    assert!(overrides.endpoint.is_none());
    assert!(overrides.color.is_none());
    assert!(overrides.format.is_none());
    assert!(overrides.timeout.is_none());
}

#[test]
fn test_style_flags() {
    let overrides = parse(&["-f", "json", "--color", "never", "--timeout", "5"]).overrides();

    assert_eq!(overrides.format, Some(format::OutputFormat::Json));
    assert_eq!(overrides.color, Some(format::ColorChoice::Never));
    assert_eq!(overrides.timeout, Some(5));
}

#[test]
fn test_verbose_count() {
    assert_eq!(parse(&["-vv"]).verbose, 2);
}

#[test]
fn test_completions_flag() {
    let cli = parse(&["--completions", "bash"]);
    assert_eq!(cli.completions, Some(clap_complete::Shell::Bash));
}

#[test]
fn test_zero_timeout_is_accepted() {
    let overrides = parse(&["--timeout", "0"]).overrides();
    assert_eq!(overrides.timeout, Some(0));
}

#[test]
fn test_invalid_timeout_is_rejected() {
    let result = Cli::try_parse_from(["mulled", "--timeout", "soon"]);
    assert!(result.is_err());
}
