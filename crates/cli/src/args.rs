use clap::Parser;

/// Run a command with environment variables injected from a dotenv file and
/// HashiCorp Vault. Variables already present in the environment always win.
#[derive(Debug, Clone, Parser)]
#[command(name = "envault", version)]
#[command(
    override_usage = "envault [--dotenv PATH] [--vault-path PATH] [--verbose] -- command [args...]"
)]
pub struct Cli {
    /// Path to a dotenv file (empty to skip)
    #[arg(long, value_name = "PATH", default_value = ".env")]
    pub dotenv: String,

    /// Vault KV v2 secret path, e.g. kvv2/my-service/dev/env-vars (empty to skip)
    #[arg(long, value_name = "PATH", default_value = "")]
    pub vault_path: String,

    /// Log provider activity to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["envault", "--", "env"]).unwrap();
        assert_eq!(cli.dotenv, ".env");
        assert_eq!(cli.vault_path, "");
        assert!(!cli.verbose);
        assert_eq!(cli.command, vec!["env"]);
    }

    #[test]
    fn test_flags_and_command_arguments() {
        let cli = Cli::try_parse_from([
            "envault",
            "--dotenv",
            "config/dev.env",
            "--vault-path",
            "kvv2/svc/dev/env",
            "-v",
            "--",
            "ls",
            "-la",
            "--color",
        ])
        .unwrap();
        assert_eq!(cli.dotenv, "config/dev.env");
        assert_eq!(cli.vault_path, "kvv2/svc/dev/env");
        assert!(cli.verbose);
        assert_eq!(cli.command, vec!["ls", "-la", "--color"]);
    }

    #[test]
    fn test_empty_dotenv_is_accepted() {
        let cli = Cli::try_parse_from(["envault", "--dotenv", "", "--", "true"]).unwrap();
        assert_eq!(cli.dotenv, "");
    }

    #[test]
    fn test_missing_command_is_a_usage_error() {
        let err = Cli::try_parse_from(["envault", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_help_exits_successfully() {
        let err = Cli::try_parse_from(["envault", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
