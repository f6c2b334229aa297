use crate::args::Cli;
use async_trait::async_trait;
use envault_core::{CancelSignal, InjectError};
use envault_providers::{inject_with_cancellation, DotenvProvider, Provider, VaultProvider};
use std::io;
use std::process::ExitStatus;
use tracing::debug;

/// The side effects of a run
///
/// This abstraction lets the run loop be tested without touching the real
/// environment or spawning processes.
#[async_trait]
pub trait Runtime: Send + Sync {
    /// Build the ordered provider list for the given flags
    fn gather(&self, cli: &Cli) -> Vec<Box<dyn Provider>>;

    /// Apply every provider to the process environment
    async fn inject(
        &self,
        signal: &CancelSignal,
        providers: &[Box<dyn Provider>],
    ) -> Result<(), InjectError>;

    /// Run `program` to completion with inherited stdio
    async fn execute(&self, program: &str, args: &[String]) -> io::Result<ExitStatus>;
}

/// Production runtime: real providers, real process environment, real child
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRuntime;

#[async_trait]
impl Runtime for SystemRuntime {
    fn gather(&self, cli: &Cli) -> Vec<Box<dyn Provider>> {
        gather_providers(cli)
    }

    async fn inject(
        &self,
        signal: &CancelSignal,
        providers: &[Box<dyn Provider>],
    ) -> Result<(), InjectError> {
        inject_with_cancellation(signal, providers).await
    }

    async fn execute(&self, program: &str, args: &[String]) -> io::Result<ExitStatus> {
        debug!("executing {} with {} argument(s)", program, args.len());
        tokio::process::Command::new(program)
            .args(args)
            .status()
            .await
    }
}

/// Dotenv first, then vault, skipping any source whose flag is empty.
///
/// Order matters: the sink never overwrites, so earlier providers win.
pub fn gather_providers(cli: &Cli) -> Vec<Box<dyn Provider>> {
    let mut providers: Vec<Box<dyn Provider>> = Vec::new();
    if !cli.dotenv.is_empty() {
        providers.push(Box::new(DotenvProvider::new(&cli.dotenv)));
    }
    if !cli.vault_path.is_empty() {
        providers.push(Box::new(VaultProvider::from_env(&cli.vault_path)));
    }
    providers
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn names(args: &[&str]) -> Vec<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        gather_providers(&cli)
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn test_default_flags_gather_dotenv_only() {
        assert_eq!(names(&["envault", "--", "true"]), vec!["dotenv"]);
    }

    #[test]
    fn test_dotenv_comes_before_vault() {
        assert_eq!(
            names(&["envault", "--vault-path", "kvv2/app", "--", "true"]),
            vec!["dotenv", "vault"]
        );
    }

    #[test]
    fn test_empty_flags_skip_sources() {
        assert!(names(&["envault", "--dotenv", "", "--", "true"]).is_empty());
        assert_eq!(
            names(&["envault", "--dotenv", "", "--vault-path", "kvv2/app", "--", "true"]),
            vec!["vault"]
        );
    }
}
