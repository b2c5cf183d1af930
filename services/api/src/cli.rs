use crate::demo::{run_demo, run_diagnose, DemoArgs, DiagnoseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use life_compass::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Life Compass",
    about = "Score life-balance self-assessments and serve localized diagnosis reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Diagnose an answers file and print the report
    Diagnose(DiagnoseArgs),
    /// Walk a sample respondent through submit, unlock, and plan generation
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Diagnose(args) => run_diagnose(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn diagnose_parses_locale_and_flags() {
        let cli = Cli::try_parse_from([
            "life-compass",
            "diagnose",
            "--answers",
            "answers.json",
            "--locale",
            "pt-BR",
            "--unlock",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Diagnose(args)) => {
                assert_eq!(args.locale.as_deref(), Some("pt-BR"));
                assert!(args.unlock);
                assert!(!args.json);
            }
            other => panic!("expected diagnose command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_locales_are_left_for_the_service_to_resolve() {
        let cli = Cli::try_parse_from(["life-compass", "demo", "--locale", "fr"])
            .expect("arguments parse");

        match cli.command {
            Some(Command::Demo(args)) => assert_eq!(args.locale.as_deref(), Some("fr")),
            other => panic!("expected demo command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["life-compass"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
