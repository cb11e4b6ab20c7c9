use clap::Parser;

mod commands;
mod error;
mod models;

#[derive(Parser, Debug)]
#[clap(name = "io-cli")]
#[clap(about = "Read files through a buffering reader", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: commands::Commands,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    args.command.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_lines_with_flags() {
        let args = Cli::try_parse_from([
            "io-cli",
            "lines",
            "myfile.txt",
            "--buffer-size",
            "4",
            "--read-size",
            "3",
        ])
        .unwrap();
        assert!(matches!(args.command, commands::Commands::Lines(_)));
    }
}
