use clap::Parser;
use clap::error::ErrorKind;

use judge_checker::EXIT_INPUT_ERROR;
use judge_checker::cli::Cli;
use judge_checker::commands::run_check;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_INPUT_ERROR,
            };
            std::process::exit(code);
        }
    };

    std::process::exit(run_check(&cli));
}
