use std::env::args_os;
use std::process::ExitCode;

use rgb_probe::{inspect_image, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match inspect_image(&arguments) {
        Ok(messages) => {
            for message in messages {
                println!("{}", message);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Inspection failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
