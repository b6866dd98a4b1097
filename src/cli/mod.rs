mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::GraphError;

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Bar(a) => handlers::bar(a),
        parse::Command::Scatter(a) => handlers::xy(a, false),
        parse::Command::Line(a) => handlers::xy(a, true),
        parse::Command::Pie(a) => handlers::pie(a),
        parse::Command::Hist(a) => handlers::hist(a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
