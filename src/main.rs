use clap::{Parser, Subcommand};

mod calculator;
mod cmd;
mod pay;
mod surface;

#[derive(Parser, Debug)]
#[command(name = "payrate", version, author)]
#[command(about = "Equivalent yearly, monthly, weekly and hourly pay rates after a flat tax")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a table of equivalent pay rates across a range
    Table(cmd::table::TableCommand),
    /// Print the format of an output row
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Table(table) => table.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
