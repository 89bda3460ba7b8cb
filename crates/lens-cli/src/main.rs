use clap::Parser;
use lens_core::Calculator;

mod cli;
mod output;

use cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    if args.table {
        print!("{}", output::format_table(args.distance, args.ground_ratio, args.model));
        return Ok(());
    }

    let calc = Calculator::new(args.params(), args.profile(), args.model);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&calc.report())?);
    } else {
        print!("{}", output::format_report(&calc));
    }
    Ok(())
}
