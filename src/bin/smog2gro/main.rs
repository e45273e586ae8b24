use std::process::ExitCode;

use env_logger::Env;

mod cli;
mod commands;
mod display;
mod io;
mod util;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = cli::parse();
    let ctx = display::Context::detect().with_quiet(cli.quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::run(cli, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
