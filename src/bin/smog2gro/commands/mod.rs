mod convert;

use convert::run_convert;

use anyhow::Result;

use crate::cli::Cli;
use crate::display::Context;

pub fn run(cli: Cli, ctx: Context) -> Result<()> {
    run_convert(cli, ctx)
}
