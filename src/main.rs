use clap::Parser;
use storefront::cli::Cli;
use storefront::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    storefront::logging::init_tracing(cli.log.as_deref());

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    storefront::ui::runtime::run(&config)
}
