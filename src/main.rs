use anyhow::Result;
use kcrest::args::Args;
use kcrest::run;
use log::LevelFilter;
use std::env;

fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if env::var("RUST_LOG").is_err() && debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug);
    if let Some(env_file) = &args.env_file {
        log::debug!("Loaded variables from {}", env_file.display());
    }

    println!("{}", run(args).await?);
    Ok(())
}
