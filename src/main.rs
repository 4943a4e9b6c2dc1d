use polyzone::cli::CliArgs;
use polyzone::init_logging;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse_args();

    // Initialize logging
    init_logging(args.log_json)?;
    tracing::debug!("polyzone {} built {}", polyzone::VERSION, polyzone::BUILD_DATE);

    args.run()
}
