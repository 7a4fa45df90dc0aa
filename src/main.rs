use clap::Parser;
use flightmr::app::{handle_fatal_error, init_logging, AppConfig};
use flightmr::cli::{execute_command, Cli};
use flightmr::config::FlightConfig;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let app_config = match AppConfig::new(verbose) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e, verbose),
    };

    // Configuration is read before logging so its log_level can take effect.
    let config = FlightConfig::discover(cli.config.as_deref(), &app_config.working_dir);
    let app_config = app_config.with_log_level(
        config
            .as_ref()
            .ok()
            .and_then(|c| c.log_level.clone()),
    );
    init_logging(&app_config);

    let result = config
        .map_err(anyhow::Error::from)
        .and_then(|config| execute_command(cli.command, cli.format, &config));

    if let Err(e) = result {
        handle_fatal_error(e, verbose);
    }
}
