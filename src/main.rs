mod cli;

use keygate_client::config::{init_logging, load_config, print_schema};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // "schema" prints the config schema and needs no config of its own.
    if args.first().map(String::as_str) == Some("schema") {
        print_schema();
        return;
    }

    let config = load_config();
    init_logging(&config.logging);

    if let Err(e) = cli::run(&config, &args).await {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}
