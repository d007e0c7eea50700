use std::io::Read;
use std::process::ExitCode;

use amara_engine::amara::replay::{self, ReplayScript};
use amara_engine::amara::AmaraError;
use amara_engine::config::Config;
use amara_engine::logging;

fn load_script(config: &Config) -> Result<ReplayScript, AmaraError> {
    match &config.script_path {
        Some(path) => ReplayScript::load(path),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            ReplayScript::from_json(&raw)
        }
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env().with_args(std::env::args().skip(1));
    let _log_guard = logging::init_tracing(&config);

    let result = load_script(&config).and_then(|script| {
        let assessment = replay::run(&script)?;
        Ok(serde_json::to_string_pretty(&assessment)?)
    });

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "replay failed");
            ExitCode::FAILURE
        }
    }
}
