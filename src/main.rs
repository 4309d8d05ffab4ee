use anomaly_upload::{cli, config, error, logging, runner, service};
use anomaly_upload_common::UploadController;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use service::HttpAnomalyService;
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Columns { file } => {
            let config = Config::load()?.with_overrides(cli.base_url);
            config.validate()?;
            let service = connect(&config)?;

            let mut controller = UploadController::with_contamination(config.default_contamination);
            controller.select_file(runner::load_file(&file)?);
            runner::load_columns(&mut controller, &service).await?;

            for column in controller.session().columns() {
                println!("{}", column);
            }
        }

        Commands::Detect { file, columns, contamination, output } => {
            let config = Config::load()?.with_overrides(cli.base_url);
            config.validate()?;
            let service = connect(&config)?;

            let mut controller = UploadController::with_contamination(config.default_contamination);
            controller.select_file(runner::load_file(&file)?);

            // 1. カラム一覧
            runner::load_columns(&mut controller, &service).await?;
            eprintln!("✔ {}個のカラムを検出", controller.session().columns().len());

            // 2. カラム選択
            let selected = match columns {
                Some(arg) => cli::parse_column_list(&arg),
                None => runner::prompt_columns(controller.session().columns())?,
            };
            controller.set_selected_columns(selected)?;

            if let Some(value) = contamination {
                controller.set_contamination(value);
            }

            // 3. 異常検知
            runner::run_detection(&mut controller, &service).await?;

            if let Some(result) = controller.session().result() {
                let json = result.to_pretty_string();
                println!("{}", json);

                if let Some(path) = output {
                    std::fs::write(&path, json)?;
                    eprintln!("✔ 結果を保存: {}", path.display());
                }
            }
        }

        Commands::Config { set_base_url, set_contamination, show } => {
            let mut config = Config::load()?;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url);
                changed = true;
            }

            if let Some(value) = set_contamination {
                config.set_default_contamination(value)?;
                changed = true;
            }

            if changed {
                config.validate()?;
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  baseUrl: {}", config.base_url);
                println!("  defaultContamination: {}", config.default_contamination);
                println!("  timeoutSeconds: {}", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

fn connect(config: &Config) -> Result<HttpAnomalyService> {
    HttpAnomalyService::new(
        config.base_url.trim(),
        Duration::from_secs(config.timeout_seconds),
    )
}
