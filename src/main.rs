use clap::Parser;
use timesheet_report::core::ConfigProvider;
use timesheet_report::utils::{logger, validation::Validate};
use timesheet_report::{CliConfig, LocalStorage, ReportEngine, ReportError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_dir().to_string());
    let engine = ReportEngine::new(storage);
    tracing::debug!("Registered report types: {:?}", engine.registry().report_types());

    let stdout = std::io::stdout();
    let mut trace = stdout.lock();

    match engine.run(&config, &mut trace) {
        Ok(_) => Ok(()),
        // 未知的報表類型不算失敗：列出可用類型後正常結束
        Err(e @ ReportError::UnknownReportTypeError { .. }) => {
            println!("{}", e.user_friendly_message());
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Report failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
