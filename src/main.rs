use clap::Parser;
use specific_data::adapters::terminal;
use specific_data::core::{Notice, Notifier};
use specific_data::utils::{logger, validation::Validate};
use specific_data::{
    CliConfig, ElementPipeline, EtlEngine, LocalStorage, RunOutcome, SpecificDataError,
    StdinAnswers, TerminalNotifier,
};

fn main() {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting specific-data");

    terminal::set_color(!config.no_color);
    let mut notifier = TerminalNotifier::new(false);

    // 載入設定檔並驗證，任何錯誤都在讀取資料前結束
    if let Err(e) = config.load_settings().and_then(|_| config.validate()) {
        fail(&mut notifier, &e);
    }
    terminal::set_color(config.color_enabled());
    tracing::debug!("CLI config: {:?}", config);

    let notices = TerminalNotifier::new(config.clear_screen_enabled());
    let pipeline = ElementPipeline::new(LocalStorage::new(), config, notices, StdinAnswers::new());
    let mut engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(RunOutcome::NothingSelected) => {
            tracing::info!("Nothing selected, no files written");
        }
        Ok(RunOutcome::Exported(targets)) => {
            tracing::info!("Export completed: {} file(s) written", targets.len());
        }
        Err(e) => fail(&mut notifier, &e),
    }
}

fn fail(notifier: &mut TerminalNotifier, e: &SpecificDataError) -> ! {
    tracing::error!(
        "specific-data failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

    notifier.notify(Notice::Error(&e.user_friendly_message()));
    std::process::exit(e.exit_code());
}
