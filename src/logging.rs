use flexi_logger::{Logger, LoggerHandle, WriteMode};
use log::error;

/// Log setup for embedding applications. The library itself only talks to
/// the `log` facade; call this (or install your own logger) before building
/// a [`crate::Responder`] to see load diagnostics.
pub fn init() -> LoggerHandle {
    let logger = Logger::try_with_str("warn,replyomat=debug,replyomat_model=debug")
        .expect("log config text")
        .log_to_stderr()
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .expect("log init");

    let orig_hook = std::panic::take_hook();
    let logger_for_panic = logger.clone();
    std::panic::set_hook(Box::new(move |panic_info| {
        // log and flush before the default handler runs
        error!("Panic: {panic_info}");
        logger_for_panic.flush();
        orig_hook(panic_info);
    }));
    logger
}
