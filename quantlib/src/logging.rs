use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

// [timestamp][LEVEL] message
const PATTERN: &str = "[{d(%Y-%m-%d %H:%M:%S%.3f)}][{l}] {m}{n}";

// Console output goes to stderr so stdout only carries rendered observations.
fn console_appender() -> ConsoleAppender {
    ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build()
}

pub fn build_config(
    level: LevelFilter,
    path: Option<&str>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut builder =
        Config::builder().appender(Appender::builder().build("console", Box::new(console_appender())));
    let mut root = Root::builder().appender("console");

    if let Some(path) = path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(level))?)
}

// Log to stderr and to the file at `path`
pub fn configure_logger(path: &str) -> Result<log4rs::Handle, Box<dyn std::error::Error>> {
    let config = build_config(LevelFilter::Info, Some(path))?;
    Ok(log4rs::init_config(config)?)
}

pub fn configure_console_logger(
    level: LevelFilter,
) -> Result<log4rs::Handle, Box<dyn std::error::Error>> {
    let config = build_config(level, None)?;
    Ok(log4rs::init_config(config)?)
}
