use std::env;
use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Инициализация логгера для бинарей.
///
/// Фильтры берутся из `RUST_LOG`, без неё – уровень Info.
/// `compact` убирает время и target (удобно, когда время пишет сам супервизор).
pub fn init_logger(compact: bool) {
    let mut builder = Builder::new();

    if compact {
        builder.format(|formatter, record| {
            writeln!(formatter, "[{}]: {}", record.level(), record.args())
        });
    } else {
        builder.format(|formatter, record| {
            writeln!(
                formatter,
                "{} [{}] ({}): {}",
                formatter.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    }

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else {
        builder.filter(None, LevelFilter::Info);
    }

    // Повторная инициализация (например, из тестов) не ошибка.
    let _ = builder.try_init();
}
