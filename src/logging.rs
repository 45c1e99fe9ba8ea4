//! Log setup. wasm32 logs to the browser console; host builds use
//! `env_logger`, where `RUST_LOG` wins over the configured level.

/// Install the logger and panic hook. Safe to call more than once.
pub fn init(level: log::Level) {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // A second init fails because a logger is already set; the level
        // below still applies.
        console_log::init_with_level(log::Level::Trace).ok();
        set_level(level);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
            .try_init()
            .ok();
    }
}

pub fn set_level(level: log::Level) {
    log::set_max_level(level.to_level_filter());
}
