//! ログ初期化
//!
//! `RUST_LOG` があればそれを優先する。なければ `--verbose` でdebug、通常はwarn。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "anomaly_upload=debug,anomaly_upload_common=debug"
    } else {
        "warn"
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .try_init();
}
