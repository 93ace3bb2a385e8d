use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Short human-readable lines for local runs.
    Compact,
    /// One JSON object per line for build hosts that collect logs.
    Json,
}

impl LogFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "team_directory=debug,info"
    } else {
        "team_directory=info"
    }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

// Logs go to stderr so stdout only carries the export summary.
fn output_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logger(format: LogFormat, verbose: bool) {
    tracing_subscriber::registry()
        .with(output_layer(format))
        .with(filter(verbose))
        .init();
}
