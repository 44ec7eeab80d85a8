use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;

pub fn setup<Level>(verbosity: clap_verbosity_flag::Verbosity<Level>) -> anyhow::Result<()>
where
    Level: clap_verbosity_flag::LogLevel,
{
    let env_filter = with_verbosity(EnvFilter::from_default_env(), &verbosity);

    let subscriber = tracing_subscriber::registry::Registry::default().with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(env_filter),
    );

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Only an explicit `-v`/`-q` overrides the `RUST_LOG` filter.
fn with_verbosity<Level>(
    mut env_filter: EnvFilter,
    verbosity: &clap_verbosity_flag::Verbosity<Level>,
) -> EnvFilter
where
    Level: clap_verbosity_flag::LogLevel,
{
    if let Some(level_filter) = verbosity
        .is_present()
        .then(|| verbosity.tracing_level_filter())
    {
        let directive = tracing_subscriber::filter::Directive::from(level_filter);
        env_filter = env_filter.add_directive(directive);
    }
    env_filter
}

#[cfg(test)]
mod tests {
    use clap_verbosity_flag::{InfoLevel, Verbosity};

    use super::*;

    #[test]
    fn test_env_filter_kept_without_flags() {
        let filter = with_verbosity(EnvFilter::new("debug"), &Verbosity::<InfoLevel>::new(0, 0));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_verbose_flag_adds_directive() {
        let filter = with_verbosity(EnvFilter::new("warn"), &Verbosity::<InfoLevel>::new(2, 0));
        assert!(filter.to_string().contains("trace"));
    }
}
