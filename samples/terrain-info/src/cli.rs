use std::str::FromStr;

use hedron::AttributeUsage;
use nalgebra::{Point3, Scalar};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// A buffer of the terrain geometry which can be printed in full.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Dump {
    Position,
    Normal,
    Uv,
    Index,
}

impl Dump {
    /// The attribute this names, or `None` for the index buffer.
    pub fn usage(self) -> Option<AttributeUsage> {
        match self {
            Dump::Position => Some(AttributeUsage::Position),
            Dump::Normal => Some(AttributeUsage::Normal),
            Dump::Uv => Some(AttributeUsage::Texcoord(0)),
            Dump::Index => None,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,strata=info,hedron=info,terrain_info=info",
        env = "TERRAIN_INFO_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// How many times to request the geometry before reporting on it
    #[arg(short, long, default_value_t = 1)]
    pub repeat: usize,
    /// Print one of the packed buffers, one vertex (or primitive) per line
    #[arg(short, long)]
    pub dump: Option<Dump>,
    /// Report whether this point lies within the terrain's bounds
    #[arg(short, long, value_parser = parse_point3::<f32>, value_name = "X,Y,Z")]
    pub probe: Option<Point3<f32>>,
}

fn parse_point3<R: FromStr + Scalar>(
    s: &str,
) -> Result<Point3<R>, Box<dyn std::error::Error + Send + Sync + 'static>>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let mut split = s.trim().split(',');
    let mut next = || -> Result<R, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let part = split.next().ok_or("expected three comma-separated values")?;
        Ok(R::from_str(part.trim())?)
    };
    let (x, y, z) = (next()?, next()?, next()?);
    if split.next().is_some() {
        return Err("expected three comma-separated values".into());
    }
    Ok(nalgebra::point![x, y, z])
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
