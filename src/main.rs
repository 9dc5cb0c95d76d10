use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use mutil::MUtil;
use mutil::config::{Config, config_path};
use mutil::host::{HostInfo, StaticHost};
use mutil::logging::init_logging;
use mutil::scheme::{decode_url_string, encode_url_string};
use mutil::util::gregorian_date_string;
use mutil::version::{VersionTarget, in_range_with_delimiter};

#[derive(Parser)]
#[command(name = "mutil")]
#[command(version, about = "Version range and URL scheme checks for mobile apps")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/mutil/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check MIN <= CURRENT <= MAX
    InRange {
        current: String,
        min: String,
        max: String,
    },
    /// Check a version from a host info file against a range
    Check {
        #[arg(long, value_enum)]
        target: Target,
        #[arg(long)]
        min: String,
        #[arg(long)]
        max: String,
        /// JSON bundle info dictionary
        #[arg(long)]
        host_info: PathBuf,
        /// OS version to check when --target os
        #[arg(long)]
        os_version: Option<String>,
    },
    /// Check whether a scheme is registered in a host info file
    Scheme {
        candidate: String,
        #[arg(long)]
        host_info: PathBuf,
    },
    /// Percent-encode every non-alphanumeric character
    Encode { text: String },
    /// Decode percent escapes
    Decode { text: String },
    /// Print the current local time
    Date {
        /// LDML pattern, e.g. "yyyy-MM-dd HH:mm"
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Os,
    App,
    Build,
}

impl From<Target> for VersionTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Os => VersionTarget::OsVersion,
            Target::App => VersionTarget::AppVersion,
            Target::Build => VersionTarget::BuildVersion,
        }
    }
}

fn load_host(path: &Path, os_version: Option<String>) -> anyhow::Result<StaticHost> {
    let info = HostInfo::load(path)
        .with_context(|| format!("loading host info from {}", path.display()))?;
    let host = StaticHost::new(info);
    Ok(match os_version {
        Some(version) => host.with_os_version(version),
        None => host,
    })
}

fn exit_code(passed: bool) -> ExitCode {
    println!("{}", passed);
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config_file = cli.config.unwrap_or_else(config_path);
    let config = Config::load(&config_file)?;
    let _guard = init_logging(&config.logging)?;

    match cli.command {
        Command::InRange { current, min, max } => Ok(exit_code(in_range_with_delimiter(
            &current,
            &min,
            &max,
            config.version_delimiter,
        ))),
        Command::Check {
            target,
            min,
            max,
            host_info,
            os_version,
        } => {
            let util = MUtil::new(load_host(&host_info, os_version)?)
                .with_delimiter(config.version_delimiter);
            Ok(exit_code(util.check_version_range(target.into(), &min, &max)))
        }
        Command::Scheme {
            candidate,
            host_info,
        } => {
            let util = MUtil::new(load_host(&host_info, None)?);
            Ok(exit_code(util.is_app_scheme(&candidate)))
        }
        Command::Encode { text } => {
            println!("{}", encode_url_string(&text));
            Ok(ExitCode::SUCCESS)
        }
        Command::Decode { text } => {
            let decoded = decode_url_string(&text).context("invalid percent encoding")?;
            println!("{}", decoded);
            Ok(ExitCode::SUCCESS)
        }
        Command::Date { format } => {
            let pattern = format.unwrap_or(config.date_format);
            println!("{}", gregorian_date_string(&chrono::Local::now(), &pattern)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
