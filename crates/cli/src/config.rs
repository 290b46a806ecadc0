//! Simulator configuration from command-line arguments and environment variables.
//!
//! ```text
//! gilded-rose [DAYS] [INVENTORY_JSON] [--quality-policy <POLICY>]
//! ```
//!
//! Every option falls back to its `GILDED_ROSE_*` environment variable, then
//! to its default.

use std::path::PathBuf;

use clap::Parser;

use gildedrose_inventory::StartingQualityPolicy;

pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";
pub const INVENTORY_ENV: &str = "GILDED_ROSE_INVENTORY";
pub const QUALITY_POLICY_ENV: &str = "GILDED_ROSE_QUALITY_POLICY";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gilded-rose", version, about = "Age an inventory day by day and print its stock")]
pub struct SimulationConfig {
    /// Number of days to report and advance.
    #[arg(value_name = "DAYS", env = DAYS_ENV, default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// JSON inventory file; the built-in fixture is used when absent.
    #[arg(value_name = "INVENTORY_JSON", env = INVENTORY_ENV)]
    pub inventory_path: Option<PathBuf>,

    /// How out-of-range starting quality is handled: pass-through, clamp or reject.
    #[arg(
        long = "quality-policy",
        value_name = "POLICY",
        env = QUALITY_POLICY_ENV,
        default_value_t = StartingQualityPolicy::PassThrough
    )]
    pub quality_policy: StartingQualityPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            inventory_path: None,
            quality_policy: StartingQualityPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<SimulationConfig, clap::Error> {
        SimulationConfig::try_parse_from(std::iter::once("gilded-rose").chain(args.iter().copied()))
    }

    fn env_of(id: &str) -> Option<String> {
        SimulationConfig::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_env())
            .map(|env| env.to_string_lossy().into_owned())
    }

    #[test]
    fn command_definition_is_valid() {
        SimulationConfig::command().debug_assert();
    }

    #[test]
    fn positional_args_set_days_and_inventory() {
        let config = parse(&["5", "stock.json"]).unwrap();
        assert_eq!(config.days, 5);
        assert_eq!(config.inventory_path, Some(PathBuf::from("stock.json")));
    }

    #[test]
    fn quality_policy_flag_uses_from_str() {
        let config = parse(&["1", "--quality-policy", "reject"]).unwrap();
        assert_eq!(config.quality_policy, StartingQualityPolicy::Reject);

        let config = parse(&["--quality-policy", "clamp"]).unwrap();
        assert_eq!(config.quality_policy, StartingQualityPolicy::Clamp);
    }

    #[test]
    fn every_option_is_backed_by_an_env_var() {
        assert_eq!(env_of("days").as_deref(), Some(DAYS_ENV));
        assert_eq!(env_of("inventory_path").as_deref(), Some(INVENTORY_ENV));
        assert_eq!(env_of("quality_policy").as_deref(), Some(QUALITY_POLICY_ENV));
    }

    #[test]
    fn defaults_match_default_impl() {
        let command = SimulationConfig::command();
        let days = command
            .get_arguments()
            .find(|arg| arg.get_id() == "days")
            .map(|arg| {
                arg.get_default_values()
                    .iter()
                    .map(|value| value.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
            })
            .unwrap();
        assert_eq!(days, vec!["2".to_string()]);
        assert_eq!(SimulationConfig::default().days, DEFAULT_DAYS);
        assert_eq!(
            SimulationConfig::default().quality_policy,
            StartingQualityPolicy::PassThrough
        );
    }

    #[test]
    fn invalid_days_is_rejected() {
        let err = parse(&["soon"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(parse(&["-1"]).is_err());
    }

    #[test]
    fn invalid_policy_is_rejected() {
        let err = parse(&["--quality-policy", "lenient"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let err = parse(&["1", "a.json", "b.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_and_version_are_handled() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["--version"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    }
}
