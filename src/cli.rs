// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   site-crawler <BASE_URL> <CONCURRENCY> <MAX_PAGES>
//
// clap collects the positional values; we check the count ourselves so
// that too few / too many arguments give our own short messages:
//   "no website provided" / "too many arguments provided"
// =============================================================================

use clap::Parser;
use std::num::ParseIntError;
use thiserror::Error;

use crate::crawl::CrawlConfig;

#[derive(Parser, Debug)]
#[command(
    name = "site-crawler",
    version = "0.1.0",
    // No flags at all: "--help" is just one more (too few) argument
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Crawl one website and report how often each internal page is linked",
    long_about = "site-crawler follows every same-host link starting from BASE_URL, \
                  with at most CONCURRENCY pages in flight and at most MAX_PAGES distinct pages, \
                  then prints how many times each page was linked."
)]
pub struct Cli {
    /// BASE_URL CONCURRENCY MAX_PAGES
    ///
    /// Example: site-crawler https://blog.boot.dev 3 25
    #[arg(value_name = "ARGS", allow_hyphen_values = true, allow_negative_numbers = true)]
    pub args: Vec<String>,
}

/// Problems with the command line. All of them stop the program before
/// anything is crawled.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no website provided")]
    NoWebsite,

    #[error("too many arguments provided")]
    TooManyArguments,

    #[error("{0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid {name}: {source}")]
    InvalidNumber {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
}

impl Cli {
    // Validates the raw arguments and builds the crawl configuration
    //
    // Concurrency below 1 becomes 1; a negative page budget becomes 0
    // (nothing gets crawled).
    pub fn into_config(self) -> Result<CrawlConfig, CliError> {
        let [base_url, concurrency, max_pages] = match <[String; 3]>::try_from(self.args) {
            Ok(args) => args,
            Err(args) if args.len() < 3 => return Err(CliError::NoWebsite),
            Err(_) => return Err(CliError::TooManyArguments),
        };

        let concurrency = parse_number("concurrency", &concurrency)?;
        let max_pages = parse_number("max pages", &max_pages)?;

        let config = CrawlConfig::new(
            &base_url,
            usize::try_from(concurrency).unwrap_or(0),
            usize::try_from(max_pages).unwrap_or(0),
        )?;
        Ok(config)
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<i64, CliError> {
    value
        .parse()
        .map_err(|source| CliError::InvalidNumber { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("site-crawler").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_valid_arguments() {
        let config = cli(&["https://blog.boot.dev", "3", "25"])
            .into_config()
            .unwrap();
        assert_eq!(config.raw_base, "https://blog.boot.dev");
        assert_eq!(config.concurrency, 3);
        assert_eq!(config.max_pages, 25);
    }

    #[test]
    fn test_too_few_arguments() {
        let err = cli(&["https://blog.boot.dev", "3"]).into_config().unwrap_err();
        assert!(matches!(err, CliError::NoWebsite));
        assert_eq!(err.to_string(), "no website provided");

        let err = cli(&[]).into_config().unwrap_err();
        assert!(matches!(err, CliError::NoWebsite));
    }

    #[test]
    fn test_too_many_arguments() {
        let err = cli(&["https://blog.boot.dev", "3", "25", "extra"])
            .into_config()
            .unwrap_err();
        assert_eq!(err.to_string(), "too many arguments provided");
    }

    #[test]
    fn test_concurrency_below_one_is_clamped() {
        let config = cli(&["https://blog.boot.dev", "-4", "25"])
            .into_config()
            .unwrap();
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn test_non_integer_is_rejected() {
        let err = cli(&["https://blog.boot.dev", "three", "25"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber { name: "concurrency", .. }));
    }

    #[test]
    fn test_help_and_version_are_plain_arguments() {
        let err = cli(&["--help"]).into_config().unwrap_err();
        assert!(matches!(err, CliError::NoWebsite));

        let err = cli(&["-V"]).into_config().unwrap_err();
        assert!(matches!(err, CliError::NoWebsite));
    }

    #[test]
    fn test_bad_url_is_rejected() {
        let err = cli(&["blog.boot.dev", "3", "25"]).into_config().unwrap_err();
        assert!(matches!(err, CliError::InvalidUrl(_)));
    }
}
