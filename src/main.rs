use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use mobilsoeg_profile_client::config::{LoggingSettings, Settings};
use mobilsoeg_profile_client::{
    FindProfileRequest, ProfileClient, RawResponse, RemoveAllLikesRequest, RemoveLikeRequest,
    SaveLikeRequest, Transport, TransportFailure, UpdateLikeRequest, UpdatePickupAgencyRequest,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn cli<'a, 'b>() -> App<'a, 'b> {
    App::new("mobilsoeg-profile")
        .version(VERSION)
        .about("Talks to the MobilSoeg profile service")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("CONFIG")
                .short("c")
                .long("config")
                .takes_value(true)
                .global(true)
                .help("Settings file to load instead of config/default and config/local"),
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .long("verbose")
                .global(true)
                .help("Print response headers"),
        )
        .subcommand(
            SubCommand::with_name("find")
                .about("Look up a profile by agency and loaner id")
                .arg(Arg::with_name("AGENCYID").required(true).index(1))
                .arg(Arg::with_name("LOANERID").required(true).index(2)),
        )
        .subcommand(
            SubCommand::with_name("like")
                .setting(AppSettings::AllowNegativeNumbers)
                .about("Save a like on a profile")
                .arg(Arg::with_name("PROFILE").required(true).index(1))
                .arg(Arg::with_name("ITEM").required(true).index(2))
                .arg(Arg::with_name("VALUE").required(true).index(3).allow_hyphen_values(true)),
        )
        .subcommand(
            SubCommand::with_name("update-like")
                .setting(AppSettings::AllowNegativeNumbers)
                .about("Change the value of a like")
                .arg(Arg::with_name("PROFILE").required(true).index(1))
                .arg(Arg::with_name("LIKE").required(true).index(2))
                .arg(Arg::with_name("VALUE").required(true).index(3).allow_hyphen_values(true)),
        )
        .subcommand(
            SubCommand::with_name("unlike")
                .about("Remove a like from a profile")
                .arg(Arg::with_name("PROFILE").required(true).index(1))
                .arg(Arg::with_name("LIKE").required(true).index(2)),
        )
        .subcommand(
            SubCommand::with_name("unlike-all")
                .about("Remove every like from a profile")
                .arg(Arg::with_name("PROFILE").required(true).index(1)),
        )
        .subcommand(
            SubCommand::with_name("pickup-agency")
                .about("Set the pickup agency of a profile")
                .arg(Arg::with_name("PROFILE").required(true).index(1))
                .arg(Arg::with_name("AGENCY").required(true).index(2)),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let matches = cli().get_matches();

    let settings = match matches.value_of("CONFIG") {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load configuration")?;

    init_logging(&settings.logging);

    let client = ProfileClient::new(settings.profile_service.as_ref())?;
    info!("Using profile service at {}", client.endpoint());

    let verbose = matches.is_present("VERBOSE");
    match run(&matches, &client).await {
        Ok(Some(response)) => print_response(&response, verbose),
        Ok(None) => println!("no response"),
        Err(err) => {
            error!("{}", err);
            if let Some(response) = err
                .downcast_ref::<TransportFailure>()
                .and_then(|failure| failure.response.as_ref())
            {
                print_response(response, verbose);
            }
            return Err(err);
        }
    }

    Ok(())
}

/// Dispatch the matched subcommand to the client
///
/// `Ok(None)` means a like operation got no response; its transport error
/// was dropped by the client.
async fn run<T: Transport>(
    matches: &ArgMatches<'_>,
    client: &ProfileClient<T>,
) -> Result<Option<RawResponse>> {
    let response = match matches.subcommand() {
        ("find", Some(args)) => {
            let params = FindProfileRequest {
                agency_id: arg(args, "AGENCYID"),
                loaner_id: arg(args, "LOANERID"),
            };
            Some(client.find_profile(&params).await?)
        }
        ("like", Some(args)) => {
            let params = SaveLikeRequest {
                profile_id: arg(args, "PROFILE"),
                item_id: arg(args, "ITEM"),
                value: like_value(args)?,
            };
            client.save_like(&params).await
        }
        ("update-like", Some(args)) => {
            let params = UpdateLikeRequest {
                profile_id: arg(args, "PROFILE"),
                like_id: arg(args, "LIKE"),
                value: like_value(args)?,
            };
            client.update_like(&params).await
        }
        ("unlike", Some(args)) => {
            let params = RemoveLikeRequest {
                profile_id: arg(args, "PROFILE"),
                like_id: arg(args, "LIKE"),
            };
            client.remove_like(&params).await
        }
        ("unlike-all", Some(args)) => {
            let params = RemoveAllLikesRequest {
                profile_id: arg(args, "PROFILE"),
            };
            client.remove_all_likes(&params).await
        }
        ("pickup-agency", Some(args)) => {
            let params = UpdatePickupAgencyRequest {
                profile_id: arg(args, "PROFILE"),
                pickup_agency: arg(args, "AGENCY"),
            };
            Some(client.update_pickup_agency(&params).await?)
        }
        (name, _) => return Err(anyhow!("Unknown command: {}", name)),
    };

    Ok(response)
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

// Required positional arguments are always present once clap has matched
fn arg(args: &ArgMatches, name: &str) -> String {
    args.value_of(name).unwrap_or_default().to_string()
}

fn like_value(args: &ArgMatches) -> Result<i32> {
    let raw = args.value_of("VALUE").unwrap_or_default();
    raw.parse()
        .with_context(|| format!("Like value must be an integer, got {:?}", raw))
}

fn print_response(response: &RawResponse, verbose: bool) {
    println!("HTTP {}", response.status);
    if verbose {
        for (name, value) in &response.headers {
            println!("{}: {}", name, value);
        }
    }
    if let Some(body) = &response.body {
        println!();
        println!("{}", body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mobilsoeg_profile_client::models::{Method, ProfileRequest};
    use mobilsoeg_profile_client::{ClientConfig, TransportError};
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    /// Fails every request, or answers 200, and records what it was sent
    #[derive(Default)]
    struct StubTransport {
        fail: bool,
        sent: Mutex<Vec<ProfileRequest>>,
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: ProfileRequest) -> Result<RawResponse, TransportFailure> {
            self.sent.lock().unwrap().push(request);
            if self.fail {
                return Err(TransportFailure::without_response(TransportError::Other(
                    "connection refused".to_string(),
                )));
            }
            Ok(RawResponse {
                status_code: 200,
                status: "200 OK".to_string(),
                headers: vec![],
                body: Some("{}".to_string()),
            })
        }
    }

    fn client(fail: bool) -> ProfileClient<StubTransport> {
        let transport = StubTransport {
            fail,
            ..Default::default()
        };
        ProfileClient::with_transport(Some(&ClientConfig::new("http://host/")), transport).unwrap()
    }

    fn parse(args: &[&str]) -> ArgMatches<'static> {
        let mut argv = vec!["mobilsoeg-profile"];
        argv.extend_from_slice(args);
        cli().get_matches_from_safe(argv).unwrap()
    }

    #[test]
    fn test_like_value_rejects_non_integer() {
        let matches = parse(&["like", "42", "item-1", "x"]);
        let (_, args) = matches.subcommand();
        assert_err!(like_value(args.unwrap()));
    }

    #[test]
    fn test_like_value_accepts_negative() {
        let matches = parse(&["update-like", "42", "7", "-1"]);
        let (_, args) = matches.subcommand();
        assert_eq!(assert_ok!(like_value(args.unwrap())), -1);
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        let argv = vec!["mobilsoeg-profile", "unlike", "42"];
        assert!(cli().get_matches_from_safe(argv).is_err());
        assert!(cli().get_matches_from_safe(vec!["mobilsoeg-profile"]).is_err());
    }

    #[tokio::test]
    async fn test_like_with_bad_value_sends_nothing() {
        let client = client(false);
        let matches = parse(&["like", "42", "item-1", "x"]);

        assert_err!(run(&matches, &client).await);
        assert!(client.transport().sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_like_dispatches_save() {
        let client = client(false);
        let matches = parse(&["like", "42", "item-1", "1"]);

        let response = assert_ok!(run(&matches, &client).await);
        assert_eq!(response.map(|r| r.status_code), Some(200));

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://host/api/MobilSoegProfiles/42/likes");
        assert_eq!(sent[0].body.form_value("item_id"), Some("item-1"));
    }

    #[tokio::test]
    async fn test_unlike_all_without_response_is_ok() {
        let client = client(true);
        let matches = parse(&["unlike-all", "42"]);

        let response = assert_ok!(run(&matches, &client).await);
        assert!(response.is_none());

        let sent = client.transport().sent.lock().unwrap();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].url, "http://host/api/MobilSoegProfiles/42/likes");
    }

    #[tokio::test]
    async fn test_pickup_agency_failure_is_an_error() {
        let client = client(true);
        let matches = parse(&["pickup-agency", "42", "710104"]);

        let err = assert_err!(run(&matches, &client).await);
        assert!(err.downcast_ref::<TransportError>().is_some());
    }

    #[tokio::test]
    async fn test_find_failure_keeps_transport_failure() {
        let client = client(true);
        let matches = parse(&["find", "710100", "0101001234"]);

        let err = assert_err!(run(&matches, &client).await);
        let failure = err.downcast_ref::<TransportFailure>().unwrap();
        assert!(failure.response.is_none());
    }
}
