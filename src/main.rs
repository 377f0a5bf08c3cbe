mod alerts;
mod config;
mod monitor;
mod session;
mod trajectory;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use proximity_core::{GeoPosition, ProximityEvaluator};

use alerts::{AlertDispatcher, AlertTarget, CsvLogSink, WebhookSink};
use config::{validate_threshold, AppConfig};
use monitor::run_sweep;
use session::{Role, Session};
use trajectory::load_trajectory;

#[derive(Parser, Debug)]
#[command(about = "Aircraft proximity alerting over recorded trajectories", version)]
struct Args {
    /// Trajectory CSV file to sweep
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Ground unit latitude in decimal degrees (WGS-84)
    #[arg(long)]
    lat: Option<f64>,

    /// Ground unit longitude in decimal degrees (WGS-84)
    #[arg(long)]
    lon: Option<f64>,

    /// Ground unit elevation in meters (defaults to 0 when --lat/--lon are given)
    #[arg(long)]
    elev: Option<f64>,

    /// Proximity threshold in meters (overrides the config file)
    #[arg(long)]
    threshold: Option<f64>,

    /// Who the alert is addressed to
    #[arg(long, value_enum)]
    notify: Option<AlertTarget>,

    /// Append alerts to this CSV log file
    #[arg(long)]
    alert_log: Option<PathBuf>,

    /// POST alerts as JSON to this URL
    #[arg(long)]
    webhook_url: Option<String>,

    /// Account username (defaults to the Command Center role when omitted)
    #[arg(long)]
    username: Option<String>,

    /// Account password
    #[arg(long)]
    password: Option<String>,

    /// Print the config file path and effective settings, then exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = AppConfig::load()?;

    if args.show_config {
        return print_config(&config);
    }

    let mut session = resolve_session(&args)?;
    let role = session.role().unwrap_or(Role::CommandCenter);

    if role != Role::CommandCenter {
        println!("Logged in as {}", role.display_name());
        print_dashboard(&session);
        return Ok(());
    }

    println!("Command Center Dashboard");

    let csv = args
        .csv
        .as_ref()
        .ok_or("--csv <file> is required to run a proximity check")?;
    let threshold_m = validate_threshold(args.threshold.unwrap_or(config.threshold_m))?;
    let notify = args.notify.unwrap_or(config.notify);
    let unit = resolve_ground_unit(&args, &config)?;
    let samples = load_trajectory(csv)?;

    let evaluator = ProximityEvaluator::new(threshold_m);
    let mut dispatcher = build_dispatcher(&args, &config)?;
    let report = run_sweep(&unit, &samples, &evaluator, notify, &mut dispatcher)?;
    info!("Raised {} alerts over {} samples", report.alert_count(), report.samples_checked);

    println!(
        "Checked {} samples against a {:.1} m threshold",
        report.samples_checked, threshold_m
    );

    for alert in &report.alerts {
        println!(
            "Alert: aircraft at sample {} is within the proximity threshold ({:.1} m)",
            alert.sample_index, alert.distance_m
        );
    }

    if report.alerts.is_empty() {
        println!("No aircraft within the proximity threshold.");
    } else {
        session.mark_alert_sent();
        println!("Alert sent to {}!", notify.display_name());
    }

    if let Some(closest) = report.closest {
        println!(
            "Closest approach: {:.1} m at sample {}",
            closest.distance_m, closest.sample_index
        );
    }

    Ok(())
}

/// Build a session from the command-line credentials.
///
/// With no credentials the session runs as Command Center, matching the
/// demo setup. Supplying only one of the two flags is an error rather
/// than a silent fallback.
fn resolve_session(args: &Args) -> Result<Session, Box<dyn Error>> {
    match (&args.username, &args.password) {
        (Some(username), Some(password)) => {
            let mut session = Session::new();
            session.login(username, password)?;
            Ok(session)
        }
        (None, None) => {
            info!("No credentials supplied; assuming Command Center role");
            Ok(Session::with_role(Role::CommandCenter))
        }
        _ => Err("both --username and --password are required to log in".into()),
    }
}

/// Ground unit position from flags, falling back to the config file.
fn resolve_ground_unit(args: &Args, config: &AppConfig) -> Result<GeoPosition, Box<dyn Error>> {
    match (args.lat, args.lon) {
        (Some(latitude), Some(longitude)) => {
            let elevation_m = args.elev.unwrap_or(0.0);
            Ok(GeoPosition::new(latitude, longitude, elevation_m)?)
        }
        (None, None) => {
            if args.elev.is_some() {
                return Err("--elev requires --lat and --lon".into());
            }
            match config.ground_unit {
                Some(unit) => Ok(unit.to_position()?),
                None => Err(
                    "no ground unit position configured; pass --lat/--lon or set [ground_unit] in the config file"
                        .into(),
                ),
            }
        }
        _ => Err("--lat and --lon must be given together".into()),
    }
}

/// Wire up alert sinks from flags and config. Flags win over config.
fn build_dispatcher(args: &Args, config: &AppConfig) -> Result<AlertDispatcher, Box<dyn Error>> {
    let mut dispatcher = AlertDispatcher::new();
    if let Some(path) = args.alert_log.as_ref().or(config.alert_log.as_ref()) {
        dispatcher.add_sink(Box::new(CsvLogSink::new(path.clone())));
    }
    if let Some(url) = args.webhook_url.as_ref().or(config.webhook_url.as_ref()) {
        dispatcher.add_sink(Box::new(WebhookSink::new(url.clone())?));
    }
    Ok(dispatcher)
}

fn print_config(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let path = AppConfig::get_config_path()?;
    println!("Config file: {}", path.display());
    println!("Threshold: {:.1} m", config.threshold_m);
    println!("Notify: {}", config.notify.display_name());
    match config.ground_unit {
        Some(unit) => println!(
            "Ground unit: ({:.4}°, {:.4}°, {:.1} m)",
            unit.latitude, unit.longitude, unit.elevation_m
        ),
        None => println!("Ground unit: not set"),
    }
    match &config.alert_log {
        Some(path) => println!("Alert log: {}", path.display()),
        None => println!("Alert log: not set"),
    }
    match &config.webhook_url {
        Some(url) => println!("Webhook: {}", url),
        None => println!("Webhook: not set"),
    }
    Ok(())
}

fn print_dashboard(session: &Session) {
    match session.role() {
        Some(Role::GroundUnit) => {
            println!("Ground Unit Dashboard");
            if session.alert_sent() {
                println!("Alert: You are within the proximity threshold of an aircraft!");
            } else {
                println!("No proximity alerts.");
            }
        }
        Some(Role::Aircraft) => {
            println!("Aircraft Dashboard");
            if session.alert_sent() {
                println!("Alert: You are within the proximity threshold of the ground unit!");
            } else {
                println!("No proximity alerts.");
            }
        }
        _ => {}
    }
}
