//! Web server command.

use console::style;

use crate::config::Settings;
use crate::seed::ensure_seeded;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: Option<&str>) -> anyhow::Result<()> {
    let bind = bind
        .map(str::to_string)
        .unwrap_or_else(|| settings.bind_address());
    let (host, port) = parse_bind_address(&bind, &settings.host, settings.port);

    let report = ensure_seeded(settings)?;
    if report.created_any() {
        println!(
            "{} Seeded default content in {}",
            style("→").cyan(),
            settings.data_dir.display()
        );
    }

    println!(
        "{} Starting biascheck server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8080" -> default_host:8080
/// - Just a host: "127.0.0.1" -> 127.0.0.1:default_port
/// - Host and port: "127.0.0.1:8080"
fn parse_bind_address(bind: &str, default_host: &str, default_port: u16) -> (String, u16) {
    if let Ok(port) = bind.parse::<u16>() {
        return (default_host.to_string(), port);
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    (bind.to_string(), default_port)
}
