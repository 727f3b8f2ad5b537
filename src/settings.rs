use std::{
    fs,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_address")]
    pub address: IpAddr,
    pub port: u16,
    #[serde(default)]
    pub tracing: Tracing,
}

impl Settings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Tracing {
    #[serde(default = "default_filter")]
    pub filter: String,
    pub otlp_endpoint: Option<Url>,
}

impl Default for Tracing {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            otlp_endpoint: None,
        }
    }
}

fn default_address() -> IpAddr {
    Ipv4Addr::LOCALHOST.into()
}

fn default_filter() -> String {
    concat!("info,", env!("CARGO_CRATE_NAME"), "=trace").to_owned()
}

pub fn load() -> Result<Settings> {
    load_from(&[
        concat!("/etc/", env!("CARGO_PKG_NAME"), "/config.toml"),
        concat!("/app/", env!("CARGO_PKG_NAME"), ".toml"),
        concat!(env!("CARGO_PKG_NAME"), ".toml"),
    ])
}

/// Load the settings from the first readable file of the given locations.
fn load_from(locations: &[&str]) -> Result<Settings> {
    let buf = locations
        .iter()
        .find_map(|loc| fs::read_to_string(loc).ok().map(|buf| (loc, buf)));

    match buf {
        Some((loc, buf)) => parse(&buf).with_context(|| format!("invalid settings in {loc}")),
        None => bail!("failed finding settings"),
    }
}

fn parse(buf: &str) -> Result<Settings> {
    toml::from_str(buf).map_err(Into::into)
}
