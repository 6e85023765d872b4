//! Host address value object
//!
//! Accepts `host`, `host:port` and `[v6-address]:port`. A bare IPv6 address
//! without brackets is taken as a host with no port.

use std::fmt;

use crate::error::ShipError;

/// Remote host plus optional explicit port
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostAddress {
    host: String,
    port: Option<u16>,
}

impl HostAddress {
    /// Parse a host string as typed by the user
    pub fn parse(input: &str) -> Result<Self, ShipError> {
        let input = input.trim();
        let invalid = |reason: &str| ShipError::InvalidHost {
            host: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("host is empty"));
        }

        if let Some(rest) = input.strip_prefix('[') {
            let (host, tail) = rest
                .split_once(']')
                .ok_or_else(|| invalid("missing closing ']'"))?;
            if host.is_empty() {
                return Err(invalid("host is empty"));
            }
            let port = match tail {
                "" => None,
                t => {
                    let digits = t
                        .strip_prefix(':')
                        .ok_or_else(|| invalid("expected ':' after ']'"))?;
                    Some(
                        parse_port(digits)
                            .ok_or_else(|| invalid("port must be a number between 1 and 65535"))?,
                    )
                }
            };
            return Ok(Self {
                host: host.to_string(),
                port,
            });
        }

        match input.split_once(':') {
            // More than one colon and no brackets: a bare IPv6 address
            Some((_, rest)) if rest.contains(':') => Ok(Self {
                host: input.to_string(),
                port: None,
            }),
            Some((host, port)) => {
                if host.is_empty() {
                    return Err(invalid("host is empty"));
                }
                let port = parse_port(port)
                    .ok_or_else(|| invalid("port must be a number between 1 and 65535"))?;
                Ok(Self {
                    host: host.to_string(),
                    port: Some(port),
                })
            }
            None => Ok(Self {
                host: input.to_string(),
                port: None,
            }),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// `host:port` string suitable for `ToSocketAddrs`
    pub fn socket_addr(&self, default_port: u16) -> String {
        let port = self.port.unwrap_or(default_port);
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, port)
        } else {
            format!("{}:{}", self.host, port)
        }
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) if self.host.contains(':') => write!(f, "[{}]:{}", self.host, port),
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

fn parse_port(s: &str) -> Option<u16> {
    s.parse::<u16>().ok().filter(|p| *p != 0)
}
