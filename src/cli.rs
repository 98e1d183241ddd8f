//! Command-line arguments

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "serve_api")]
#[command(about = "Serve the built API bundle over loopback HTTP for notebook live-loading")]
pub struct Cli {
    /// Port to listen on; 0 picks a free port (default 9009)
    #[arg(value_name = "PORT")]
    pub port: Option<u16>,

    /// Config file name without extension
    #[arg(long, default_value = "serve_api")]
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_port_uses_default() {
        let cli = Cli::try_parse_from(["serve_api"]).unwrap();
        assert_eq!(cli.port, None);
        assert_eq!(cli.config, "serve_api");
    }

    #[test]
    fn test_explicit_ports() {
        let cli = Cli::try_parse_from(["serve_api", "0"]).unwrap();
        assert_eq!(cli.port, Some(0));

        let cli = Cli::try_parse_from(["serve_api", "8080", "--config", "dev"]).unwrap();
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.config, "dev");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["serve_api", "abc"]).is_err());
        assert!(Cli::try_parse_from(["serve_api", "70000"]).is_err());
        assert!(Cli::try_parse_from(["serve_api", "-1"]).is_err());
    }
}
