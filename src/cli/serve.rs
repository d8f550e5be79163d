//! `folio serve`

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::server::DevServer;

/// Serve a built site for local preview.
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory to serve (defaults to the build output)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,
}

impl ServeCommand {
    pub async fn execute(self, site: &SiteConfig) -> Result<()> {
        let port = self.port.unwrap_or(site.server.port);
        let root = self.root.unwrap_or_else(|| site.server_root().to_path_buf());

        let server = DevServer::bind(root, SocketAddr::new(self.host, port)).await?;
        let addr = server.local_addr()?;
        print_banner(addr.port());

        server.run().await?;
        println!("\n{} Server stopped", "✓".green());
        Ok(())
    }
}

fn print_banner(port: u16) {
    println!();
    println!("{}", "Local development server started".bold());
    println!();
    println!("Server running at: {}", format!("http://localhost:{port}").cyan());
    println!();
    println!("To stop the server, press Ctrl+C");
    println!();
}
