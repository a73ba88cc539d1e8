use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "miniblog", about = "Read-only blog server")]
pub struct Config {
    /// Directory holding one JSON file per post.
    #[arg(long, env = "MINIBLOG_STORE", default_value = "store/post")]
    pub store: std::path::PathBuf,

    /// Address to listen on.
    #[arg(long, env = "MINIBLOG_BIND", default_value = "0.0.0.0:8010")]
    pub bind: std::net::SocketAddr,
}
