use clap::Parser;

/// Live sports scoreboard service
#[derive(Parser, Debug, Clone)]
#[command(name = "live-scoreboard", version, about)]
pub struct Config {
    /// Dashboard listen address
    #[arg(long, env = "SCOREBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Keep finished matches on the board and reject restarting their pair
    #[arg(long, env = "RETAIN_FINISHED", default_value = "false")]
    pub retain_finished: bool,
}
