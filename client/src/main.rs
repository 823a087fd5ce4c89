use crate::{
    config::Config,
    error::ClientError,
    render::LogRenderer,
    session::Session,
    transport::JsonLines,
};
use log::{error, info};
use tokio::{io::BufReader, sync::mpsc};

mod cache;
mod config;
mod diff;
mod error;
mod render;
mod session;
#[cfg(test)]
mod test;
mod transcript;
mod transport;
mod zones;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClientError> {
    env_logger::init();

    let config = Config::from_args()?;
    let (tx, rx) = mpsc::unbounded_channel();
    let reader = match &config.transcript {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            tokio::spawn(transcript::forward(BufReader::new(file), tx))
        }
        None => tokio::spawn(transcript::forward(BufReader::new(tokio::io::stdin()), tx)),
    };

    let session = Session::new(
        JsonLines::new(std::io::stdout()),
        LogRenderer {
            verbose: config.render_snapshots,
        },
    );
    let session = session.run(rx).await?;
    info!(
        "session finished: player_id={:?}, state_known={}, closed={}",
        session.player_id(),
        session.cache().is_known(),
        session.is_closed()
    );

    if session.is_closed() {
        reader.abort();
    } else {
        match reader.await {
            Ok(result) => result?,
            Err(e) => error!("transcript reader failed: {}", e),
        }
    }
    Ok(())
}
