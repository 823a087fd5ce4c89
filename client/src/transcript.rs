use crate::{error::ClientError, session::Input, zones::Zone};
use log::{debug, warn};
use serde::Deserialize;
use tichu_api::{ServerEvent, WireCard};
use tokio::{io::AsyncBufRead, io::AsyncBufReadExt, sync::mpsc::UnboundedSender};
use tokio_stream::{wrappers::LinesStream, StreamExt};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum LocalInput {
    Drag { card: WireCard, from: Zone, to: Zone },
    Commit,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Line {
    Server(ServerEvent),
    Local(LocalInput),
}

/// Parses one transcript line; blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Input>, serde_json::Error> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(match serde_json::from_str(line)? {
        Line::Server(event) => Input::Server(event),
        Line::Local(LocalInput::Drag { card, from, to }) => Input::Drag { card, from, to },
        Line::Local(LocalInput::Commit) => Input::Commit,
    }))
}

/// Feeds transcript lines to the session until the input ends or the session
/// stops listening.
pub async fn forward<R>(reader: R, tx: UnboundedSender<Input>) -> Result<(), ClientError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(reader.lines());
    while let Some(line) = lines.next().await {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(input)) => {
                if tx.send(input).is_err() {
                    debug!("forward: session closed");
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => warn!("skipping transcript line {:?}: {}", line, e),
        }
    }
    Ok(())
}
