use crate::{
    config::Config,
    error::ClientError,
    render::{Renderer, Snapshot},
    session::{Commit, Input, Session},
    transport::Transport,
    zones::Zone,
};
use log::LevelFilter;
use std::io::Write;
use tichu_api::{Card, CardObject, ClientEvent, GameState, PlayerId, ServerEvent, WireCard};
use tokio::sync::mpsc;

macro_rules! c {
    ($id:expr) => {
        $id.parse::<tichu_api::Card>().unwrap()
    };
}

macro_rules! map {
    ($($x:expr => $y:expr),*) => (
        vec![$(($x, $y)),*].into_iter().collect::<std::collections::HashMap<_, _>>()
    );
}

#[derive(Default)]
struct Recorder {
    sent: Vec<ClientEvent>,
}

impl Transport for Recorder {
    fn send(&mut self, event: &ClientEvent) -> Result<(), ClientError> {
        self.sent.push(event.clone());
        Ok(())
    }
}

struct Broken;

impl Transport for Broken {
    fn send(&mut self, _: &ClientEvent) -> Result<(), ClientError> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "socket closed").into())
    }
}

#[derive(Default)]
struct Screen {
    frames: Vec<Snapshot>,
    reports: Vec<String>,
}

impl Renderer for Screen {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames.push(snapshot.clone());
    }

    fn report(&mut self, message: &str) {
        self.reports.push(message.to_string());
    }
}

fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

fn session() -> Session<Recorder, Screen> {
    init_logging();
    Session::new(Recorder::default(), Screen::default())
}

fn wire(ids: &[&str]) -> Vec<WireCard> {
    ids.iter().map(|id| WireCard::RawId(id.to_string())).collect()
}

fn update(message: &str, played: Vec<WireCard>, hand: Vec<WireCard>) -> Input {
    Input::Server(ServerEvent::UpdateState(GameState {
        message: message.to_string(),
        played_cards: played,
        player_hands: map!["player1".into() => hand, "player2".into() => wire(&["A:black"])],
    }))
}

fn assign(player: &str) -> Input {
    Input::Server(ServerEvent::AssignPlayerId {
        player_id: player.into(),
    })
}

fn drag(id: &str, from: Zone, to: Zone) -> Input {
    Input::Drag {
        card: WireCard::RawId(id.to_string()),
        from,
        to,
    }
}

fn sent_cards(session: &Session<Recorder, Screen>) -> Vec<Vec<Card>> {
    session
        .transport()
        .sent
        .iter()
        .map(|event| match event {
            ClientEvent::PlayCards { played_cards } => played_cards.clone(),
        })
        .collect()
}

#[test]
fn test_dragon_on_table_seven_played() {
    let mut session = session();
    session.handle(assign("player1")).unwrap();
    session
        .handle(update(
            "Du bist am Zug",
            vec![WireCard::FullObject(CardObject::from(Card::DRAGON))],
            vec![WireCard::FullObject(CardObject {
                rank: Some("7".to_string()),
                color: Some("red".to_string()),
                ..CardObject::default()
            })],
        ))
        .unwrap();
    session
        .handle(drag("7:red", Zone::Hand, Zone::PlayArea))
        .unwrap();
    assert_eq!(session.commit().unwrap(), Commit::Sent(1));
    assert_eq!(sent_cards(&session), vec![vec![c!("7:red")]]);
}

#[test]
fn test_second_snapshot_replaces_first() {
    let mut session = session();
    session.handle(assign("player1")).unwrap();
    session
        .handle(update("first", wire(&["dragon", "7:red"]), wire(&["2:green"])))
        .unwrap();
    session
        .handle(update("second", wire(&["dog"]), wire(&["3:green"])))
        .unwrap();
    assert_eq!(
        session.cache().previous_played_cards().unwrap(),
        &wire(&["dog"])[..]
    );
    assert_eq!(session.cache().message(), Some("second"));
    assert_eq!(session.zones().cards(Zone::Hand), &wire(&["3:green"])[..]);
}

#[test]
fn test_unchanged_play_area_sends_nothing() {
    let mut session = session();
    session.handle(assign("player1")).unwrap();
    session
        .handle(update("", wire(&["dragon", "7:red"]), wire(&["2:green"])))
        .unwrap();
    assert_eq!(session.commit().unwrap(), Commit::Empty);
    session.handle(Input::Commit).unwrap();
    assert!(session.transport().sent.is_empty());
    assert!(session.renderer().reports.is_empty());
}

#[test]
fn test_delta_is_stable_until_reconciled() {
    let mut session = session();
    session.handle(assign("player1")).unwrap();
    session
        .handle(update("", wire(&["dragon"]), wire(&["7:red", "8:red"])))
        .unwrap();
    session
        .handle(drag("8:red", Zone::Hand, Zone::PlayArea))
        .unwrap();
    session
        .handle(drag("7:red", Zone::Hand, Zone::PlayArea))
        .unwrap();
    assert_eq!(session.commit().unwrap(), Commit::Sent(2));
    assert_eq!(session.commit().unwrap(), Commit::Sent(2));
    assert_eq!(
        sent_cards(&session),
        vec![
            vec![c!("8:red"), c!("7:red")],
            vec![c!("8:red"), c!("7:red")]
        ]
    );

    // the server accepts the play and pushes the new table
    session
        .handle(update("", wire(&["dragon", "8:red", "7:red"]), vec![]))
        .unwrap();
    assert_eq!(session.commit().unwrap(), Commit::Empty);
    assert_eq!(session.transport().sent.len(), 2);
}

#[test]
fn test_play_area_cards_cannot_return_to_hand() {
    let mut session = session();
    session.handle(assign("player1")).unwrap();
    session
        .handle(update("", wire(&["dragon"]), wire(&["7:red"])))
        .unwrap();
    session
        .handle(drag("7:red", Zone::Hand, Zone::PlayArea))
        .unwrap();
    session
        .handle(drag("7:red", Zone::PlayArea, Zone::Hand))
        .unwrap();
    session
        .handle(drag("dragon", Zone::PlayArea, Zone::Hand))
        .unwrap();
    assert_eq!(session.renderer().reports.len(), 2);
    assert!(session.zones().cards(Zone::Hand).is_empty());
    session.handle(Input::Commit).unwrap();
    assert_eq!(sent_cards(&session), vec![vec![c!("7:red")]]);
}

#[test]
fn test_malformed_card_aborts_commit() {
    let mut session = session();
    session.handle(assign("player1")).unwrap();
    let mut played = wire(&["dragon"]);
    played.push(WireCard::FullObject(CardObject::default()));
    session
        .handle(update("", played, wire(&["7:red"])))
        .unwrap();
    // the render of the snapshot was aborted and reported
    assert!(session.renderer().frames.is_empty());
    assert_eq!(session.renderer().reports.len(), 1);

    session
        .handle(drag("7:red", Zone::Hand, Zone::PlayArea))
        .unwrap();
    assert!(matches!(
        session.commit(),
        Err(ClientError::MalformedCard { .. })
    ));
    session.handle(Input::Commit).unwrap();
    assert!(session.transport().sent.is_empty());
    assert!(!session.is_closed());

    // a clean snapshot renders again
    session
        .handle(update("repaired", wire(&["dragon"]), wire(&["7:red"])))
        .unwrap();
    assert_eq!(session.renderer().frames.last().unwrap().message, "repaired");
}

#[test]
fn test_compact_ids_render_and_commit() {
    let mut session = session();
    session.handle(assign("player1")).unwrap();
    session
        .handle(update("Du bist am Zug", wire(&["H7"]), wire(&["DT", "SA", "C2"])))
        .unwrap();
    assert!(session.renderer().reports.is_empty());
    let frame = session.renderer().frames.last().unwrap().clone();
    assert_eq!(frame.played_cards, vec![c!("7:red")]);
    assert_eq!(frame.my_hand, vec![c!("10:blue"), c!("A:black"), c!("2:green")]);

    session
        .handle(drag("SA", Zone::Hand, Zone::PlayArea))
        .unwrap();
    session
        .handle(drag("2:green", Zone::Hand, Zone::PlayArea))
        .unwrap();
    session.handle(Input::Commit).unwrap();
    assert_eq!(sent_cards(&session), vec![vec![c!("A:black"), c!("2:green")]]);
}

#[test]
fn test_malformed_drag_card_is_reported() {
    let mut session = session();
    session.handle(assign("player1")).unwrap();
    session
        .handle(update("", wire(&[]), wire(&["7:red"])))
        .unwrap();
    session
        .handle(drag("joker", Zone::Hand, Zone::PlayArea))
        .unwrap();
    assert_eq!(session.renderer().reports.len(), 1);
    assert!(session.renderer().reports[0].starts_with("malformed card"));
    assert_eq!(session.zones().cards(Zone::Hand), &wire(&["7:red"])[..]);
    assert!(!session.is_closed());
}

#[test]
fn test_commit_before_any_snapshot() {
    let mut session = session();
    assert!(matches!(session.commit(), Err(ClientError::StateUnknown)));
    session.handle(Input::Commit).unwrap();
    assert_eq!(
        session.renderer().reports,
        vec!["no state received from the server yet".to_string()]
    );
}

#[test]
fn test_snapshot_before_player_id() {
    let mut session = session();
    session
        .handle(update("Warte auf Spieler", wire(&[]), wire(&["7:red"])))
        .unwrap();
    let frame = session.renderer().frames.last().unwrap().clone();
    assert_eq!(frame.player_id, None);
    assert!(frame.my_hand.is_empty());

    session.handle(assign("player1")).unwrap();
    let frame = session.renderer().frames.last().unwrap().clone();
    assert_eq!(frame.player_id, Some(PlayerId::from("player1")));
    assert_eq!(frame.my_hand, vec![c!("7:red")]);
    assert_eq!(frame.message, "Warte auf Spieler");
}

#[test]
fn test_renders_after_every_change() {
    let mut session = session();
    session.handle(assign("player2")).unwrap();
    session
        .handle(update("", wire(&[]), wire(&["7:red"])))
        .unwrap();
    session
        .handle(drag("A:black", Zone::Hand, Zone::PlayArea))
        .unwrap();
    let frames = &session.renderer().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].my_hand, vec![c!("A:black")]);
    assert!(frames[1].my_hand.is_empty());
    assert_eq!(frames[1].played_cards, vec![c!("A:black")]);
}

#[test]
fn test_game_full_closes_session() {
    let mut session = session();
    session
        .handle(Input::Server(ServerEvent::GameFull {
            message: "Das Spiel ist leider schon voll.".to_string(),
        }))
        .unwrap();
    assert!(session.is_closed());
    assert_eq!(
        session.renderer().reports,
        vec!["Das Spiel ist leider schon voll.".to_string()]
    );
    session
        .handle(update("", wire(&[]), wire(&["7:red"])))
        .unwrap();
    assert!(!session.cache().is_known());
    assert!(session.renderer().frames.is_empty());
}

#[test]
fn test_transport_failure_is_fatal() {
    init_logging();
    let mut session = Session::new(Broken, Screen::default());
    session.handle(assign("player1")).unwrap();
    session
        .handle(update("", wire(&[]), wire(&["7:red"])))
        .unwrap();
    session
        .handle(drag("7:red", Zone::Hand, Zone::PlayArea))
        .unwrap();
    assert!(matches!(
        session.handle(Input::Commit),
        Err(ClientError::Io { .. })
    ));
}

#[tokio::test]
async fn test_run_processes_in_order() {
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(assign("player1")).unwrap();
    tx.send(update("", wire(&["dragon"]), wire(&["7:red", "Jade 2"])))
        .unwrap();
    tx.send(drag("2:green", Zone::Hand, Zone::PlayArea)).unwrap();
    tx.send(Input::Commit).unwrap();
    tx.send(update("", wire(&["dragon", "2:green"]), wire(&["7:red"])))
        .unwrap();
    tx.send(Input::Commit).unwrap();
    drop(tx);

    let session = session().run(rx).await.unwrap();
    assert_eq!(sent_cards(&session), vec![vec![c!("2:green")]]);
    assert!(!session.is_closed());
}

#[tokio::test]
async fn test_run_stops_on_game_full() {
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(Input::Server(ServerEvent::GameFull {
        message: "voll".to_string(),
    }))
    .unwrap();
    tx.send(assign("player1")).unwrap();

    let session = session().run(rx).await.unwrap();
    assert!(session.is_closed());
    assert_eq!(session.player_id(), None);
}

#[test]
fn test_config_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"{{"transcript": "game.jsonl", "render_snapshots": true}}"#
    )
    .unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.transcript.unwrap().to_str(), Some("game.jsonl"));
    assert!(config.render_snapshots);

    std::fs::write(&path, "{}").unwrap();
    let config = Config::load(&path).unwrap();
    assert!(config.transcript.is_none());
    assert!(!config.render_snapshots);

    assert!(matches!(
        Config::load(dir.path().join("missing.json")),
        Err(ClientError::Io { .. })
    ));
    std::fs::write(&path, "{").unwrap();
    assert!(matches!(
        Config::load(&path),
        Err(ClientError::Serde { .. })
    ));
}
