//! Tests for argument parsing and config resolution.

use clap::Parser;
use std::io::Write;
use strictly_server::ServerConfig;
use strictly_tris::{Cli, Command, Script, ScriptedMove, ServeArgs};

fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(args).expect("Arguments should parse").command
}

#[test]
fn test_play_defaults() {
    let Command::Play(args) = parse(&["strictly_tris", "play"]) else {
        panic!("Expected play");
    };
    assert_eq!(args.server_url, "http://127.0.0.1:8000");
    assert_eq!(args.script, Script::WinOne);
    assert_eq!(args.moves, None);
    assert_eq!(args.moves().unwrap(), Script::WinOne.moves());
}

#[test]
fn test_play_script_names() {
    for (name, script) in [
        ("win-one", Script::WinOne),
        ("win-two", Script::WinTwo),
        ("draw", Script::Draw),
    ] {
        let Command::Play(args) = parse(&["strictly_tris", "play", "--script", name]) else {
            panic!("Expected play");
        };
        assert_eq!(args.script, script);
    }
}

#[test]
fn test_unknown_script_rejected() {
    assert!(Cli::try_parse_from(["strictly_tris", "play", "--script", "stalemate"]).is_err());
}

#[test]
fn test_moves_file_replaces_script() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"moves = [[1, 1, 1], [2, 0, 0]]\n").unwrap();
    let path = file.path().to_str().unwrap();

    let Command::Play(args) = parse(&["strictly_tris", "play", "--script", "draw", "--moves", path])
    else {
        panic!("Expected play");
    };
    assert_eq!(
        args.moves().unwrap(),
        vec![ScriptedMove::new(1, 1, 1), ScriptedMove::new(2, 0, 0)]
    );
}

#[test]
fn test_serve_flags() {
    let Command::Serve(args) = parse(&[
        "strictly_tris",
        "serve",
        "--host",
        "0.0.0.0",
        "--port",
        "9000",
        "--ttl-secs",
        "30",
        "--no-mate",
    ]) else {
        panic!("Expected serve");
    };

    let config = args.apply(ServerConfig::default());
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 9000);
    assert_eq!(*config.ttl_secs(), 30);
    assert!(!*config.mate_prediction());
}

#[test]
fn test_serve_without_flags_keeps_config() {
    let base = ServerConfig::default().with_port(7000).with_purge_interval_secs(5);
    assert_eq!(ServeArgs::default().apply(base.clone()), base);
}

#[test]
fn test_flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"port = 7100\nttl_secs = 10\n").unwrap();

    let args = ServeArgs {
        config: Some(file.path().to_path_buf()),
        ttl_secs: Some(20),
        ..ServeArgs::default()
    };
    let config = args.apply(ServerConfig::from_file(file.path()).unwrap());

    assert_eq!(*config.port(), 7100);
    assert_eq!(*config.ttl_secs(), 20);
    assert!(*config.mate_prediction());
}
