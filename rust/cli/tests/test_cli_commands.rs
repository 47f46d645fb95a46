mod helpers;

use helpers::CliRunner;
use serde_json::Value;
use serial_test::serial;

#[test]
#[serial]
fn help_lists_every_command() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["play", "sim", "deal", "cfg"] {
        assert!(res.stdout.contains(cmd), "help is missing {}", cmd);
    }
    assert!(res.stderr.is_empty());
}

#[test]
#[serial]
fn version_prints_to_stdout() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("whodunit "));
}

#[test]
#[serial]
fn unknown_command_exits_with_usage() {
    let res = CliRunner::new().run(&["accuse"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Usage: whodunit <command> [options]"));
    assert!(res.stderr.contains("For full help, run: whodunit --help"));
}

#[test]
#[serial]
fn unknown_strategy_is_a_usage_error() {
    let res = CliRunner::new().run(&["deal", "--strategy", "clever"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("unknown strategy 'clever'"));
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let res = CliRunner::new().run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["players"]["value"], 3);
    assert_eq!(json["strategy"]["value"], "dumb");
    assert_eq!(json["max_turns"]["value"], 1000);
    assert!(json["seed"]["value"].is_null());
    for key in ["players", "strategy", "seed", "max_turns", "cards_file"] {
        assert_eq!(json[key]["source"], "default", "{}", key);
    }
}

#[test]
#[serial]
fn cfg_env_wins_over_file() {
    let cli = CliRunner::new();
    let file = cli.write_file(
        "whodunit.toml",
        "players = 5\nstrategy = \"random\"\nseed = 1\n",
    );
    let path = file.to_string_lossy().to_string();
    let res = cli.run_with_env(
        &["cfg"],
        &[("WHODUNIT_CONFIG", &path), ("WHODUNIT_SEED", "99")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["players"]["value"], 5);
    assert_eq!(json["players"]["source"], "file");
    assert_eq!(json["strategy"]["value"], "random");
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
}

#[test]
#[serial]
fn cfg_rejects_bad_environment() {
    let res = CliRunner::new().run_with_env(&["cfg"], &[("WHODUNIT_STRATEGY", "psychic")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.starts_with("Error: Configuration error:"));
    assert!(res.stderr.contains("psychic"));
}

#[test]
#[serial]
fn deal_is_deterministic_per_seed() {
    let cli = CliRunner::new();
    let a = cli.run(&["deal", "--seed", "42", "--players", "4"]);
    let b = cli.run(&["deal", "--seed", "42", "--players", "4"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);

    let lines: Vec<&str> = a.stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Seed: 42");
    assert!(lines[1].starts_with("Solution: '"));
    assert!(lines[2].starts_with("P0 ("));
    assert!(lines[5].starts_with("P3 ("));
}

#[test]
#[serial]
fn deal_deals_every_non_solution_card_once() {
    let res = CliRunner::new().run(&["deal", "--seed", "3", "--players", "5"]);
    assert_eq!(res.exit_code, 0);
    let dealt: Vec<String> = res
        .stdout
        .lines()
        .skip(2)
        .flat_map(|line| {
            let (_, cards) = line.split_once("): ").unwrap();
            cards.split(", ").map(str::to_string).collect::<Vec<_>>()
        })
        .collect();
    let mut unique = dealt.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(dealt.len(), 18);
    assert_eq!(unique.len(), 18);

    let solution = res.stdout.lines().nth(1).unwrap();
    for card in &dealt {
        assert!(!solution.contains(&format!("'{}'", card)), "{} dealt", card);
    }
}

#[test]
#[serial]
fn too_many_players_fails_setup() {
    let res = CliRunner::new().run(&["deal", "--players", "6", "--seed", "1"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr
            .contains("Error: Game setup failed: More players (6) than characters (5)"),
        "stderr: {}",
        res.stderr
    );
}

#[test]
#[serial]
fn custom_card_file_is_used() {
    let cli = CliRunner::new();
    let cards = cli.write_file(
        "cards.json",
        r#"{"characters":["Ada","Bob","Cy"],"locations":["Attic","Barn"],"weapons":["Axe","Bat"]}"#,
    );
    let path = cards.to_string_lossy().to_string();
    let res = cli.run(&["deal", "--seed", "8", "--players", "2", "--cards", &path]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(!res.stdout.contains("Kitchen"));
    let hands: usize = res
        .stdout
        .lines()
        .skip(2)
        .map(|l| l.split_once("): ").unwrap().1.split(", ").count())
        .sum();
    assert_eq!(hands, 4);
}

#[test]
#[serial]
fn malformed_card_file_is_invalid_input() {
    let cli = CliRunner::new();
    let cards = cli.write_file("cards.json", r#"{"characters":[],"locations":["A"],"weapons":["B"]}"#);
    let path = cards.to_string_lossy().to_string();
    let res = cli.run(&["deal", "--cards", &path]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid input:"));
    assert!(res.stderr.contains("no character cards"));
}
