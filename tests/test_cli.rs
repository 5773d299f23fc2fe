use mockito::Matcher;
use std::process::Command;

const MARGARITA: &str = include_str!("fixtures/margarita.json");
const SEARCH_MARGARITA: &str = include_str!("fixtures/search_margarita.json");

fn thirsty(base_url: &str, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_thirsty"))
        .args(args)
        .env("THIRSTY__API__BASE_URL", base_url)
        .env("RUST_LOG", "error") // Suppress debug logs
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_search() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", Matcher::Regex(r"^/search\.php".to_string()))
        .match_query(Matcher::UrlEncoded("s".into(), "blue margarita".into()))
        .with_status(200)
        .with_body(SEARCH_MARGARITA)
        .create();

    let output = thirsty(&server.url(), &["search", "blue", "margarita"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains(" 11007  Margarita  [Ordinary Drink]"));
    assert!(stdout.contains("178332  Smashed Watermelon Margarita  [Cocktail]"));
}

#[test]
fn test_cli_search_no_results() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", Matcher::Regex(r"^/search\.php".to_string()))
        .with_status(200)
        .with_body(r#"{"drinks": null}"#)
        .create();

    let output = thirsty(&server.url(), &["search", "nothing"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "No drinks found\n");
}

#[test]
fn test_cli_show() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", Matcher::Regex(r"^/lookup\.php".to_string()))
        .with_status(200)
        .with_body(MARGARITA)
        .create();

    let output = thirsty(&server.url(), &["show", "11007", "--no-color"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.starts_with("Margarita\nOrdinary Drink · Cocktail glass · Alcoholic\n"));
    assert!(stdout.contains("/images/media/drink/5noda61589575158.jpg\n"));
    assert!(stdout.contains("■ Tequila (1 1/2 oz)"));
    assert!(stdout.contains("■ Salt\n"));
    assert!(stdout.contains("Proportions:"));
    // 1.5 of 4.0 ounces
    assert!(stdout.contains("37.5%"));
    assert!(stdout.contains("Rub the rim of the glass"));
}

#[test]
fn test_cli_show_without_chart() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", Matcher::Regex(r"^/lookup\.php".to_string()))
        .with_status(200)
        .with_body(MARGARITA)
        .create();

    let output = thirsty(&server.url(), &["show", "11007", "--no-chart", "--no-color"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Ingredients:"));
    assert!(!stdout.contains("Proportions:"));
}

#[test]
fn test_cli_show_json() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", Matcher::Regex(r"^/lookup\.php".to_string()))
        .with_status(200)
        .with_body(MARGARITA)
        .create();

    let output = thirsty(&server.url(), &["show", "11007", "--json"]);
    assert!(output.status.success());

    let card: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(card["drink"]["strDrink"], "Margarita");
    assert_eq!(card["ingredients"][1]["name"], "Triple sec");
    assert_eq!(card["slices"][0]["value"], 1.5);
    assert_eq!(card["slices"][0]["color"], "#f4c2c2");
}

#[test]
fn test_cli_show_not_found() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", Matcher::Regex(r"^/lookup\.php".to_string()))
        .with_status(200)
        .with_body(r#"{"drinks": null}"#)
        .create();

    let output = thirsty(&server.url(), &["show", "0"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Drink not found"));
}

#[test]
fn test_cli_search_requires_term() {
    let output = Command::new(env!("CARGO_BIN_EXE_thirsty"))
        .arg("search")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
