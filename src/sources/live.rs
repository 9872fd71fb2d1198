use crate::error::ExtractError;
use fantoccini::{Client, ClientBuilder};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Opens `listing_url` in a WebDriver-controlled browser, waits for the
/// operator to load every page of results by hand, then returns the page
/// source.
///
/// The session is closed whether or not the capture succeeded.
pub async fn capture(webdriver_url: &str, listing_url: &str) -> Result<String, ExtractError> {
    ::log::info!("Connecting to WebDriver at {}", webdriver_url);
    let client = ClientBuilder::native()
        .connect(webdriver_url)
        .await
        .map_err(|e| ExtractError::WebDriver(format!("failed to connect to {webdriver_url}: {e}")))?;

    let result = capture_with_client(&client, listing_url).await;

    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }

    result
}

async fn capture_with_client(client: &Client, listing_url: &str) -> Result<String, ExtractError> {
    client
        .goto(listing_url)
        .await
        .map_err(|e| ExtractError::WebDriver(format!("failed to open {listing_url}: {e}")))?;

    // stdout carries the result, so instructions go to stderr
    eprintln!("Opened {listing_url} in the WebDriver browser.");
    eprintln!("Scroll down and press the \"more\" button until no more recipes load,");
    eprintln!("then press Enter here to extract the links.");
    wait_for_operator().await?;

    let html = client
        .source()
        .await
        .map_err(|e| ExtractError::WebDriver(format!("failed to read page source: {e}")))?;
    ::log::info!("Captured {} bytes of page source", html.len());
    Ok(html)
}

/// Blocks until a line (or EOF) arrives on stdin
async fn wait_for_operator() -> Result<(), ExtractError> {
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(())
}
