use clap::Parser;
use tile_links::sink::{FileSink, OutputSink, WriterSink};
use tile_links::sources;
use tile_links::{ExtractError, HtmlTree, TileLinkExtractor};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(&args).await {
        ::log::error!("Extraction failed: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), ExtractError> {
    let config = args.to_config()?;
    let extractor = TileLinkExtractor::from_config(&config)?;

    let html = match &args.live {
        Some(listing_url) => sources::live::capture(&config.webdriver_url, listing_url).await?,
        None => sources::file::read_html(args.input())?,
    };
    let tree = HtmlTree::parse_document(&html);

    let mut sink: Box<dyn OutputSink> = match &args.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(WriterSink::new(std::io::stdout())),
    };
    let extraction = extractor.extract_all(&tree, sink.as_mut())?;

    for skipped in &extraction.skipped {
        ::log::warn!("Skipped {}", skipped);
    }
    ::log::info!(
        "Extracted {} URLs from {} tiles",
        extraction.urls.len(),
        extraction.tiles_seen()
    );
    Ok(())
}
