use anyhow::Result;

use chat_share_extractor::{cli, logging};

fn main() -> Result<()> {
    logging::init();
    cli::run()
}
