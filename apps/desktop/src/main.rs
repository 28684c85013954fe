#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcard_notes_lib::run().await
}
